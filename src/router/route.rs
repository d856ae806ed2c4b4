use std::sync::Arc;

use http::Method;
use smallvec::SmallVec;

/// Maximum number of path parameters before heap allocation.
/// Most REST-style templates carry four or fewer `:name` segments.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the lookup hot path.
///
/// Parameter names are `Arc<str>` because they come from the static route
/// table built at startup; cloning one is an atomic increment, not a string
/// copy. Values are per-request text sliced out of the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Split a path into its segments: one leading `/` stripped, then split on
/// `/`. The root path `"/"` yields `[""]`, and a doubled slash yields an
/// empty literal segment rather than being collapsed.
#[must_use]
pub fn normalize_path(path: &str) -> Vec<&str> {
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

/// One parsed segment of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Param(Arc<str>),
    Wildcard,
}

/// A compiled route: a method+path template plus its opaque payload.
///
/// The trie decides *which* route matches; the route itself knows its
/// template, so it can be re-walked against the request path afterwards to
/// bind `:name` parameters by position.
#[derive(Debug)]
pub struct Route<T> {
    method: Method,
    raw: String,
    parts: Vec<Part>,
    value: T,
}

impl<T> Route<T> {
    pub(super) fn new(method: Method, path: &str, value: T) -> Self {
        let parts = normalize_path(path)
            .into_iter()
            .map(|segment| {
                if let Some(name) = segment.strip_prefix(':') {
                    Part::Param(Arc::from(name))
                } else if segment.starts_with('*') {
                    Part::Wildcard
                } else {
                    Part::Literal(segment.to_string())
                }
            })
            .collect();

        Self {
            method,
            raw: path.to_string(),
            parts,
            value,
        }
    }

    /// The HTTP method this route was registered under.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The template as registered, e.g. `/users/:id`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.raw
    }

    /// The payload supplied at registration.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether the template ends in a `*` catch-all.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self.parts.last(), Some(Part::Wildcard))
    }

    /// Re-walk the template against the request path segments, binding each
    /// `:name` part to the segment at its depth. Returns `None` when the
    /// shapes differ; catch-all templates usually take that exit, since they
    /// match remainders of any length and bind no parameters.
    pub(super) fn capture(&self, segments: &[&str]) -> Option<ParamVec> {
        if self.parts.len() != segments.len() {
            return None;
        }

        let mut params = ParamVec::new();
        for (part, segment) in self.parts.iter().zip(segments) {
            match part {
                Part::Literal(text) => {
                    if text.as_str() != *segment {
                        return None;
                    }
                }
                Part::Param(name) => {
                    params.push((Arc::clone(name), (*segment).to_string()));
                }
                Part::Wildcard => {}
            }
        }

        Some(params)
    }
}
