use std::collections::HashMap;

use super::error::InsertError;

/// One vertex of the trie, covering one segment position.
///
/// Children are split by edge kind: exact literals live in a map keyed by
/// their text, while the dynamic slot (shared by every `:name` registration
/// at this position) and the `*` catch-all each get a dedicated field.
/// Keeping them apart means a
/// request segment that happens to be spelled `:id` or `*` can only ever
/// match literally, and it makes the at-most-one-dynamic-child and
/// at-most-one-wildcard-child invariants structural.
///
/// Ownership is strictly hierarchical: a node is owned by its parent and
/// nothing else, so the tree has no cycles and no sharing.
#[derive(Debug, Clone)]
struct Node<T> {
    /// Literal children keyed by exact segment text. The empty string is an
    /// ordinary key here: `//` in a template produces an empty literal
    /// segment, not a skip marker.
    literal: HashMap<String, Node<T>>,
    /// The shared dynamic-segment child, if any `:name` was registered at
    /// this position. The parameter name is not stored; binding names to
    /// request segments is the caller's job.
    dynamic: Option<Box<Node<T>>>,
    /// The catch-all child. Only ever created at the final position of a
    /// template, and terminal by construction: insertion stops here.
    wildcard: Option<Box<Node<T>>>,
    /// Payload of a route terminating at this node. `None` means no route
    /// ends here, which is distinct from a route with a zero-ish payload.
    value: Option<T>,
}

impl<T> Node<T> {
    fn new() -> Self {
        Self {
            literal: HashMap::new(),
            dynamic: None,
            wildcard: None,
            value: None,
        }
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A trie over path segments with literal, dynamic, and catch-all edges.
///
/// The trie stores one opaque payload per fully-registered template and
/// resolves an incoming segment sequence to at most one of them. It is
/// write-once in spirit: build it during startup with [`insert`], then query
/// it concurrently with [`lookup`], which takes `&self` and never mutates.
///
/// Segments are raw strings. By convention the caller prepends the HTTP
/// method as segment zero so one tree serves every method; the trie itself
/// is indifferent to that.
///
/// [`insert`]: PathTrie::insert
/// [`lookup`]: PathTrie::lookup
#[derive(Debug, Clone)]
pub struct PathTrie<T> {
    root: Node<T>,
}

impl<T> PathTrie<T> {
    /// Create an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Register `value` under the template described by `segments`.
    ///
    /// Segment kinds are recognized by prefix, matching the registration
    /// syntax: a leading `:` marks a dynamic segment (the name after the
    /// marker is ignored here), a leading `*` marks the catch-all, anything
    /// else is a literal. Insertion stops at a catch-all; it consumes all
    /// remaining input at lookup time, so no further template segments are
    /// meaningful past it.
    ///
    /// # Errors
    ///
    /// * [`InsertError::WildcardNotLast`] - a `*` segment was not the final
    ///   segment of the template
    /// * [`InsertError::WildcardTaken`] - a catch-all is already registered
    ///   at this position
    /// * [`InsertError::DuplicateRoute`] - the identical template was
    ///   already registered
    pub fn insert(&mut self, segments: &[&str], value: T) -> Result<(), InsertError> {
        let mut current = &mut self.root;

        for (i, segment) in segments.iter().enumerate() {
            if segment.starts_with(':') {
                current = &mut **current.dynamic.get_or_insert_with(Box::default);
                continue;
            }

            if segment.starts_with('*') {
                if i != segments.len() - 1 {
                    return Err(InsertError::WildcardNotLast {
                        template: segments.join("/"),
                    });
                }
                if current.wildcard.is_some() {
                    return Err(InsertError::WildcardTaken {
                        template: segments.join("/"),
                    });
                }
                current = &mut **current.wildcard.get_or_insert_with(Box::default);
                break;
            }

            current = current.literal.entry((*segment).to_string()).or_default();
        }

        if current.value.is_some() {
            return Err(InsertError::DuplicateRoute {
                template: segments.join("/"),
            });
        }

        current.value = Some(value);
        Ok(())
    }

    /// Resolve `segments` to the payload of the best-matching template.
    ///
    /// The walk consumes one input segment per depth, preferring the exact
    /// literal child, then the dynamic child. Before each segment is
    /// consumed, a catch-all child at the current node is remembered,
    /// overwriting any shallower one; if the walk later dead ends, or runs
    /// out of input on a node where no route terminates, the remembered
    /// catch-all's payload is returned instead. Only when no catch-all was
    /// seen does the lookup come back empty.
    ///
    /// Never mutates and never fails; absence of a match is `None`, which
    /// callers typically map to a not-found response.
    #[must_use]
    pub fn lookup(&self, segments: &[&str]) -> Option<&T> {
        let mut current = &self.root;
        let mut last_wildcard: Option<&Node<T>> = None;

        for segment in segments {
            // Hold onto the deepest catch-all seen so far in case the rest
            // of the walk fails to match.
            if let Some(wildcard) = current.wildcard.as_deref() {
                last_wildcard = Some(wildcard);
            }

            if let Some(child) = current.literal.get(*segment) {
                current = child;
                continue;
            }

            match current.dynamic.as_deref() {
                Some(child) => current = child,
                None => return last_wildcard.and_then(|node| node.value.as_ref()),
            }
        }

        if current.value.is_some() {
            return current.value.as_ref();
        }

        last_wildcard.and_then(|node| node.value.as_ref())
    }
}

impl<T> Default for PathTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}
