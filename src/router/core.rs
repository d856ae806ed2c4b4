use std::sync::Arc;

use arc_swap::ArcSwap;
use http::Method;
use tracing::{debug, info, warn};

use crate::trie::{InsertError, PathTrie};

use super::route::{normalize_path, ParamVec, Route};

/// Result of successfully matching a request to a route.
///
/// Carries the matched route (shared, not cloned) and the `:name` bindings
/// recovered from the request path. Catch-all matches bind no parameters.
#[derive(Debug)]
pub struct RouteMatch<T> {
    /// The matched route (`Arc` to avoid copying the compiled template)
    pub route: Arc<Route<T>>,
    /// Path parameters bound by position, e.g. `:id` → `"123"`.
    /// Stack-allocated for small parameter counts.
    pub path_params: ParamVec,
}

impl<T> RouteMatch<T> {
    /// Get a path parameter by name.
    ///
    /// Last write wins: if the same name occurs at several depths
    /// (e.g. `/org/:id/user/:id`), the deepest occurrence is returned.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// The payload supplied when the matched route was registered.
    #[must_use]
    pub fn value(&self) -> &T {
        self.route.value()
    }
}

impl<T> Clone for RouteMatch<T> {
    fn clone(&self) -> Self {
        Self {
            route: Arc::clone(&self.route),
            path_params: self.path_params.clone(),
        }
    }
}

/// Method+path router backed by a [`PathTrie`].
///
/// Registration normalizes the template path into segments, prepends the
/// method as segment zero so one trie serves every method, and stores the
/// compiled [`Route`]. Lookup normalizes the request the same way, asks the
/// trie which route applies, then re-walks the winning template to bind
/// `:name` parameters.
///
/// The router is single-writer, multi-reader: call [`add`] (or the method
/// shortcuts) during startup, then share `&Router` across request threads -
/// [`route`] is a pure read. Adding routes while lookups are in flight is
/// not supported; build a fresh router and publish it through
/// [`SharedRouter`] instead.
///
/// [`add`]: Router::add
/// [`route`]: Router::route
pub struct Router<T> {
    tree: PathTrie<Arc<Route<T>>>,
    routes: Vec<Arc<Route<T>>>,
}

impl<T> Router<T> {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: PathTrie::new(),
            routes: Vec::new(),
        }
    }

    /// Register a route under `method` and the template `path`.
    ///
    /// # Errors
    ///
    /// Propagates the trie's configuration errors ([`InsertError`]); these
    /// indicate a malformed or duplicate template and should abort startup.
    pub fn add(&mut self, method: Method, path: &str, value: T) -> Result<(), InsertError> {
        let route = Arc::new(Route::new(method.clone(), path, value));

        let path_segments = normalize_path(route.path());
        let mut segments = Vec::with_capacity(path_segments.len() + 1);
        segments.push(method.as_str());
        segments.extend(path_segments);

        self.tree.insert(&segments, Arc::clone(&route))?;
        self.routes.push(route);

        debug!(method = %method, path = %path, "route registered");
        Ok(())
    }

    /// Shortcut for [`add`](Router::add) with [`Method::GET`].
    pub fn get(&mut self, path: &str, value: T) -> Result<(), InsertError> {
        self.add(Method::GET, path, value)
    }

    /// Shortcut for [`add`](Router::add) with [`Method::POST`].
    pub fn post(&mut self, path: &str, value: T) -> Result<(), InsertError> {
        self.add(Method::POST, path, value)
    }

    /// Shortcut for [`add`](Router::add) with [`Method::PUT`].
    pub fn put(&mut self, path: &str, value: T) -> Result<(), InsertError> {
        self.add(Method::PUT, path, value)
    }

    /// Shortcut for [`add`](Router::add) with [`Method::PATCH`].
    pub fn patch(&mut self, path: &str, value: T) -> Result<(), InsertError> {
        self.add(Method::PATCH, path, value)
    }

    /// Shortcut for [`add`](Router::add) with [`Method::DELETE`].
    pub fn delete(&mut self, path: &str, value: T) -> Result<(), InsertError> {
        self.add(Method::DELETE, path, value)
    }

    /// Every registered route, in registration order.
    #[must_use]
    pub fn routes(&self) -> &[Arc<Route<T>>] {
        &self.routes
    }

    /// Emit a summary of the routing table. Call once registration is done.
    pub fn log_routes(&self) {
        info!(routes_count = self.routes.len(), "routing table loaded");
    }

    /// Match a request to a route.
    ///
    /// `None` means no template applies; callers map that to a not-found
    /// response. There is no error channel here.
    #[must_use]
    pub fn route(&self, method: &Method, path: &str) -> Option<RouteMatch<T>> {
        debug!(method = %method, path = %path, "route match attempt");

        let path_segments = normalize_path(path);
        let mut segments = Vec::with_capacity(path_segments.len() + 1);
        segments.push(method.as_str());
        segments.extend(path_segments.iter().copied());

        let Some(route) = self.tree.lookup(&segments) else {
            warn!(method = %method, path = %path, "no route matched");
            return None;
        };

        let path_params = match route.capture(&path_segments) {
            Some(params) => params,
            // A catch-all won the lookup; it matches remainders of any
            // shape and binds nothing.
            None if route.is_wildcard() => ParamVec::new(),
            None => {
                // The trie and the template disagree about this path, which
                // indicates a routing bug rather than a client error.
                warn!(
                    method = %method,
                    path = %path,
                    template = %route.path(),
                    "matched route does not re-match its request path"
                );
                return None;
            }
        };

        debug!(
            method = %method,
            path = %path,
            template = %route.path(),
            "route matched"
        );

        Some(RouteMatch {
            route: Arc::clone(route),
            path_params,
        })
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Router<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            routes: self.routes.clone(),
        }
    }
}

/// Atomically swappable handle to an immutable [`Router`].
///
/// The supported way to change routes while serving: build a complete
/// replacement router off to the side, then [`swap`](SharedRouter::swap) it
/// in. Readers that loaded the old table keep using it until they finish;
/// new lookups see the replacement. Nothing is ever mutated in place.
pub struct SharedRouter<T> {
    inner: ArcSwap<Router<T>>,
}

impl<T> SharedRouter<T> {
    #[must_use]
    pub fn new(router: Router<T>) -> Self {
        Self {
            inner: ArcSwap::from_pointee(router),
        }
    }

    /// Lock-free snapshot of the current routing table.
    #[must_use]
    pub fn load(&self) -> Arc<Router<T>> {
        self.inner.load_full()
    }

    /// Publish a replacement routing table, returning the previous one.
    pub fn swap(&self, router: Router<T>) -> Arc<Router<T>> {
        self.inner.swap(Arc::new(router))
    }
}
