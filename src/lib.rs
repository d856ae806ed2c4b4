//! # routrie
//!
//! A method+path trie route matcher. Routes are registered as templates made
//! of literal segments, `:name` dynamic segments, and an optional trailing
//! `*` catch-all; lookups resolve an incoming method and path to the
//! registered payload with deterministic precedence:
//!
//! exact literal > dynamic segment > deepest wildcard seen along the walk.
//!
//! The crate is organized into two modules:
//!
//! - **[`trie`]** - the prefix tree itself, keyed on raw segments with the
//!   HTTP method as segment zero
//! - **[`router`]** - the registration and lookup layer that normalizes
//!   paths into segments, feeds the trie, and re-walks matched templates to
//!   bind `:name` parameters
//!
//! ## Example
//!
//! ```
//! use http::Method;
//! use routrie::Router;
//!
//! let mut router = Router::new();
//! router.get("/users/:id", "show_user")?;
//! router.get("/assets/*", "serve_asset")?;
//!
//! let m = router.route(&Method::GET, "/users/123").unwrap();
//! assert_eq!(m.value(), &"show_user");
//! assert_eq!(m.get_path_param("id"), Some("123"));
//!
//! // No registered template matches; the catch-all does not cover /users.
//! assert!(router.route(&Method::GET, "/users/123/posts").is_none());
//!
//! // The catch-all absorbs any remainder under /assets.
//! let m = router.route(&Method::GET, "/assets/css/app.css").unwrap();
//! assert_eq!(m.value(), &"serve_asset");
//! # Ok::<(), routrie::trie::InsertError>(())
//! ```
//!
//! ## Lifecycle
//!
//! The structure is single-writer, multi-reader: register every route during
//! startup, then serve lookups concurrently from as many threads as needed
//! (`&self`, no locking). Mutating the table while lookups are in flight is
//! not supported; use [`router::SharedRouter`] to build a replacement table
//! and swap it in atomically.

pub mod router;
pub mod trie;

pub use router::{Route, RouteMatch, Router, SharedRouter};
pub use trie::{InsertError, PathTrie};
