//! # Router Module
//!
//! The registration and lookup layer on top of [`crate::trie`].
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Normalizing template and request paths into segment sequences
//! - Prefixing the HTTP method as segment zero so one trie serves all methods
//! - Re-walking matched templates to bind `:name` path parameters
//! - Publishing replacement route tables atomically ([`SharedRouter`])
//!
//! ## Example
//!
//! ```
//! use http::Method;
//! use routrie::Router;
//!
//! let mut router = Router::new();
//! router.get("/pets/:id", "get_pet")?;
//! router.get("/static/*", "static_files")?;
//!
//! let m = router.route(&Method::GET, "/pets/42").unwrap();
//! assert_eq!(m.value(), &"get_pet");
//! assert_eq!(m.get_path_param("id"), Some("42"));
//! # Ok::<(), routrie::trie::InsertError>(())
//! ```

mod core;
mod route;

pub use core::{RouteMatch, Router, SharedRouter};
pub use route::{normalize_path, ParamVec, Route, MAX_INLINE_PARAMS};
