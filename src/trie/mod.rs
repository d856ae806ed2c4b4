//! # Trie Module
//!
//! The prefix tree at the core of the router. Each node corresponds to one
//! segment position; edges are literal segment text, a shared dynamic slot
//! (all `:name` registrations at a position), or a trailing `*` catch-all.
//!
//! The trie matches on raw segments only. It does not know about HTTP: the
//! caller puts the method in front of the path segments so that method and
//! path share a single tree, and recovers `:name` bindings itself by
//! re-walking the matched template (see [`crate::router`]).
//!
//! ## Precedence
//!
//! At each depth the walk greedily prefers the exact literal child, then the
//! dynamic child. Wildcards never win a depth; they are a memoized fallback:
//! the deepest wildcard child seen along the walk is used when the walk dead
//! ends or stops on a node with no value, even if the walk advanced past the
//! wildcard's node first. Changing that rule would silently reorder route
//! precedence, so it is load-bearing behavior, not an implementation detail.

mod core;
mod error;
#[cfg(test)]
mod tests;

pub use core::PathTrie;
pub use error::InsertError;
