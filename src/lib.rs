//! # relation-join: relation existence filters as SQL JOINs
//!
//! Rewrites has/where-has style existence constraints on single-row relations
//! (belongs-to, has-one) into INNER JOIN clauses on the caller's query,
//! preserving soft-delete scoping, per-hop constraint callbacks and
//! relation-chain traversal. Multi-row and polymorphic relations are refused
//! rather than silently deduplicated.
//!
//! The schema registry is the metadata provider: register entities and their
//! relations once at startup, then translate dot-chained paths like
//! `"post.author as post_authors"` against any base query.

pub mod error;
pub mod join;
pub mod query;
pub mod relationships;


// Re-export core traits and types
pub use error::*;
pub use join::*;
pub use query::*;
pub use relationships::*;
