//! Join Translation Module - path parsing, existence synthesis and the translator

pub mod existence;
pub mod path;
pub mod translator;

// Re-export main types
pub use existence::{constraint, ConstraintFn, RelatedQuery};
pub use path::{PathSegment, RelationPath};
pub use translator::{apply_relation_join, JoinTranslator};
