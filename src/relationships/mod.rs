//! Relationships Module - entity and relation metadata plus the schema registry

pub mod metadata;
pub mod registry;

// Re-export metadata system types
pub use metadata::{KeyPair, RelationKind, RelationMetadata};
pub use registry::{EntityDef, SchemaRegistry};
