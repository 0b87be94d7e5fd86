//! Query Builder Module - fluent SELECT builder that relation joins are merged into

pub mod builder;
pub mod joins;
pub mod select;
pub mod sql_generation;
pub mod types;
pub mod where_clause;

// Re-export main types and builder
pub use builder::QueryBuilder;
pub use types::{
    JoinClause, JoinType, QueryOperator, SoftDeleteMode, SoftDeleteScope, WhereCondition,
    DELETED_AT,
};
