//! Query Builder - Core builder implementation

use super::types::*;

/// Builder for SELECT queries that relation joins are merged into.
///
/// The builder is the mutable base query of one translation call: joins are
/// appended to it and its select list is conditionally scoped. It is owned by
/// the caller and consumed by value through the fluent methods, so a failed
/// translation leaves nothing to reuse.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pub(crate) select_fields: Vec<String>,
    pub(crate) from_table: Option<String>,
    pub(crate) where_conditions: Vec<WhereCondition>,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) soft_delete: Option<SoftDeleteScope>,
}

impl QueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a soft-delete scope for `table`, applied at SQL generation time
    pub fn with_soft_delete_scope(mut self, table: &str) -> Self {
        self.soft_delete = Some(SoftDeleteScope::new(table));
        self
    }

    /// Get the join clauses appended so far
    pub fn join_clauses(&self) -> &[JoinClause] {
        &self.joins
    }

    /// True when no explicit select list has been set
    pub(crate) fn selects_wildcard(&self) -> bool {
        self.select_fields.is_empty() || self.select_fields == ["*"]
    }
}
