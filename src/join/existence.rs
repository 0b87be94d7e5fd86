//! Existence Queries - the predicate surface handed to per-hop constraint callbacks

use serde_json::Value;

use crate::query::{QueryBuilder, WhereCondition};
use crate::relationships::{EntityDef, RelationMetadata};

/// Per-hop constraint callback, applied to the hop's existence query
pub type ConstraintFn = Box<dyn FnOnce(RelatedQuery) -> RelatedQuery>;

/// Wrap a closure as an optional constraint callback
pub fn constraint<F>(f: F) -> Option<ConstraintFn>
where
    F: FnOnce(RelatedQuery) -> RelatedQuery + 'static,
{
    Some(Box::new(f))
}

/// The related table's existence query for one hop.
///
/// Carries the correlation conditions linking child and parent key columns,
/// the relation's own recorded constraints and the related entity's
/// soft-delete scope, over the effective (possibly aliased) table name.
/// Constraint callbacks mutate this before it is compiled into JOIN ON
/// conditions; the compiled predicate is exactly what a correlated existence
/// subquery for the hop would contain.
pub struct RelatedQuery {
    query: QueryBuilder,
    table: String,
    primary_key: Vec<String>,
}

impl RelatedQuery {
    pub(crate) fn build(
        parent_table: &str,
        relation: &RelationMetadata,
        related: &EntityDef,
        alias: Option<&str>,
    ) -> Self {
        // Renaming to the alias is local to this hop; shared metadata is
        // never touched
        let table = alias.unwrap_or(&related.table).to_string();

        let mut query = QueryBuilder::new().from(&table);
        if related.soft_deletes {
            query = query.with_soft_delete_scope(&table);
        }
        for pair in &relation.key_pairs {
            query = query.where_column(
                &format!("{}.{}", parent_table, pair.parent),
                &format!("{}.{}", table, pair.related),
            );
        }
        // The relation's own constraints were recorded against the literal
        // table name; the alias guard rejects aliased hops carrying any
        for condition in &relation.wheres {
            query = query.where_condition(condition.clone());
        }

        Self {
            query,
            table,
            primary_key: related.primary_key.clone(),
        }
    }

    /// Effective table reference for this hop (the alias when one was given)
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Add an equality constraint
    pub fn where_eq<T: Into<Value>>(mut self, column: &str, value: T) -> Self {
        self.query = self.query.where_eq(column, value);
        self
    }

    /// Add an IS NULL constraint
    pub fn where_null(mut self, column: &str) -> Self {
        self.query = self.query.where_null(column);
        self
    }

    /// Add an IS NOT NULL constraint
    pub fn where_not_null(mut self, column: &str) -> Self {
        self.query = self.query.where_not_null(column);
        self
    }

    /// Add a column-to-column comparison
    pub fn where_column(mut self, left: &str, right: &str) -> Self {
        self.query = self.query.where_column(left, right);
        self
    }

    /// Add a raw constraint
    pub fn where_raw(mut self, raw_condition: &str) -> Self {
        self.query = self.query.where_raw(raw_condition);
        self
    }

    /// Add a prebuilt condition
    pub fn where_condition(mut self, condition: WhereCondition) -> Self {
        self.query = self.query.where_condition(condition);
        self
    }

    /// Add a nested EXISTS subquery constraint
    pub fn where_exists(mut self, subquery: QueryBuilder) -> Self {
        self.query = self.query.where_exists(subquery);
        self
    }

    /// Constrain the related primary key (first column for composite keys)
    pub fn where_key<T: Into<Value>>(self, value: T) -> Self {
        let column = format!(
            "{}.{}",
            self.table,
            self.primary_key.first().map(String::as_str).unwrap_or("id")
        );
        self.where_eq(&column, value)
    }

    /// Include soft-deleted related rows
    pub fn with_trashed(mut self) -> Self {
        self.query = self.query.with_trashed();
        self
    }

    /// Restrict to soft-deleted related rows
    pub fn only_trashed(mut self) -> Self {
        self.query = self.query.only_trashed();
        self
    }

    /// Compile into JOIN ON conditions: explicit conditions in insertion
    /// order, the soft-delete scope last
    pub(crate) fn into_on_conditions(self) -> Vec<WhereCondition> {
        let mut conditions = self.query.where_conditions;
        if let Some(scope) = self.query.soft_delete {
            if let Some(condition) = scope.condition() {
                conditions.push(condition);
            }
        }
        conditions
    }
}

/// Build the hop's existence predicate: correlation, relation constraints,
/// caller callback, then the soft-delete scope
pub(crate) fn synthesize(
    parent_table: &str,
    relation: &RelationMetadata,
    related: &EntityDef,
    alias: Option<&str>,
    constraint: Option<ConstraintFn>,
) -> Vec<WhereCondition> {
    let mut related_query = RelatedQuery::build(parent_table, relation, related, alias);
    if let Some(constraint) = constraint {
        related_query = constraint(related_query);
    }
    related_query.into_on_conditions()
}
