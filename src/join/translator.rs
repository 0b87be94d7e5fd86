//! Join Translator - converts relation existence filters into JOIN clauses

use tracing::debug;

use super::existence::{synthesize, ConstraintFn};
use super::path::RelationPath;
use crate::error::{JoinError, JoinResult};
use crate::query::{JoinClause, JoinType, QueryBuilder};
use crate::relationships::{RelationKind, SchemaRegistry};

/// Translates relation existence filters into JOIN clauses on a base query.
///
/// Each hop of the path is resolved against the registry, validated, turned
/// into the existence predicate the equivalent correlated subquery would use,
/// and merged into the query's join list. Only the SQL shape differs from the
/// subquery form; for single-row relations the result set is identical.
pub struct JoinTranslator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> JoinTranslator<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Apply `path` as INNER JOINs on `query`, rooted at entity `root`.
    ///
    /// `constraints[i]` applies to the i-th path segment; missing entries
    /// mean no constraint and surplus entries are ignored. When the query's
    /// select list is unset or wildcard, it is scoped to the root table's
    /// columns so root and joined columns do not mix.
    ///
    /// Fails at the first offending hop. The query is consumed, so a failed
    /// call leaves no partially-joined builder to reuse; callers rebuild
    /// from scratch.
    pub fn apply(
        &self,
        query: QueryBuilder,
        root: &str,
        path: impl Into<RelationPath>,
        mut constraints: Vec<Option<ConstraintFn>>,
    ) -> JoinResult<QueryBuilder> {
        let path = path.into();
        let root_entity = self.registry.entity(root)?;
        let mut current = root_entity.clone();
        let mut query = query;

        for (index, segment) in path.segments().iter().enumerate() {
            let relation = self.registry.relation(&current.name, &segment.relation)?;

            // Only single-row relations with a statically known target
            // table translate into a join
            if !matches!(relation.kind, RelationKind::BelongsTo | RelationKind::HasOne) {
                return Err(JoinError::UnsupportedRelation);
            }

            // The relation's own wheres/joins were recorded against the
            // literal table name and cannot be retargeted to an alias
            if segment.alias.is_some() && relation.has_extra_constraints() {
                return Err(JoinError::AliasConflict);
            }

            let related = self.registry.entity(&relation.related)?;
            let constraint = constraints.get_mut(index).and_then(|slot| slot.take());
            let on = synthesize(
                &current.table,
                &relation,
                &related,
                segment.alias.as_deref(),
                constraint,
            );

            query = query.add_join(JoinClause {
                join_type: JoinType::Inner,
                table: related.table.clone(),
                alias: segment.alias.clone(),
                on,
            });
            // Extra joins the relation definition introduced follow the
            // relation's own join directly
            for extra in &relation.joins {
                query = query.add_join(extra.clone());
            }
            debug!(
                entity = %current.name,
                relation = %segment.relation,
                table = %related.table,
                "merged relation existence filter as join"
            );

            current = related;
        }

        if query.selects_wildcard() {
            let columns = format!("{}.*", root_entity.table);
            debug!(select = %columns, "scoping select to root table columns");
            query = query.select(&columns);
        }

        Ok(query)
    }
}

/// One-shot convenience over [`JoinTranslator`]
pub fn apply_relation_join(
    registry: &SchemaRegistry,
    query: QueryBuilder,
    root: &str,
    path: impl Into<RelationPath>,
    constraints: Vec<Option<ConstraintFn>>,
) -> JoinResult<QueryBuilder> {
    JoinTranslator::new(registry).apply(query, root, path, constraints)
}
