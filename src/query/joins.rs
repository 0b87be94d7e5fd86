//! Query Builder JOIN operations

use super::builder::QueryBuilder;
use super::types::*;

impl QueryBuilder {
    /// Add INNER JOIN to the query
    pub fn join(mut self, table: &str, left_col: &str, right_col: &str) -> Self {
        self.joins
            .push(JoinClause::inner(table).on(WhereCondition::column(left_col, right_col)));
        self
    }

    /// Add LEFT JOIN to the query
    pub fn left_join(mut self, table: &str, left_col: &str, right_col: &str) -> Self {
        self.joins
            .push(JoinClause::left(table).on(WhereCondition::column(left_col, right_col)));
        self
    }

    /// Append a prebuilt join clause, preserving the order joins were added
    pub fn add_join(mut self, clause: JoinClause) -> Self {
        self.joins.push(clause);
        self
    }
}
