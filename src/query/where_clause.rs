//! Query Builder WHERE clause operations

use serde_json::Value;

use super::builder::QueryBuilder;
use super::types::*;

impl QueryBuilder {
    /// Add WHERE condition with equality
    pub fn where_eq<T: Into<Value>>(mut self, column: &str, value: T) -> Self {
        self.where_conditions.push(WhereCondition {
            column: column.to_string(),
            operator: QueryOperator::Equal,
            value: Some(value.into()),
            values: Vec::new(),
            right_column: None,
        });
        self
    }

    /// Add WHERE condition with not equal
    pub fn where_ne<T: Into<Value>>(mut self, column: &str, value: T) -> Self {
        self.where_conditions.push(WhereCondition {
            column: column.to_string(),
            operator: QueryOperator::NotEqual,
            value: Some(value.into()),
            values: Vec::new(),
            right_column: None,
        });
        self
    }

    /// Add WHERE condition with greater than
    pub fn where_gt<T: Into<Value>>(mut self, column: &str, value: T) -> Self {
        self.where_conditions.push(WhereCondition {
            column: column.to_string(),
            operator: QueryOperator::GreaterThan,
            value: Some(value.into()),
            values: Vec::new(),
            right_column: None,
        });
        self
    }

    /// Add WHERE condition with less than
    pub fn where_lt<T: Into<Value>>(mut self, column: &str, value: T) -> Self {
        self.where_conditions.push(WhereCondition {
            column: column.to_string(),
            operator: QueryOperator::LessThan,
            value: Some(value.into()),
            values: Vec::new(),
            right_column: None,
        });
        self
    }

    /// Add WHERE condition with LIKE
    pub fn where_like(mut self, column: &str, pattern: &str) -> Self {
        self.where_conditions.push(WhereCondition {
            column: column.to_string(),
            operator: QueryOperator::Like,
            value: Some(Value::String(pattern.to_string())),
            values: Vec::new(),
            right_column: None,
        });
        self
    }

    /// Add WHERE condition with IN
    pub fn where_in<T: Into<Value>>(mut self, column: &str, values: Vec<T>) -> Self {
        self.where_conditions.push(WhereCondition {
            column: column.to_string(),
            operator: QueryOperator::In,
            value: None,
            values: values.into_iter().map(Into::into).collect(),
            right_column: None,
        });
        self
    }

    /// Add WHERE condition with IS NULL
    pub fn where_null(mut self, column: &str) -> Self {
        self.where_conditions.push(WhereCondition::null(column));
        self
    }

    /// Add WHERE condition with IS NOT NULL
    pub fn where_not_null(mut self, column: &str) -> Self {
        self.where_conditions.push(WhereCondition::not_null(column));
        self
    }

    /// Add a column-to-column comparison
    pub fn where_column(mut self, left: &str, right: &str) -> Self {
        self.where_conditions.push(WhereCondition::column(left, right));
        self
    }

    /// Add raw WHERE condition for complex cases
    pub fn where_raw(mut self, raw_condition: &str) -> Self {
        self.where_conditions.push(WhereCondition::raw(raw_condition));
        self
    }

    /// Add an EXISTS subquery condition
    pub fn where_exists(mut self, subquery: QueryBuilder) -> Self {
        self.where_conditions
            .push(WhereCondition::raw(&format!("EXISTS ({})", subquery.to_sql())));
        self
    }

    /// Add a prebuilt condition
    pub fn where_condition(mut self, condition: WhereCondition) -> Self {
        self.where_conditions.push(condition);
        self
    }

    /// Include soft-deleted rows; no-op when the query carries no scope
    pub fn with_trashed(mut self) -> Self {
        if let Some(scope) = &mut self.soft_delete {
            scope.mode = SoftDeleteMode::WithTrashed;
        }
        self
    }

    /// Restrict to soft-deleted rows; no-op when the query carries no scope
    pub fn only_trashed(mut self) -> Self {
        if let Some(scope) = &mut self.soft_delete {
            scope.mode = SoftDeleteMode::OnlyTrashed;
        }
        self
    }
}
