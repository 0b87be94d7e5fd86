//! Query Builder Types - Core types and enums for query building

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column name of the soft-delete marker
pub const DELETED_AT: &str = "deleted_at";

/// Query operator types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    In,
    IsNull,
    IsNotNull,
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOperator::Equal => write!(f, "="),
            QueryOperator::NotEqual => write!(f, "!="),
            QueryOperator::GreaterThan => write!(f, ">"),
            QueryOperator::GreaterThanOrEqual => write!(f, ">="),
            QueryOperator::LessThan => write!(f, "<"),
            QueryOperator::LessThanOrEqual => write!(f, "<="),
            QueryOperator::Like => write!(f, "LIKE"),
            QueryOperator::In => write!(f, "IN"),
            QueryOperator::IsNull => write!(f, "IS NULL"),
            QueryOperator::IsNotNull => write!(f, "IS NOT NULL"),
        }
    }
}

/// A single WHERE or JOIN ON condition.
///
/// `right_column` takes precedence over `value` and renders a
/// column-to-column comparison. A column of `"RAW"` renders `value` verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereCondition {
    pub column: String,
    pub operator: QueryOperator,
    pub value: Option<Value>,
    pub values: Vec<Value>, // For IN
    pub right_column: Option<String>,
}

impl WhereCondition {
    fn bare(column: &str, operator: QueryOperator) -> Self {
        Self {
            column: column.to_string(),
            operator,
            value: None,
            values: Vec::new(),
            right_column: None,
        }
    }

    /// Equality against a literal value
    pub fn eq<T: Into<Value>>(column: &str, value: T) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::bare(column, QueryOperator::Equal)
        }
    }

    /// Equality between two columns
    pub fn column(left: &str, right: &str) -> Self {
        Self {
            right_column: Some(right.to_string()),
            ..Self::bare(left, QueryOperator::Equal)
        }
    }

    /// IS NULL check
    pub fn null(column: &str) -> Self {
        Self::bare(column, QueryOperator::IsNull)
    }

    /// IS NOT NULL check
    pub fn not_null(column: &str) -> Self {
        Self::bare(column, QueryOperator::IsNotNull)
    }

    /// Raw condition text, rendered verbatim
    pub fn raw(expression: &str) -> Self {
        Self {
            value: Some(Value::String(expression.to_string())),
            ..Self::bare("RAW", QueryOperator::Equal)
        }
    }
}

/// Join types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Left,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
        }
    }
}

/// Join clause with arbitrary ON conditions; bindings live inside the
/// conditions and are extracted in order at SQL generation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: String,
    pub alias: Option<String>,
    pub on: Vec<WhereCondition>,
}

impl JoinClause {
    /// Create an INNER JOIN clause with no conditions yet
    pub fn inner(table: &str) -> Self {
        Self {
            join_type: JoinType::Inner,
            table: table.to_string(),
            alias: None,
            on: Vec::new(),
        }
    }

    /// Create a LEFT JOIN clause with no conditions yet
    pub fn left(table: &str) -> Self {
        Self {
            join_type: JoinType::Left,
            ..Self::inner(table)
        }
    }

    /// Set the table alias
    pub fn aliased(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Append an ON condition
    pub fn on(mut self, condition: WhereCondition) -> Self {
        self.on.push(condition);
        self
    }
}

/// Soft-delete visibility for a scoped table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoftDeleteMode {
    /// Exclude soft-deleted rows
    Default,
    /// Include soft-deleted rows
    WithTrashed,
    /// Only soft-deleted rows
    OnlyTrashed,
}

/// Deferred soft-delete scope, materialized into a condition at SQL
/// generation time so the mode can still change after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftDeleteScope {
    pub table: String,
    pub mode: SoftDeleteMode,
}

impl SoftDeleteScope {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            mode: SoftDeleteMode::Default,
        }
    }

    /// The condition this scope contributes, if any
    pub fn condition(&self) -> Option<WhereCondition> {
        let column = format!("{}.{}", self.table, DELETED_AT);
        match self.mode {
            SoftDeleteMode::Default => Some(WhereCondition::null(&column)),
            SoftDeleteMode::WithTrashed => None,
            SoftDeleteMode::OnlyTrashed => Some(WhereCondition::not_null(&column)),
        }
    }
}
