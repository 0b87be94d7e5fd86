//! Query Builder SQL generation

use serde_json::Value;

use super::builder::QueryBuilder;
use super::types::*;

impl QueryBuilder {
    /// Generate SQL text only
    pub fn to_sql(&self) -> String {
        self.to_sql_with_params().0
    }

    /// Generate SQL with `$n` placeholders and the parameters in placeholder
    /// order. Join parameters come first since joins precede the WHERE clause
    /// in the generated text.
    pub fn to_sql_with_params(&self) -> (String, Vec<Value>) {
        let mut sql = String::from("SELECT ");
        let mut params = Vec::new();
        let mut param_counter = 1;

        if self.select_fields.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.select_fields.join(", "));
        }

        if let Some(table) = &self.from_table {
            sql.push_str(" FROM ");
            sql.push_str(table);
        }

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.join_type.to_string());
            sql.push(' ');
            sql.push_str(&join.table);
            if let Some(alias) = &join.alias {
                sql.push_str(" AS ");
                sql.push_str(alias);
            }
            if !join.on.is_empty() {
                sql.push_str(" ON ");
                for (i, condition) in join.on.iter().enumerate() {
                    if i > 0 {
                        sql.push_str(" AND ");
                    }
                    render_condition(condition, &mut sql, &mut params, &mut param_counter);
                }
            }
        }

        // The soft-delete scope compiles last, after explicit conditions
        let scope_condition = self.soft_delete.as_ref().and_then(|s| s.condition());
        if !self.where_conditions.is_empty() || scope_condition.is_some() {
            sql.push_str(" WHERE ");
            for (i, condition) in self
                .where_conditions
                .iter()
                .chain(scope_condition.iter())
                .enumerate()
            {
                if i > 0 {
                    sql.push_str(" AND ");
                }
                render_condition(condition, &mut sql, &mut params, &mut param_counter);
            }
        }

        (sql, params)
    }
}

/// Render one condition, appending its parameters in placeholder order
fn render_condition(
    condition: &WhereCondition,
    sql: &mut String,
    params: &mut Vec<Value>,
    param_counter: &mut i32,
) {
    if condition.column == "RAW" {
        if let Some(Value::String(expression)) = &condition.value {
            sql.push_str(expression);
        }
        return;
    }

    if let Some(right) = &condition.right_column {
        sql.push_str(&format!("{} {} {}", condition.column, condition.operator, right));
        return;
    }

    match condition.operator {
        QueryOperator::In => {
            sql.push_str(&condition.column);
            sql.push_str(" IN (");
            for (i, value) in condition.values.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(&format!("${}", param_counter));
                params.push(value.clone());
                *param_counter += 1;
            }
            sql.push(')');
        }
        QueryOperator::IsNull | QueryOperator::IsNotNull => {
            sql.push_str(&format!("{} {}", condition.column, condition.operator));
        }
        _ => {
            sql.push_str(&format!("{} {}", condition.column, condition.operator));
            if let Some(value) = &condition.value {
                sql.push_str(&format!(" ${}", param_counter));
                params.push(value.clone());
                *param_counter += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_query_selects_wildcard() {
        let query = QueryBuilder::new().from("users");
        assert_eq!(query.to_sql(), "SELECT * FROM users");
    }

    #[test]
    fn where_params_are_numbered_in_order() {
        let (sql, params) = QueryBuilder::new()
            .from("users")
            .where_eq("users.active", true)
            .where_gt("users.age", 18)
            .to_sql_with_params();

        assert_eq!(
            sql,
            "SELECT * FROM users WHERE users.active = $1 AND users.age > $2"
        );
        assert_eq!(params, vec![json!(true), json!(18)]);
    }

    #[test]
    fn join_params_precede_where_params() {
        let (sql, params) = QueryBuilder::new()
            .from("users")
            .add_join(
                JoinClause::inner("posts")
                    .on(WhereCondition::column("users.id", "posts.user_id"))
                    .on(WhereCondition::eq("posts.pinned", 1)),
            )
            .where_eq("users.name", "anna")
            .to_sql_with_params();

        assert_eq!(
            sql,
            "SELECT * FROM users \
             INNER JOIN posts ON users.id = posts.user_id AND posts.pinned = $1 \
             WHERE users.name = $2"
        );
        assert_eq!(params, vec![json!(1), json!("anna")]);
    }

    #[test]
    fn left_join_renders_with_alias() {
        let sql = QueryBuilder::new()
            .from("users")
            .add_join(
                JoinClause::left("profiles")
                    .aliased("p")
                    .on(WhereCondition::column("users.id", "p.user_id")),
            )
            .to_sql();

        assert_eq!(
            sql,
            "SELECT * FROM users LEFT JOIN profiles AS p ON users.id = p.user_id"
        );
    }

    #[test]
    fn where_in_expands_placeholders() {
        let (sql, params) = QueryBuilder::new()
            .from("posts")
            .where_in("posts.id", vec![1, 2, 3])
            .to_sql_with_params();

        assert_eq!(sql, "SELECT * FROM posts WHERE posts.id IN ($1, $2, $3)");
        assert_eq!(params, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn soft_delete_scope_compiles_last() {
        let sql = QueryBuilder::new()
            .from("posts")
            .with_soft_delete_scope("posts")
            .where_eq("posts.pinned", 1)
            .to_sql();

        assert_eq!(
            sql,
            "SELECT * FROM posts WHERE posts.pinned = $1 AND posts.deleted_at IS NULL"
        );
    }

    #[test]
    fn trashed_modes_rewrite_the_scope() {
        let base = QueryBuilder::new().from("posts").with_soft_delete_scope("posts");

        assert_eq!(
            base.clone().with_trashed().to_sql(),
            "SELECT * FROM posts"
        );
        assert_eq!(
            base.only_trashed().to_sql(),
            "SELECT * FROM posts WHERE posts.deleted_at IS NOT NULL"
        );
    }

    #[test]
    fn where_exists_inlines_the_subquery() {
        let sub = QueryBuilder::new()
            .select_raw("1")
            .from("comments")
            .where_column("comments.post_id", "posts.id");
        let sql = QueryBuilder::new().from("posts").where_exists(sub).to_sql();

        assert_eq!(
            sql,
            "SELECT * FROM posts WHERE EXISTS \
             (SELECT 1 FROM comments WHERE comments.post_id = posts.id)"
        );
    }
}
