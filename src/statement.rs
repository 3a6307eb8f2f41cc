//! Plain-text SELECT statements around a compiled filter.
//!
//! Rendering only: the caller's driver opens connections and runs the text.

use crate::ast::{Expression, SortOrder};
use crate::error::ClauseResult;
use crate::sanitize::sanitize;
use crate::transpiler::{CompileOptions, ToWhereClause};

/// A SELECT statement under construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectStatement {
    pub table: String,
    pub columns: Vec<String>,
    pub filter: Option<Expression>,
    pub order_by: Option<(String, SortOrder)>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl SelectStatement {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// Select these columns instead of `*`.
    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter(mut self, expr: Expression) -> Self {
        self.filter = Some(expr);
        self
    }

    /// AND another condition in front of the current filter.
    pub fn and_filter(mut self, expr: Expression) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(mut existing) => {
                existing.prepend_and(expr);
                existing
            }
            None => expr,
        });
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.order_by = Some((column.into(), order));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    /// Render with default compile options.
    pub fn to_sql(&self) -> ClauseResult<String> {
        self.to_sql_with(&CompileOptions::default())
    }

    /// Render the statement. Fails if the filter does not compile.
    pub fn to_sql_with(&self, options: &CompileOptions) -> ClauseResult<String> {
        let mut sql = String::from("SELECT ");

        // Columns
        if self.columns.is_empty() {
            sql.push('*');
        } else {
            let cols: Vec<String> = self.columns.iter().map(|c| sanitize(c)).collect();
            sql.push_str(&cols.join(", "));
        }

        // FROM
        sql.push_str(" FROM ");
        sql.push_str(&sanitize(&self.table));

        // WHERE
        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_where_clause_with(options)?);
        }

        // ORDER BY
        if let Some((column, order)) = &self.order_by {
            sql.push_str(&format!(" ORDER BY {} {}", sanitize(column), order));
        }

        // LIMIT
        if let Some(n) = self.limit {
            sql.push_str(&format!(" LIMIT {}", n));
        }

        // OFFSET
        if let Some(n) = self.offset {
            sql.push_str(&format!(" OFFSET {}", n));
        }

        Ok(sql)
    }
}

/// `SELECT count(*) FROM table [WHERE ...]`
pub fn count(table: &str, filter: Option<&Expression>) -> ClauseResult<String> {
    let mut sql = format!("SELECT count(*) FROM {}", sanitize(table));
    if let Some(filter) = filter {
        sql.push_str(" WHERE ");
        sql.push_str(&filter.to_where_clause()?);
    }
    Ok(sql)
}
