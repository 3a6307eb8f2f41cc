//! WHERE-clause compiler for expression trees.
//!
//! Every node renders as `"(" + left + operator + right + ")"`. Literals are
//! inlined as single-quoted text after passing through
//! [`sanitize`](crate::sanitize::sanitize); nothing is bound as a parameter.

use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, trace};

use crate::ast::*;
use crate::error::{ClauseError, ClauseResult};
use crate::sanitize::sanitize;

/// Default bound on tree depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for a single compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Deepest nesting accepted before compilation fails.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Trait for rendering a node as WHERE-clause text.
pub trait ToWhereClause {
    /// Compile with default options.
    fn to_where_clause(&self) -> ClauseResult<String> {
        self.to_where_clause_with(&CompileOptions::default())
    }

    /// Compile with explicit options.
    fn to_where_clause_with(&self, options: &CompileOptions) -> ClauseResult<String>;
}

impl ToWhereClause for Expression {
    fn to_where_clause_with(&self, options: &CompileOptions) -> ClauseResult<String> {
        let compiler = Compiler { options };
        match compiler.expression(self, 1) {
            Ok(sql) => {
                trace!(clause = %sql, "compiled where clause");
                Ok(sql)
            }
            Err(e) => {
                debug!(op = %self.op, error = %e, "expression could not be compiled");
                Err(e)
            }
        }
    }
}

/// Format a timestamp as `MM/dd/yyyy hh:mm:ss.fffffff AM`.
///
/// Twelve-hour clock with a seven-digit fraction (100ns ticks).
pub fn db_timestamp(ts: &NaiveDateTime) -> String {
    // Leap seconds report nanoseconds past 1e9; keep the fraction in range.
    let ticks = (ts.nanosecond() % 1_000_000_000) / 100;
    format!(
        "{}.{:07} {}",
        ts.format("%m/%d/%Y %I:%M:%S"),
        ticks,
        ts.format("%p")
    )
}

struct Compiler<'a> {
    options: &'a CompileOptions,
}

impl Compiler<'_> {
    /// Render one node.
    ///
    /// The right spine of an AND / OR chain is walked in a loop, so folded
    /// lists neither grow the call stack nor count against `max_depth`.
    fn expression(&self, expr: &Expression, depth: usize) -> ClauseResult<String> {
        if depth > self.options.max_depth {
            return Err(ClauseError::DepthExceeded(self.options.max_depth));
        }

        let mut sql = String::new();
        let mut open = 0usize;
        let mut node = expr;
        loop {
            sql.push('(');
            open += 1;
            self.left(node, depth, &mut sql)?;
            match (node.op, &node.right) {
                (Operator::And | Operator::Or, Some(Term::Nested(next))) => {
                    sql.push_str(node.op.sql_prefix());
                    node = next;
                }
                _ => {
                    self.operator(node, depth, &mut sql)?;
                    break;
                }
            }
        }

        sql.extend(std::iter::repeat(')').take(open));
        Ok(sql)
    }

    /// Left side. CONTAINS re-emits the column inside its LIKE patterns.
    fn left(&self, expr: &Expression, depth: usize, sql: &mut String) -> ClauseResult<()> {
        match (&expr.left, expr.op) {
            (Term::Column(_), Operator::Contains | Operator::ContainsNot) => {}
            (Term::Column(name), _) => {
                sql.push_str(&sanitize(name));
                sql.push(' ');
            }
            (Term::Nested(inner), op) if !matches!(op, Operator::Contains | Operator::ContainsNot) => {
                sql.push_str(&self.expression(inner, depth + 1)?);
                sql.push(' ');
            }
            (other, op) => {
                return Err(ClauseError::InvalidLeft {
                    op,
                    found: other.kind(),
                });
            }
        }
        Ok(())
    }

    /// Operator and right side, up to but not including the closing parenthesis.
    fn operator(&self, expr: &Expression, depth: usize, sql: &mut String) -> ClauseResult<()> {
        let op = expr.op;
        match op {
            Operator::And
            | Operator::Or
            | Operator::Equals
            | Operator::NotEquals
            | Operator::GreaterThan
            | Operator::GreaterThanOrEqualTo
            | Operator::LessThan
            | Operator::LessThanOrEqualTo => {
                let right = required_right(expr)?;
                sql.push_str(op.sql_prefix());
                sql.push_str(&self.operand(op, right, depth)?);
            }
            Operator::In | Operator::NotIn => {
                let right = required_right(expr)?;
                sql.push_str(op.sql_prefix());
                match right {
                    Term::List(items) if items.is_empty() => {
                        return Err(ClauseError::ExpectedList {
                            op,
                            found: "empty value list",
                        });
                    }
                    Term::List(items) => {
                        let rendered: Vec<String> = items.iter().map(literal).collect();
                        sql.push('(');
                        sql.push_str(&rendered.join(","));
                        sql.push(')');
                    }
                    Term::Nested(inner) => sql.push_str(&self.expression(inner, depth + 1)?),
                    other => {
                        return Err(ClauseError::ExpectedList {
                            op,
                            found: other.kind(),
                        });
                    }
                }
            }
            Operator::Contains | Operator::ContainsNot => {
                let right = required_right(expr)?;
                let text = match right {
                    Term::Scalar(v) => v
                        .as_text()
                        .ok_or(ClauseError::ExpectedText { op, found: v.kind() })?,
                    other => {
                        return Err(ClauseError::ExpectedText {
                            op,
                            found: other.kind(),
                        });
                    }
                };
                // `left` only lets columns through for CONTAINS.
                let Term::Column(column) = &expr.left else {
                    return Err(ClauseError::InvalidLeft {
                        op,
                        found: expr.left.kind(),
                    });
                };
                sql.push_str(&like_union(op.sql_prefix(), column, text));
            }
            Operator::IsNull | Operator::IsNotNull => {
                sql.push_str(op.sql_prefix());
            }
        }
        Ok(())
    }

    /// Right-hand side of a comparison or boolean connective.
    fn operand(&self, op: Operator, right: &Term, depth: usize) -> ClauseResult<String> {
        match right {
            Term::Nested(inner) => self.expression(inner, depth + 1),
            Term::Scalar(v) => Ok(literal(v)),
            Term::Column(name) => Ok(sanitize(name)),
            Term::List(_) => Err(ClauseError::UnexpectedRight {
                op,
                found: right.kind(),
            }),
        }
    }
}

fn required_right(expr: &Expression) -> ClauseResult<&Term> {
    expr.right
        .as_ref()
        .ok_or(ClauseError::MissingRight { op: expr.op })
}

/// Quote a value: timestamps in the fixed layout, anything else sanitized.
fn literal(value: &Scalar) -> String {
    match value {
        Scalar::Timestamp(ts) => format!("'{}'", db_timestamp(ts)),
        other => format!("'{}'", sanitize(&other.to_string())),
    }
}

/// `(c LIKE 'v%'OR c LIKE '%v%'OR c LIKE '%v')`
///
/// There is no space before `OR`; existing fixtures depend on that layout.
fn like_union(keyword: &str, column: &str, text: &str) -> String {
    let column = sanitize(column);
    let text = sanitize(text);
    format!(
        "({c} {k} '{t}%'OR {c} {k} '%{t}%'OR {c} {k} '%{t}')",
        c = column,
        k = keyword,
        t = text
    )
}
