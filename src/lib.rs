//! # sieve — boolean filters compiled to SQL WHERE clauses
//!
//! Build a condition as an expression tree, then compile it once at the
//! root into text that can follow a `WHERE` keyword.
//!
//! ## Quick Example
//!
//! ```
//! use sieve::prelude::*;
//!
//! let filter = fold_and(vec![
//!     gt("Age", 21),
//!     eq("Name", "O'Brien"),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     filter.to_where_clause().unwrap(),
//!     "((Age > '21') AND (Name = 'O''Brien'))"
//! );
//! ```
//!
//! ## Operators
//!
//! | Operator | SQL |
//! |----------|-----|
//! | `And` / `Or` | `AND` / `OR` |
//! | `Equals` / `NotEquals` | `=` / `<>` |
//! | `GreaterThan`, `LessThan`, ... | `>`, `>=`, `<`, `<=` |
//! | `In` / `NotIn` | `IN (...)` / `NOT IN (...)` |
//! | `Contains` / `ContainsNot` | three `LIKE` / `NOT LIKE` patterns joined by `OR` |
//! | `IsNull` / `IsNotNull` | `IS NULL` / `IS NOT NULL` |
//!
//! Literals are inlined, not bound. [`sanitize`](sanitize::sanitize) strips
//! comment delimiters and control characters and doubles quotes, which
//! narrows but does not close the injection surface.

pub mod ast;
pub mod config;
pub mod document;
pub mod error;
pub mod sanitize;
pub mod statement;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::sanitize::sanitize;
    pub use crate::statement::SelectStatement;
    pub use crate::transpiler::{CompileOptions, ToWhereClause};
}

/// Compile an expression tree into a WHERE clause with default options.
///
/// # Example
///
/// ```
/// use sieve::ast::{Expression, Operator, Term};
///
/// let e = Expression::new("Age", Operator::GreaterThan, Term::value(21));
/// assert_eq!(sieve::compile(&e).unwrap(), "(Age > '21')");
/// ```
pub fn compile(expr: &ast::Expression) -> error::ClauseResult<String> {
    use crate::transpiler::ToWhereClause;
    expr.to_where_clause()
}
