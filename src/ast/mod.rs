//! Expression tree types.

pub mod builders;
pub mod expr;
pub mod operators;
pub mod values;

pub use expr::{Expression, Term};
pub use operators::{Joiner, Operator, SortOrder};
pub use values::Scalar;
