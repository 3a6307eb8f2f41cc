//! Constructors and combinators for expression trees.

use crate::ast::{Expression, Joiner, Operator, Scalar, Term};

/// Helper to create a column comparison
fn make_condition(column: &str, op: Operator, right: Term) -> Expression {
    Expression::new(Term::column(column), op, right)
}

/// Create an equality condition (column = value)
pub fn eq(column: &str, value: impl Into<Scalar>) -> Expression {
    make_condition(column, Operator::Equals, Term::value(value))
}

/// Create a not-equal condition (column <> value)
pub fn ne(column: &str, value: impl Into<Scalar>) -> Expression {
    make_condition(column, Operator::NotEquals, Term::value(value))
}

/// Create a greater-than condition (column > value)
pub fn gt(column: &str, value: impl Into<Scalar>) -> Expression {
    make_condition(column, Operator::GreaterThan, Term::value(value))
}

/// Create a greater-than-or-equal condition (column >= value)
pub fn gte(column: &str, value: impl Into<Scalar>) -> Expression {
    make_condition(column, Operator::GreaterThanOrEqualTo, Term::value(value))
}

/// Create a less-than condition (column < value)
pub fn lt(column: &str, value: impl Into<Scalar>) -> Expression {
    make_condition(column, Operator::LessThan, Term::value(value))
}

/// Create a less-than-or-equal condition (column <= value)
pub fn lte(column: &str, value: impl Into<Scalar>) -> Expression {
    make_condition(column, Operator::LessThanOrEqualTo, Term::value(value))
}

/// Create an IN condition (column IN (values))
pub fn is_in<V: Into<Scalar>>(column: &str, values: impl IntoIterator<Item = V>) -> Expression {
    make_condition(column, Operator::In, Term::list(values))
}

/// Create a NOT IN condition (column NOT IN (values))
pub fn not_in<V: Into<Scalar>>(column: &str, values: impl IntoIterator<Item = V>) -> Expression {
    make_condition(column, Operator::NotIn, Term::list(values))
}

/// Create a loose substring match (starts with, contains or ends with)
pub fn contains(column: &str, text: &str) -> Expression {
    make_condition(column, Operator::Contains, Term::value(text))
}

/// Negated form of [`contains`]
pub fn contains_not(column: &str, text: &str) -> Expression {
    make_condition(column, Operator::ContainsNot, Term::value(text))
}

/// Create an IS NULL condition
pub fn is_null(column: &str) -> Expression {
    Expression::unary(Term::column(column), Operator::IsNull)
}

/// Create an IS NOT NULL condition
pub fn is_not_null(column: &str) -> Expression {
    Expression::unary(Term::column(column), Operator::IsNotNull)
}

/// Join two expressions with AND
pub fn and(left: Expression, right: Expression) -> Expression {
    join(left, Joiner::And, right)
}

/// Join two expressions with OR
pub fn or(left: Expression, right: Expression) -> Expression {
    join(left, Joiner::Or, right)
}

fn join(left: Expression, joiner: Joiner, right: Expression) -> Expression {
    Expression::new(Term::nested(left), joiner.into(), Term::nested(right))
}

/// Put `prepend` in front of `original` with AND.
///
/// The result is `prepend AND (original)`; `original` is moved into the new
/// node, so later changes to the caller's copies cannot leak into it.
pub fn prepend_and(prepend: Expression, original: Expression) -> Expression {
    join(prepend, Joiner::And, original)
}

/// Put `prepend` in front of `original` with OR.
pub fn prepend_or(prepend: Expression, original: Expression) -> Expression {
    join(prepend, Joiner::Or, original)
}

/// Combine expressions into a right-leaning AND chain: `e1 AND (e2 AND (e3 AND e4))`.
///
/// A single expression is returned unchanged; an empty input yields `None`.
pub fn fold_and(exprs: impl IntoIterator<Item = Expression>) -> Option<Expression> {
    fold(exprs, Joiner::And)
}

/// Combine expressions into a right-leaning OR chain.
pub fn fold_or(exprs: impl IntoIterator<Item = Expression>) -> Option<Expression> {
    fold(exprs, Joiner::Or)
}

/// Fold with an explicit joiner.
pub fn fold(exprs: impl IntoIterator<Item = Expression>, joiner: Joiner) -> Option<Expression> {
    let exprs: Vec<Expression> = exprs.into_iter().collect();
    let mut rev = exprs.into_iter().rev();
    let last = rev.next()?;
    Some(rev.fold(last, |acc, e| join(e, joiner, acc)))
}

impl Expression {
    /// Rewrite this expression in place as `prepend AND (self)`.
    pub fn prepend_and(&mut self, prepend: Expression) {
        self.prepend(prepend, Joiner::And);
    }

    /// Rewrite this expression in place as `prepend OR (self)`.
    pub fn prepend_or(&mut self, prepend: Expression) {
        self.prepend(prepend, Joiner::Or);
    }

    /// Build `left op right` and prepend it with AND.
    pub fn prepend_and_with(&mut self, left: impl Into<Term>, op: Operator, right: impl Into<Term>) {
        self.prepend_and(Expression::new(left, op, right));
    }

    /// Build `left op right` and prepend it with OR.
    pub fn prepend_or_with(&mut self, left: impl Into<Term>, op: Operator, right: impl Into<Term>) {
        self.prepend_or(Expression::new(left, op, right));
    }

    fn prepend(&mut self, prepend: Expression, joiner: Joiner) {
        let placeholder = Expression::unary(Term::Column(String::new()), Operator::IsNull);
        let original = std::mem::replace(self, placeholder);
        *self = join(prepend, joiner, original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_build_column_terms() {
        let e = gt("Age", 21);
        assert_eq!(e.left, Term::Column("Age".to_string()));
        assert_eq!(e.op, Operator::GreaterThan);
        assert_eq!(e.right, Some(Term::Scalar(Scalar::Int(21))));

        let e = is_null("DeletedAt");
        assert_eq!(e.right, None);

        let e = is_in("Id", [1, 2, 3]);
        assert_eq!(
            e.right,
            Some(Term::List(vec![Scalar::Int(1), Scalar::Int(2), Scalar::Int(3)]))
        );
    }

    #[test]
    fn test_prepend_and_shape() {
        let original = eq("Status", "open");
        let first = gt("Age", 21);
        let e = prepend_and(first.clone(), original.clone());
        assert_eq!(e.left, Term::nested(first));
        assert_eq!(e.op, Operator::And);
        assert_eq!(e.right, Some(Term::nested(original)));
    }

    #[test]
    fn test_prepend_in_place_matches_pure() {
        let original = eq("Status", "open");
        let first = lt("Score", 10);

        let mut e = original.clone();
        e.prepend_or(first.clone());
        assert_eq!(e, prepend_or(first, original));
    }

    #[test]
    fn test_prepend_with_parts() {
        let mut e = eq("a", 1);
        e.prepend_and_with("b", Operator::Equals, Term::value(2));
        assert_eq!(e, prepend_and(eq("b", 2), eq("a", 1)));
    }

    #[test]
    fn test_fold_empty_and_singleton() {
        assert_eq!(fold_and(Vec::new()), None);
        let e = eq("a", 1);
        assert_eq!(fold_and(vec![e.clone()]), Some(e.clone()));
        assert_eq!(fold_or(vec![e.clone()]), Some(e));
    }

    #[test]
    fn test_fold_is_right_leaning() {
        let (a, b, c) = (eq("a", 1), eq("b", 2), eq("c", 3));
        let folded = fold_and(vec![a.clone(), b.clone(), c.clone()]).unwrap();
        assert_eq!(folded, and(a, and(b, c)));
    }

    #[test]
    fn test_fold_or_uses_or() {
        let folded = fold_or(vec![eq("a", 1), eq("b", 2)]).unwrap();
        assert_eq!(folded.op, Operator::Or);
    }

    #[test]
    fn test_large_fold_drops_without_recursion() {
        let folded = fold_and((0..100_000).map(|i| eq("n", i))).unwrap();
        assert_eq!(folded.depth(), 100_000);
        drop(folded);

        let mut e = eq("n", 0);
        for i in 1..100_000 {
            e = Expression::new(e, Operator::Or, eq("n", i));
        }
        drop(e);
    }
}
