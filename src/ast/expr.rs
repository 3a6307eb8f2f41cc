use serde::{Deserialize, Serialize};

use crate::ast::{Operator, Scalar};

/// One operand slot of an [`Expression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Term {
    /// A bare identifier, emitted without quotes.
    Column(String),
    /// A literal value.
    Scalar(Scalar),
    /// Values for IN / NOT IN.
    List(Vec<Scalar>),
    /// A sub-expression.
    Nested(Box<Expression>),
}

impl Term {
    /// Create a column reference.
    pub fn column(name: impl Into<String>) -> Self {
        Term::Column(name.into())
    }

    /// Create a literal value.
    pub fn value(v: impl Into<Scalar>) -> Self {
        Term::Scalar(v.into())
    }

    /// Create a value list.
    pub fn list<V: Into<Scalar>>(values: impl IntoIterator<Item = V>) -> Self {
        Term::List(values.into_iter().map(Into::into).collect())
    }

    /// Wrap an expression as a nested term.
    pub fn nested(expr: Expression) -> Self {
        Term::Nested(Box::new(expr))
    }

    /// Short name of the term kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Column(_) => "column",
            Term::Scalar(_) => "scalar",
            Term::List(_) => "value list",
            Term::Nested(_) => "nested expression",
        }
    }
}

/// Strings convert to column references; wrap literals with [`Term::value`].
impl From<&str> for Term {
    fn from(name: &str) -> Self {
        Term::Column(name.to_string())
    }
}

impl From<String> for Term {
    fn from(name: String) -> Self {
        Term::Column(name)
    }
}

impl From<Expression> for Term {
    fn from(expr: Expression) -> Self {
        Term::nested(expr)
    }
}

impl From<Scalar> for Term {
    fn from(v: Scalar) -> Self {
        Term::Scalar(v)
    }
}

impl From<Vec<Scalar>> for Term {
    fn from(values: Vec<Scalar>) -> Self {
        Term::List(values)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Column(name) => write!(f, "{}", name),
            Term::Scalar(v) => write!(f, "{}", v),
            Term::List(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Term::Nested(expr) => write!(f, "{}", expr),
        }
    }
}

/// A boolean condition: `left op right`.
///
/// Construction never validates; shape errors surface when the
/// expression is compiled with [`crate::transpiler::ToWhereClause`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    /// Column reference or nested expression
    pub left: Term,
    /// Operator
    pub op: Operator,
    /// Right-hand term; ignored by the null tests
    #[serde(default)]
    pub right: Option<Term>,
}

impl Expression {
    /// Build an expression from its three parts.
    pub fn new(left: impl Into<Term>, op: Operator, right: impl Into<Term>) -> Self {
        Self {
            left: left.into(),
            op,
            right: Some(right.into()),
        }
    }

    /// Build an expression with no right-hand term.
    pub fn unary(left: impl Into<Term>, op: Operator) -> Self {
        Self {
            left: left.into(),
            op,
            right: None,
        }
    }

    /// Depth of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, level)) = stack.pop() {
            deepest = deepest.max(level);
            for term in std::iter::once(&expr.left).chain(expr.right.as_ref()) {
                if let Term::Nested(inner) = term {
                    stack.push((inner.as_ref(), level + 1));
                }
            }
        }
        deepest
    }
}

/// Folded chains can be arbitrarily deep; unlink nested nodes onto a heap
/// stack so dropping never recurses.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach(&mut self.left, &mut stack);
        if let Some(right) = self.right.as_mut() {
            detach(right, &mut stack);
        }
        while let Some(mut expr) = stack.pop() {
            detach(&mut expr.left, &mut stack);
            if let Some(right) = expr.right.as_mut() {
                detach(right, &mut stack);
            }
        }
    }
}

fn detach(term: &mut Term, stack: &mut Vec<Box<Expression>>) {
    if matches!(term, Term::Nested(_)) {
        if let Term::Nested(inner) = std::mem::replace(term, Term::List(Vec::new())) {
            stack.push(inner);
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {}", self.left, self.op)?;
        if let Some(right) = &self.right {
            write!(f, " {}", right)?;
        }
        write!(f, ")")
    }
}
