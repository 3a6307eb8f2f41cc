use serde::{Deserialize, Serialize};

/// The operator joining the left and right terms of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Boolean AND
    And,
    /// Boolean OR
    Or,
    /// The two values are equal
    Equals,
    /// The two values are not equal
    NotEquals,
    /// The left value is one of the listed values
    In,
    /// The left value is none of the listed values
    NotIn,
    /// The left value starts with, contains or ends with the right value
    Contains,
    /// Negated form of `Contains`
    ContainsNot,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    /// The left value is NULL (unary)
    IsNull,
    /// The left value is not NULL (unary)
    IsNotNull,
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 14] = [
        Operator::And,
        Operator::Or,
        Operator::Equals,
        Operator::NotEquals,
        Operator::In,
        Operator::NotIn,
        Operator::Contains,
        Operator::ContainsNot,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqualTo,
        Operator::LessThan,
        Operator::LessThanOrEqualTo,
        Operator::IsNull,
        Operator::IsNotNull,
    ];

    /// Boolean connectives and plain comparisons, which share one rendering.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Operator::And
                | Operator::Or
                | Operator::Equals
                | Operator::NotEquals
                | Operator::GreaterThan
                | Operator::GreaterThanOrEqualTo
                | Operator::LessThan
                | Operator::LessThanOrEqualTo
        )
    }

    /// SQL keyword or symbol for the comparison family, with trailing space.
    pub(crate) fn sql_prefix(self) -> &'static str {
        match self {
            Operator::And => "AND ",
            Operator::Or => "OR ",
            Operator::Equals => "= ",
            Operator::NotEquals => "<> ",
            Operator::GreaterThan => "> ",
            Operator::GreaterThanOrEqualTo => ">= ",
            Operator::LessThan => "< ",
            Operator::LessThanOrEqualTo => "<= ",
            Operator::In => " IN ",
            Operator::NotIn => " NOT IN ",
            Operator::Contains => "LIKE",
            Operator::ContainsNot => "NOT LIKE",
            Operator::IsNull => " IS NULL",
            Operator::IsNotNull => " IS NOT NULL",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operator::And => "And",
            Operator::Or => "Or",
            Operator::Equals => "Equals",
            Operator::NotEquals => "NotEquals",
            Operator::In => "In",
            Operator::NotIn => "NotIn",
            Operator::Contains => "Contains",
            Operator::ContainsNot => "ContainsNot",
            Operator::GreaterThan => "GreaterThan",
            Operator::GreaterThanOrEqualTo => "GreaterThanOrEqualTo",
            Operator::LessThan => "LessThan",
            Operator::LessThanOrEqualTo => "LessThanOrEqualTo",
            Operator::IsNull => "IsNull",
            Operator::IsNotNull => "IsNotNull",
        };
        write!(f, "{}", name)
    }
}

/// Logical connective used by the prepend and fold combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Joiner {
    #[default]
    And,
    Or,
}

impl From<Joiner> for Operator {
    fn from(j: Joiner) -> Self {
        match j {
            Joiner::And => Operator::And,
            Joiner::Or => Operator::Or,
        }
    }
}

/// Sort order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}
