use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A literal value compared against a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// Text
    Text(String),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// Boolean
    Bool(bool),
    /// UUID value
    Uuid(Uuid),
    /// Date and time, rendered in the fixed timestamp layout
    Timestamp(NaiveDateTime),
}

impl Scalar {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Text(_) => "text",
            Scalar::Int(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Bool(_) => "boolean",
            Scalar::Uuid(_) => "uuid",
            Scalar::Timestamp(_) => "timestamp",
        }
    }

    /// The string of a `Text` value; `None` for every other kind.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Uuid(u) => write!(f, "{}", u),
            Scalar::Timestamp(ts) => write!(f, "{}", crate::transpiler::db_timestamp(ts)),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n as i64)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Int(n as i64)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<Uuid> for Scalar {
    fn from(u: Uuid) -> Self {
        Scalar::Uuid(u)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(ts: NaiveDateTime) -> Self {
        Scalar::Timestamp(ts)
    }
}

/// A bare date is taken as midnight.
impl From<NaiveDate> for Scalar {
    fn from(d: NaiveDate) -> Self {
        Scalar::Timestamp(d.and_time(chrono::NaiveTime::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_from() {
        assert_eq!(Scalar::from(21), Scalar::Int(21));
        assert_eq!(Scalar::from("Jo"), Scalar::Text("Jo".to_string()));
        assert_eq!(Scalar::from(true), Scalar::Bool(true));
        assert_eq!(Scalar::from(1.5), Scalar::Float(1.5));
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Int(-7).to_string(), "-7");
        assert_eq!(Scalar::Bool(false).to_string(), "false");
        assert_eq!(Scalar::Text("it's".into()).to_string(), "it's");
    }

    #[test]
    fn test_date_is_midnight() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Scalar::from(d).to_string(), "03/09/2024 12:00:00.0000000 AM");
    }
}
