//! JSON filter documents.
//!
//! A document is either a serialized [`Expression`] or an object with a
//! single `all` / `any` list, folded with AND / OR:
//!
//! ```json
//! { "all": [
//!     { "left": { "Column": "Age" }, "op": "GreaterThan", "right": { "Scalar": { "Int": 21 } } },
//!     { "left": { "Column": "Email" }, "op": "IsNotNull" }
//! ] }
//! ```

use serde_json::Value;

use crate::ast::builders::fold;
use crate::ast::{Expression, Joiner};
use crate::error::{ClauseError, ClauseResult};

/// Parse document text.
pub fn from_str(input: &str) -> ClauseResult<Option<Expression>> {
    let value: Value = serde_json::from_str(input)?;
    from_json(value)
}

/// Turn a decoded document into an expression.
///
/// `Ok(None)` means an empty `all` / `any` list: there is nothing to filter on.
pub fn from_json(value: Value) -> ClauseResult<Option<Expression>> {
    match value {
        Value::Null => Err(ClauseError::invalid_argument("filter document is null")),
        Value::Object(mut map) if map.len() == 1 && (map.contains_key("all") || map.contains_key("any")) => {
            let (key, joiner) = if map.contains_key("all") {
                ("all", Joiner::And)
            } else {
                ("any", Joiner::Or)
            };
            let list = map.remove(key).unwrap_or(Value::Null);
            if list.is_null() {
                return Err(ClauseError::invalid_argument(format!("'{}' list is null", key)));
            }
            let Value::Array(items) = list else {
                return Err(ClauseError::Document(format!("'{}' must be a list", key)));
            };
            let exprs = items
                .into_iter()
                .map(|item| {
                    from_json(item)?
                        .ok_or_else(|| ClauseError::Document(format!("empty group inside '{}'", key)))
                })
                .collect::<ClauseResult<Vec<_>>>()?;
            Ok(fold(exprs, joiner))
        }
        other => Ok(Some(serde_json::from_value(other)?)),
    }
}
