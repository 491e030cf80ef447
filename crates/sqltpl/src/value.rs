//! Query argument values.
//!
//! This module provides [`QueryArg`], the dynamic value type consumed by
//! [`build_query`](crate::build_query), and [`skip`], the reserved sentinel
//! that marks a conditional block for omission.
//!
//! Plain values ride on [`serde_json::Value`], so anything `json!` can build
//! is a valid argument. The crate is compiled with `preserve_order`, which
//! means mapping arguments render in the caller's insertion order.
//!
//! # Example
//! ```
//! use sqltpl::{args, skip};
//!
//! let args = args!["alice", 42, skip()];
//! assert!(args[2].is_skip());
//! ```

use serde_json::Value;

/// A single query argument: either a plain value or the skip sentinel.
///
/// The sentinel is opaque. The only operation ever performed on it is the
/// equality check done by the conditional resolver; letting one reach a
/// placeholder is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryArg {
    /// Reserved marker: drop the conditional block this argument belongs to.
    Skip,
    /// A plain value, formatted according to the placeholder it matches.
    Value(Value),
}

impl QueryArg {
    /// Whether this argument is the skip sentinel.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }

    /// The underlying value, if this is not the sentinel.
    pub(crate) fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Skip => None,
        }
    }
}

/// The reserved skip value.
///
/// Place it among the arguments of a `{...}` block to drop that block (and
/// the block's other arguments) from the query:
///
/// ```
/// use sqltpl::{args, build_query, skip};
///
/// let sql = build_query("SELECT * FROM t WHERE 1=1 {AND x = ?}", &args![skip()]).unwrap();
/// assert_eq!(sql, "SELECT * FROM t WHERE 1=1 ");
/// ```
pub fn skip() -> QueryArg {
    QueryArg::Skip
}

impl From<Value> for QueryArg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for QueryArg {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for QueryArg {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<bool> for QueryArg {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i32> for QueryArg {
    fn from(value: i32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for QueryArg {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<u32> for QueryArg {
    fn from(value: u32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<u64> for QueryArg {
    fn from(value: u64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<f64> for QueryArg {
    fn from(value: f64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl<T> From<Option<T>> for QueryArg
where
    T: Into<QueryArg>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Value(Value::Null),
        }
    }
}

impl<T> From<Vec<T>> for QueryArg
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        Self::Value(Value::Array(values.into_iter().map(Into::into).collect()))
    }
}

/// Build a `Vec<QueryArg>` from mixed literals.
///
/// Accepts anything convertible into [`QueryArg`], including
/// `serde_json::json!` values and [`skip()`]:
///
/// ```
/// use serde_json::json;
/// use sqltpl::{args, build_query};
///
/// let sql = build_query(
///     "UPDATE t SET ?a WHERE id = ?d",
///     &args![json!({"name": "Bob"}), 7],
/// ).unwrap();
/// assert_eq!(sql, "UPDATE t SET `name` = 'Bob' WHERE id = 7");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::QueryArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::QueryArg::from($arg)),+]
    };
}
