//! # sqltpl
//!
//! printf-style SQL templating with typed placeholders and conditional blocks.
//!
//! ## Features
//!
//! - **Typed placeholders**: `?` (escaped scalar), `?d` (integer), `?f`
//!   (float), `?a` (sequence or `` `key` = value `` set), `?#` (identifier)
//! - **Conditional blocks**: `{...}` portions drop out of the query when any
//!   of their arguments is the [`skip`] sentinel
//! - **Fail fast**: placeholder/argument mismatches and unformattable values
//!   are errors, never silently truncated or partially rendered
//! - **Pure**: one call in, one string out; no connections, no execution,
//!   no shared state
//!
//! The output is a literal, already-escaped SQL string. Executing it is the
//! job of whatever database client you hand it to; this crate never binds
//! prepared-statement parameters and never validates SQL grammar.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use sqltpl::{args, build_query};
//!
//! let sql = build_query(
//!     "UPDATE users SET ?a WHERE ?# = ?d",
//!     &args![json!({"name": "Bob", "active": true}), "id", 7],
//! )?;
//! assert_eq!(sql, "UPDATE users SET `name` = 'Bob', `active` = 1 WHERE `id` = 7");
//! # Ok::<(), sqltpl::TplError>(())
//! ```

pub mod error;
pub mod tpl;
pub mod value;

mod format;

pub use error::{TplError, TplResult};
pub use tpl::build_query;
pub use value::{QueryArg, skip};
