//! Template processing pipeline.
//!
//! [`build_query`] runs two passes over the template:
//! 1. conditional resolution — `{...}` blocks are kept or dropped based on
//!    the skip sentinel (see [`crate::skip`]);
//! 2. placeholder substitution — each `?` marker is replaced with the next
//!    argument, formatted by the rule its suffix selects.
//!
//! # Example
//!
//! ```
//! use sqltpl::{args, build_query, skip};
//!
//! let sql = build_query(
//!     "SELECT ?# FROM users WHERE status = ? {AND age > ?d} LIMIT ?d",
//!     &args![vec!["id", "name"], "active", skip(), 10],
//! )?;
//! assert_eq!(sql, "SELECT `id`, `name` FROM users WHERE status = 'active'  LIMIT 10");
//! # Ok::<(), sqltpl::TplError>(())
//! ```

mod resolve;
mod subst;

#[cfg(test)]
mod tests;

use crate::error::TplResult;
use crate::value::QueryArg;

/// Build a fully substituted, escaped SQL string from a template and its
/// arguments.
///
/// Arguments are consumed strictly in template order. Any mismatch between
/// placeholders and arguments, or a value a placeholder cannot format, aborts
/// the whole call; partial output is never returned.
pub fn build_query(template: &str, args: &[QueryArg]) -> TplResult<String> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        template_len = template.len(),
        args = args.len(),
        "building query"
    );

    let (resolved, surviving) = resolve::resolve(template, args);
    let sql = subst::substitute(&resolved, &surviving)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(sql = %sql, "query built");

    Ok(sql)
}
