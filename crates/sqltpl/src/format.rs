//! Type-directed value formatting.
//!
//! Each placeholder kind maps to one writer here. Writers append directly to
//! the output buffer and fail fast on values the kind cannot render; the
//! substituter never sees a partially written literal because errors abort
//! the whole build.
//!
//! Escaping rules:
//! - Strings become single-quoted literals with `\`, `'`, `"`, NUL, `\n`,
//!   `\r`, and ctrl-Z backslash-escaped.
//! - Identifiers become backtick-quoted with `\` and `` ` `` backslash-escaped.

use serde_json::{Map, Number, Value};

use crate::error::{TplError, TplResult};

/// Default rule (`?`): NULL, 1/0 booleans, decimal numbers, quoted strings.
pub(crate) fn write_default(out: &mut String, value: &Value) -> TplResult<()> {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_quoted(out, s),
        Value::Array(_) | Value::Object(_) => {
            return Err(TplError::unsupported_type(
                "sequences and mappings require an ?a placeholder",
            ));
        }
    }
    Ok(())
}

/// Int rule (`?d`): NULL passes through, everything else is truncated to an integer.
pub(crate) fn write_int(out: &mut String, value: &Value) -> TplResult<()> {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
        Value::Number(n) => push_truncated(out, n),
        Value::String(s) => {
            let f = parse_numeric(s, "?d")?;
            push_i64(out, f.trunc() as i64);
        }
        Value::Array(_) | Value::Object(_) => {
            return Err(TplError::unsupported_type(
                "?d expects a numeric value, got a sequence or mapping",
            ));
        }
    }
    Ok(())
}

/// Float rule (`?f`): NULL passes through, everything else renders as `f64`.
///
/// Rendering uses Rust's `Display` for `f64`: the shortest decimal text that
/// round-trips, locale-independent, exponent form only at extreme magnitudes.
pub(crate) fn write_float(out: &mut String, value: &Value) -> TplResult<()> {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
        Value::Number(n) => match n.as_f64() {
            Some(f) => out.push_str(&f.to_string()),
            None => return Err(TplError::unsupported_type("?f received a non-finite number")),
        },
        Value::String(s) => {
            let f = parse_numeric(s, "?f")?;
            out.push_str(&f.to_string());
        }
        Value::Array(_) | Value::Object(_) => {
            return Err(TplError::unsupported_type(
                "?f expects a numeric value, got a sequence or mapping",
            ));
        }
    }
    Ok(())
}

/// List rule (`?a`): sequences render comma-joined by the default rule;
/// associative mappings render as `` `key` = value `` pairs.
///
/// A mapping whose keys are exactly the dense run `"0".."n-1"` is treated as
/// a sequence of its values.
pub(crate) fn write_list(out: &mut String, value: &Value) -> TplResult<()> {
    match value {
        Value::Array(items) => write_seq(out, items.iter()),
        Value::Object(map) => {
            if is_dense_index_map(map) {
                write_seq(out, map.values())
            } else {
                write_pairs(out, map)
            }
        }
        _ => Err(TplError::invalid_argument(
            "?a expects a sequence or mapping",
        )),
    }
}

/// Identifier rule (`?#`): backtick-quoted names, scalar or comma-joined sequence.
pub(crate) fn write_ident_value(out: &mut String, value: &Value) -> TplResult<()> {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::String(s) => write_ident(out, s),
        Value::Number(n) => write_ident(out, &n.to_string()),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                match item {
                    Value::String(s) => write_ident(out, s),
                    Value::Number(n) => write_ident(out, &n.to_string()),
                    _ => {
                        return Err(TplError::unsupported_type(
                            "?# sequence elements must be identifier names",
                        ));
                    }
                }
            }
        }
        _ => {
            return Err(TplError::unsupported_type(
                "?# expects an identifier name or a sequence of names",
            ));
        }
    }
    Ok(())
}

/// Single-quoted string literal with backslash escaping.
pub(crate) fn write_quoted(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{1a}' => out.push_str("\\Z"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

/// Backtick-quoted identifier with backslash escaping.
pub(crate) fn write_ident(out: &mut String, name: &str) {
    out.reserve(name.len() + 2);
    out.push('`');
    for ch in name.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            _ => out.push(ch),
        }
    }
    out.push('`');
}

fn write_seq<'a>(out: &mut String, items: impl Iterator<Item = &'a Value>) -> TplResult<()> {
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_default(out, item)?;
    }
    Ok(())
}

fn write_pairs(out: &mut String, map: &Map<String, Value>) -> TplResult<()> {
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_ident(out, key);
        out.push_str(" = ");
        write_default(out, value)?;
    }
    Ok(())
}

/// Keys exactly `"0", "1", .. "n-1"` in order make a mapping a plain sequence.
fn is_dense_index_map(map: &Map<String, Value>) -> bool {
    map.keys().enumerate().all(|(i, key)| *key == i.to_string())
}

fn push_truncated(out: &mut String, n: &Number) {
    if let Some(i) = n.as_i64() {
        push_i64(out, i);
    } else if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
    } else if let Some(f) = n.as_f64() {
        push_i64(out, f.trunc() as i64);
    }
}

fn push_i64(out: &mut String, i: i64) {
    out.push_str(&i.to_string());
}

fn parse_numeric(s: &str, placeholder: &str) -> TplResult<f64> {
    s.trim().parse::<f64>().map_err(|_| {
        TplError::unsupported_type(format!("{placeholder} cannot convert {s:?} to a number"))
    })
}
