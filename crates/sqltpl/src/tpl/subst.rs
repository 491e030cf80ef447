//! Placeholder substitution.
//!
//! Walks the resolved template left to right with an explicit cursor,
//! consuming arguments strictly in order. The byte after each `?` selects the
//! formatting rule; unrecognized suffixes belong to the surrounding SQL.

use crate::error::{TplError, TplResult};
use crate::format;
use crate::value::QueryArg;

/// Placeholder kind, selected by the byte following `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Default,
    Int,
    Float,
    List,
    Ident,
}

impl Marker {
    /// Detect the marker kind and its width in bytes (`?` plus suffix).
    fn detect(suffix: Option<u8>) -> (Self, usize) {
        match suffix {
            Some(b'd') => (Self::Int, 2),
            Some(b'f') => (Self::Float, 2),
            Some(b'a') => (Self::List, 2),
            Some(b'#') => (Self::Ident, 2),
            _ => (Self::Default, 1),
        }
    }
}

/// Replace every `?` marker with its argument's escaped literal.
///
/// Argument counts must match the marker count exactly; a mismatch in either
/// direction is an error and no output is produced.
pub(super) fn substitute(template: &str, args: &[QueryArg]) -> TplResult<String> {
    let markers = template.bytes().filter(|b| *b == b'?').count();
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut pos = 0;
    let mut remaining = args.iter();

    while let Some(rel) = template[pos..].find('?') {
        let at = pos + rel;
        out.push_str(&template[pos..at]);
        let (marker, width) = Marker::detect(bytes.get(at + 1).copied());
        let Some(arg) = remaining.next() else {
            return Err(TplError::NotEnoughArguments {
                supplied: args.len(),
                markers,
            });
        };
        let Some(value) = arg.value() else {
            return Err(TplError::unsupported_type(
                "skip sentinel used outside a conditional block",
            ));
        };
        match marker {
            Marker::Default => format::write_default(&mut out, value)?,
            Marker::Int => format::write_int(&mut out, value)?,
            Marker::Float => format::write_float(&mut out, value)?,
            Marker::List => format::write_list(&mut out, value)?,
            Marker::Ident => format::write_ident_value(&mut out, value)?,
        }
        pos = at + width;
    }

    if remaining.next().is_some() {
        return Err(TplError::TooManyArguments {
            supplied: args.len(),
            markers,
        });
    }
    out.push_str(&template[pos..]);
    Ok(out)
}
