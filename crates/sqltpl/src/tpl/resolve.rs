//! Conditional block resolution.
//!
//! A `{...}` block is kept (braces stripped) unless the skip sentinel appears
//! among the arguments aligned with the block's placeholders, in which case
//! the block and those arguments are dropped together.
//!
//! Blocks do not nest. A `{` with no `}` after it is literal text.

use crate::value::QueryArg;

/// One `{...}` block located in the pristine template.
struct Block {
    /// Byte offset of the opening brace.
    start: usize,
    /// Byte offset one past the closing brace.
    end: usize,
    /// Index of the first argument aligned with the block's placeholders.
    arg_start: usize,
    /// Number of placeholders inside the block body.
    arg_len: usize,
    drop: bool,
}

/// Resolve every conditional block, returning the rewritten template and the
/// surviving arguments.
///
/// All block offsets and argument spans are computed against the input as
/// given; the output is rebuilt in a single forward pass, so dropping one
/// block never shifts the bookkeeping of another. An argument span that runs
/// past the end of the list keeps its block; the count mismatch surfaces
/// later in substitution.
pub(super) fn resolve(template: &str, args: &[QueryArg]) -> (String, Vec<QueryArg>) {
    let mut blocks = Vec::new();
    let mut search = 0;
    while let Some(rel) = template[search..].find('{') {
        let start = search + rel;
        let Some(rel_close) = template[start + 1..].find('}') else {
            break;
        };
        let end = start + 1 + rel_close + 1;
        let arg_start = count_markers(&template[..start]);
        let arg_len = count_markers(&template[start + 1..end - 1]);
        let drop = args
            .get(arg_start..arg_start + arg_len)
            .is_some_and(|span| span.iter().any(QueryArg::is_skip));
        blocks.push(Block {
            start,
            end,
            arg_start,
            arg_len,
            drop,
        });
        search = end;
    }

    if blocks.is_empty() {
        return (template.to_string(), args.to_vec());
    }

    let mut out = String::with_capacity(template.len());
    let mut kept = Vec::with_capacity(args.len());
    let mut pos = 0;
    let mut arg_pos = 0;
    for block in &blocks {
        out.push_str(&template[pos..block.start]);
        let lead_end = block.arg_start.min(args.len());
        let span_end = (block.arg_start + block.arg_len).min(args.len());
        if arg_pos < lead_end {
            kept.extend_from_slice(&args[arg_pos..lead_end]);
        }
        arg_pos = lead_end;
        if block.drop {
            arg_pos = span_end;
        } else {
            out.push_str(&template[block.start + 1..block.end - 1]);
            if arg_pos < span_end {
                kept.extend_from_slice(&args[arg_pos..span_end]);
            }
            arg_pos = span_end;
        }
        pos = block.end;
    }
    out.push_str(&template[pos..]);
    if arg_pos < args.len() {
        kept.extend_from_slice(&args[arg_pos..]);
    }

    (out, kept)
}

fn count_markers(s: &str) -> usize {
    s.bytes().filter(|b| *b == b'?').count()
}
