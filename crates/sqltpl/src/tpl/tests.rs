use super::*;
use crate::value::skip;
use crate::{TplError, args};
use serde_json::json;

#[test]
fn substitutes_in_order() {
    let sql = build_query("SELECT * FROM t WHERE a = ? AND b = ?", &args![1, "x"]).unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE a = 1 AND b = 'x'");
}

#[test]
fn no_markers_no_args_is_identity() {
    let sql = build_query("SELECT 1", &args![]).unwrap();
    assert_eq!(sql, "SELECT 1");
}

#[test]
fn marker_at_end_of_template() {
    let sql = build_query("SELECT * FROM t WHERE id = ?", &args![5]).unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE id = 5");
}

#[test]
fn suffix_selects_formatting() {
    let sql = build_query("?d | ?f | ?a | ?#", &args![3.9, 1.5, vec![1, 2], "col"]).unwrap();
    assert_eq!(sql, "3 | 1.5 | 1, 2 | `col`");
}

#[test]
fn unrecognized_suffix_is_default_marker() {
    // `?x` is a bare marker followed by the literal `x`.
    let sql = build_query("SELECT ?x", &args![1]).unwrap();
    assert_eq!(sql, "SELECT 1x");
}

#[test]
fn int_marker_null_renders_null() {
    let sql = build_query("UPDATE t SET n = ?d", &args![None::<i64>]).unwrap();
    assert_eq!(sql, "UPDATE t SET n = NULL");
}

#[test]
fn too_many_arguments() {
    let err = build_query("SELECT ?", &args![1, 2]).unwrap_err();
    assert!(matches!(
        err,
        TplError::TooManyArguments {
            supplied: 2,
            markers: 1
        }
    ));
}

#[test]
fn not_enough_arguments() {
    let err = build_query("SELECT ?, ?", &args![1]).unwrap_err();
    assert!(matches!(
        err,
        TplError::NotEnoughArguments {
            supplied: 1,
            markers: 2
        }
    ));
}

#[test]
fn default_marker_rejects_mapping() {
    let err = build_query("SELECT ?", &args![json!({"a": 1})]).unwrap_err();
    assert!(err.is_unsupported_type());
}

#[test]
fn list_marker_rejects_scalar() {
    let err = build_query("SELECT ?a", &args![1]).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn skip_outside_block_is_an_error() {
    let err = build_query("SELECT ?", &args![skip()]).unwrap_err();
    assert!(err.is_unsupported_type());
}

#[test]
fn block_kept_when_no_sentinel() {
    let sql = build_query("SELECT * FROM t WHERE 1=1 {AND x = ?}", &args![5]).unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE 1=1 AND x = 5");
}

#[test]
fn block_dropped_on_sentinel() {
    let sql = build_query("SELECT * FROM t WHERE 1=1 {AND x = ?}", &args![skip()]).unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE 1=1 ");
    assert!(!sql.contains("AND x ="));
}

#[test]
fn dropped_block_consumes_its_arguments() {
    let sql = build_query(
        "SELECT * FROM t WHERE a = ? {AND b = ? AND c = ?} LIMIT ?d",
        &args![1, skip(), 3, 10],
    )
    .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE a = 1  LIMIT 10");
}

#[test]
fn sentinel_anywhere_in_span_drops_the_block() {
    let sql = build_query(
        "SELECT * FROM t {WHERE b = ? AND c = ?}",
        &args![2, skip()],
    )
    .unwrap();
    assert_eq!(sql, "SELECT * FROM t ");
}

#[test]
fn multiple_blocks_resolve_independently() {
    let sql = build_query(
        "SELECT * FROM t WHERE 1=1 {AND a = ?} {AND b = ?} {AND c = ?}",
        &args![1, skip(), 3],
    )
    .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE 1=1 AND a = 1  AND c = 3");
}

#[test]
fn dropping_an_early_block_does_not_shift_later_spans() {
    // The second block's argument span is computed against the original
    // template, not the partially rewritten one.
    let sql = build_query(
        "SELECT ? FROM t {WHERE a = ?d} {AND b = ?d} ORDER BY ?#",
        &args![1, skip(), 2, "id"],
    )
    .unwrap();
    assert_eq!(sql, "SELECT 1 FROM t  AND b = 2 ORDER BY `id`");
}

#[test]
fn block_without_markers_is_always_kept() {
    let sql = build_query("SELECT * FROM t {FOR UPDATE}", &args![]).unwrap();
    assert_eq!(sql, "SELECT * FROM t FOR UPDATE");
}

#[test]
fn unclosed_brace_is_literal() {
    let sql = build_query("SELECT '{' FROM t WHERE x = ?", &args![1]).unwrap();
    assert_eq!(sql, "SELECT '{' FROM t WHERE x = 1");
}

#[test]
fn dropped_block_with_typed_markers() {
    let sql = build_query(
        "SELECT * FROM t WHERE 1=1 {AND a IN (?a)} {AND b = ?d}",
        &args![skip(), 7],
    )
    .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE 1=1  AND b = 7");
}

#[test]
fn mismatch_after_drop_is_not_enough_arguments() {
    // Block consumes its one argument; the trailing marker is left unmatched.
    let err = build_query("SELECT * FROM t {WHERE a = ?} AND b = ?", &args![skip()]).unwrap_err();
    assert!(err.is_not_enough_arguments());
}

#[test]
fn span_overrunning_argument_list_keeps_block() {
    // Two markers in the block, one argument supplied: the block cannot be
    // classified, so it is kept and the mismatch surfaces in substitution.
    let err = build_query("SELECT * FROM t {WHERE a = ? AND b = ?}", &args![1]).unwrap_err();
    assert!(err.is_not_enough_arguments());
}
