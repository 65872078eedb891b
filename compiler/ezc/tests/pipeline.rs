// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests over the programs in `demos/`.
//!
//! Each test goes through the same library entry points the `ezc` binary
//! uses, with buffered output and scripted input in place of stdio.

use ez_eval::{buffer_handler, scripted_input, EvalError};
use ez_ir::{Operator, Type};
use ez_types::SemanticError;
use ezc::{check_source, dot_source, dump_source, run_source, CommandError, LoadError};
use pretty_assertions::assert_eq;

const SUM: &str = include_str!("../../../demos/sum.json");
const COUNTDOWN: &str = include_str!("../../../demos/countdown.json");
const BAD_TYPES: &str = include_str!("../../../demos/bad_types.json");

fn run(text: &str, input: &str) -> Result<String, CommandError> {
    let print = buffer_handler();
    run_source(text, print.clone(), scripted_input(input))?;
    Ok(print.get_output())
}

#[test]
fn sum_writes_five() {
    assert_eq!(run(SUM, "").unwrap(), "5\n");
}

#[test]
fn countdown_loops_and_concatenates() {
    let output = run(COUNTDOWN, "3").unwrap();
    assert_eq!(output, "read (int): n = 3\nn = 2\nn = 1\navg is 3.500000");
}

#[test]
fn repeat_body_runs_once_when_condition_starts_false() {
    let output = run(COUNTDOWN, "0").unwrap();
    assert_eq!(output, "read (int): n = 0\navg is 3.500000");
}

#[test]
fn bad_input_is_a_runtime_error() {
    let err = run(COUNTDOWN, "three").unwrap_err();
    assert!(matches!(
        err,
        CommandError::Eval(EvalError::InvalidInput {
            expected: Type::Int,
            ..
        })
    ));
}

#[test]
fn exhausted_input_is_a_runtime_error() {
    let err = run(COUNTDOWN, "").unwrap_err();
    assert!(matches!(
        err,
        CommandError::Eval(EvalError::InputExhausted { expected: Type::Int })
    ));
}

#[test]
fn check_reports_declared_variables() {
    let program = check_source(COUNTDOWN).unwrap();
    let names: Vec<_> = program
        .vars
        .iter()
        .map(|v| (v.name.as_str(), v.ty))
        .collect();
    assert_eq!(
        names,
        vec![("n", Type::Int), ("avg", Type::Real), ("msg", Type::Str)]
    );
}

#[test]
fn semantic_errors_are_collected_in_tree_order() {
    let Err(CommandError::Semantic(errors)) = check_source(BAD_TYPES) else {
        panic!("program should be rejected");
    };
    assert_eq!(
        errors,
        vec![
            SemanticError::RedeclaredVariable {
                name: "flag".into(),
                line: 2,
                first_line: 1,
            },
            SemanticError::IncompatibleTypes {
                op: Operator::Minus,
                left: Type::Bool,
                right: Type::Int,
                line: 3,
            },
            SemanticError::UndeclaredVariable {
                name: "missing".into(),
                line: 4,
            },
        ]
    );
}

#[test]
fn rejected_program_does_not_run() {
    let print = buffer_handler();
    let result = run_source(BAD_TYPES, print.clone(), scripted_input(""));
    assert!(matches!(result, Err(CommandError::Semantic(_))));
    assert_eq!(print.get_output(), "");
}

#[test]
fn semantic_error_display_is_one_per_line() {
    let err = check_source(BAD_TYPES).unwrap_err();
    let text = err.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.starts_with("SEMANTIC ERROR (")));
    assert!(lines[2].contains("'missing'"));
}

#[test]
fn dump_lists_tree_and_tables() {
    let (dump, errors) = dump_source(COUNTDOWN).unwrap();
    assert!(errors.is_empty());
    assert!(dump.starts_with("-----------  AST  -----------\n"));
    assert!(dump.contains("Kind: int -> real"));
    assert!(dump.contains("Kind: real -> string"));
    assert!(dump.contains("-------------------  Strings  -------------------"));
    assert!(dump.contains("Entry 0 -- \"n = \""));
    assert!(dump.contains("Entry 2 -- name: msg, line: 3, type: string"));
}

#[test]
fn dump_still_renders_rejected_programs() {
    let (dump, errors) = dump_source(BAD_TYPES).unwrap();
    assert_eq!(errors.len(), 3);
    assert!(dump.contains("Type: err_type"));
}

#[test]
fn dot_graph_includes_coercions() {
    let (graph, errors) = dot_source(SUM).unwrap();
    assert!(errors.is_empty());
    assert!(graph.starts_with("digraph {\n"));
    assert!(graph.ends_with("}\n"));
    assert!(graph.contains("[label=\"int x\"];"));
    assert!(graph.contains("[label=\"2 (int)\"];"));

    let (graph, _) = dot_source(COUNTDOWN).unwrap();
    assert!(graph.contains("[label=\"int -> string\"];"));
}

#[test]
fn malformed_json_is_a_load_error() {
    let err = check_source("{ \"kind\": \"program\", ").unwrap_err();
    assert!(matches!(err, CommandError::Load(LoadError::Json(_))));
}

/// Wrap one statement in a program declaring `int x`.
fn with_statement(stmt: &str) -> String {
    format!(
        r#"{{ "kind": "program", "line": 1, "children": [
            {{ "kind": "var_decl_list", "line": 1, "children": [
                {{ "kind": "var_decl", "name": "x", "type": "int", "line": 1 }} ] }},
            {{ "kind": "stmt_list", "line": 2, "children": [ {stmt} ] }} ] }}"#
    )
}

#[test]
fn misplaced_nodes_are_rejected_before_running() {
    let cases = [
        r#"{ "kind": "write", "line": 2, "children": [
            { "kind": "assign", "line": 2, "children": [
                { "kind": "var_use", "name": "x", "line": 2 },
                { "kind": "int_val", "value": 5, "line": 2 } ] } ] }"#,
        r#"{ "kind": "write", "line": 2, "children": [
            { "kind": "stmt_list", "line": 2 } ] }"#,
        r#"{ "kind": "repeat", "line": 2, "children": [
            { "kind": "stmt_list", "line": 2, "children": [
                { "kind": "int_val", "value": 7, "line": 2 } ] },
            { "kind": "bool_val", "value": true, "line": 3 } ] }"#,
        r#"{ "kind": "write", "line": 2, "children": [
            { "kind": { "coerce": "int_to_real" }, "line": 2, "children": [
                { "kind": "bool_val", "value": true, "line": 2 } ] } ] }"#,
    ];
    for stmt in cases {
        let text = with_statement(stmt);
        let print = buffer_handler();
        let result = run_source(&text, print.clone(), scripted_input(""));
        assert!(
            matches!(&result, Err(CommandError::Semantic(errors)) if errors.len() == 1),
            "{stmt}: {result:?}"
        );
        assert_eq!(print.get_output(), "");
    }
}
