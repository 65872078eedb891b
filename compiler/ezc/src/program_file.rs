//! JSON program files.
//!
//! A program file is one JSON object per node:
//!
//! ```json
//! { "kind": "assign", "line": 2, "children": [
//!     { "kind": "var_use", "name": "x", "line": 2 },
//!     { "kind": "int_val", "value": 5, "line": 2 } ] }
//! ```
//!
//! `type` is only read on `var_decl`; every other node is typed by the
//! checker. String literals are interned as they are loaded.

use ez_ir::{Node, NodeKind, Payload, StringTable, Type};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One node as it appears in a program file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub kind: NodeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub line: u32,
    #[serde(default, rename = "type")]
    pub ty: Option<Type>,
    #[serde(default)]
    pub value: Option<LiteralSpec>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

/// Literal value of a `*_val` node.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LiteralSpec {
    Bool(bool),
    Int(i64),
    Real(f64),
    Str(String),
}

/// A loaded program: the unchecked tree and the strings its literals use.
#[derive(Debug)]
pub struct Program {
    pub root: Node,
    pub strings: StringTable,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid program file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{kind}' node at line {line} needs a name")]
    MissingName { kind: NodeKind, line: u32 },

    #[error("declaration of '{name}' at line {line} needs a type")]
    MissingType { name: String, line: u32 },

    #[error("variable '{name}' at line {line} cannot be declared with type '{ty}'")]
    InvalidDeclType { name: String, ty: Type, line: u32 },

    #[error("'{kind}' node at line {line} has a missing or mismatched value")]
    BadLiteral { kind: NodeKind, line: u32 },

    #[error("integer literal {value} at line {line} does not fit in 32 bits")]
    IntOutOfRange { value: i64, line: u32 },
}

/// Read a program file into memory.
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert program text.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_program(text: &str) -> Result<Program, LoadError> {
    let raw: NodeSpec = serde_json::from_str(text)?;
    let mut strings = StringTable::new();
    let root = build(raw, &mut strings)?;
    tracing::debug!(strings = strings.len(), "program loaded");
    Ok(Program { root, strings })
}

fn build(raw: NodeSpec, strings: &mut StringTable) -> Result<Node, LoadError> {
    let NodeSpec {
        kind,
        name,
        line,
        ty,
        value,
        children,
    } = raw;

    let mut node = match kind {
        NodeKind::VarDecl => {
            let name = name.ok_or(LoadError::MissingName { kind, line })?;
            let ty = ty.ok_or_else(|| LoadError::MissingType {
                name: name.clone(),
                line,
            })?;
            if !ty.is_value() {
                return Err(LoadError::InvalidDeclType { name, ty, line });
            }
            Node::var_decl(&name, ty, line)
        }
        NodeKind::VarUse => {
            let name = name.ok_or(LoadError::MissingName { kind, line })?;
            Node::var_use(&name, line)
        }
        NodeKind::BoolVal | NodeKind::IntVal | NodeKind::RealVal | NodeKind::StrVal => {
            literal(kind, value, line, strings)?
        }
        _ => Node::new(kind, name.as_deref(), line, Type::NoType, Payload::None),
    };

    for child in children {
        node.add_child(build(child, strings)?);
    }
    Ok(node)
}

fn literal(
    kind: NodeKind,
    value: Option<LiteralSpec>,
    line: u32,
    strings: &mut StringTable,
) -> Result<Node, LoadError> {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "reals are single precision at runtime"
    )]
    let node = match (kind, value) {
        (NodeKind::BoolVal, Some(LiteralSpec::Bool(b))) => Node::bool_val(b, line),
        (NodeKind::IntVal, Some(LiteralSpec::Int(i))) => {
            let i = i32::try_from(i).map_err(|_| LoadError::IntOutOfRange { value: i, line })?;
            Node::int_val(i, line)
        }
        (NodeKind::RealVal, Some(LiteralSpec::Real(r))) => Node::real_val(r as f32, line),
        (NodeKind::RealVal, Some(LiteralSpec::Int(i))) => Node::real_val(i as f32, line),
        (NodeKind::StrVal, Some(LiteralSpec::Str(s))) => {
            Node::str_val(strings.intern_owned(s), line)
        }
        _ => return Err(LoadError::BadLiteral { kind, line }),
    };
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_declarations_and_literals() {
        let text = r#"{
            "kind": "program", "line": 1, "children": [
                { "kind": "var_decl_list", "children": [
                    { "kind": "var_decl", "name": "r", "type": "real", "line": 1 } ] },
                { "kind": "stmt_list", "children": [
                    { "kind": "assign", "line": 2, "children": [
                        { "kind": "var_use", "name": "r", "line": 2 },
                        { "kind": "real_val", "value": 3, "line": 2 } ] },
                    { "kind": "write", "line": 3, "children": [
                        { "kind": "str_val", "value": "\"hi\"", "line": 3 } ] } ] } ] }"#;
        let Ok(program) = parse_program(text) else {
            panic!("program did not load");
        };

        let decl = program.root.child(0).and_then(|list| list.child(0));
        assert_eq!(
            decl.map(|d| (d.name(), d.ty())),
            Ok((Some("r"), Type::Real))
        );

        let Ok(stmts) = program.root.child(1) else {
            panic!("missing statements");
        };
        let value = stmts.child(0).and_then(|a| a.child(1)).map(Node::payload);
        assert_eq!(value, Ok(Payload::Real(3.0)));

        assert_eq!(program.strings.len(), 1);
        assert_eq!(
            program.strings.iter().next().map(|(_, s)| s),
            Some("\"hi\"")
        );
    }

    #[test]
    fn declaration_needs_value_type() {
        let text = r#"{ "kind": "var_decl", "name": "x", "type": "no_type", "line": 4 }"#;
        assert!(matches!(
            parse_program(text),
            Err(LoadError::InvalidDeclType { ty: Type::NoType, line: 4, .. })
        ));
        let untyped = r#"{ "kind": "var_decl", "name": "x", "line": 4 }"#;
        assert!(matches!(
            parse_program(untyped),
            Err(LoadError::MissingType { line: 4, .. })
        ));
    }

    #[test]
    fn literal_must_match_kind() {
        let text = r#"{ "kind": "int_val", "value": "five", "line": 2 }"#;
        assert!(matches!(
            parse_program(text),
            Err(LoadError::BadLiteral { kind: NodeKind::IntVal, line: 2 })
        ));
        let huge = r#"{ "kind": "int_val", "value": 4294967296, "line": 2 }"#;
        assert!(matches!(
            parse_program(huge),
            Err(LoadError::IntOutOfRange { value: 4_294_967_296, .. })
        ));
    }

    #[test]
    fn unknown_kind_is_a_json_error() {
        let text = r#"{ "kind": "while", "line": 1 }"#;
        assert!(matches!(parse_program(text), Err(LoadError::Json(_))));
    }
}
