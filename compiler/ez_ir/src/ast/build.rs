//! Shorthand constructors for building trees by hand.
//!
//! Literal and declaration nodes get their type here; operator and statement
//! nodes start as `NoType` and are typed by the checker.

use super::kind::NodeKind;
use super::node::{Node, Payload};
use crate::{Operator, StrHandle, Type};

impl Node {
    /// `program` with a declaration list and a statement list.
    pub fn program(line: u32, decls: Node, stmts: Node) -> Node {
        Node::with_children(NodeKind::Program, line, Type::NoType, [decls, stmts])
    }

    pub fn var_decl_list(line: u32, decls: impl IntoIterator<Item = Node>) -> Node {
        Node::with_children(NodeKind::VarDeclList, line, Type::NoType, decls)
    }

    pub fn var_decl(name: &str, ty: Type, line: u32) -> Node {
        Node::new(NodeKind::VarDecl, Some(name), line, ty, Payload::None)
    }

    pub fn stmt_list(line: u32, stmts: impl IntoIterator<Item = Node>) -> Node {
        Node::with_children(NodeKind::StmtList, line, Type::NoType, stmts)
    }

    /// `if`; a missing else-branch does nothing when the condition is false.
    pub fn if_stmt(line: u32, cond: Node, then_branch: Node, else_branch: Option<Node>) -> Node {
        let mut node = Node::with_children(NodeKind::If, line, Type::NoType, [cond, then_branch]);
        if let Some(else_branch) = else_branch {
            node.add_child(else_branch);
        }
        node
    }

    pub fn repeat(line: u32, body: Node, cond: Node) -> Node {
        Node::with_children(NodeKind::Repeat, line, Type::NoType, [body, cond])
    }

    pub fn read(line: u32, target: Node) -> Node {
        Node::with_children(NodeKind::Read, line, Type::NoType, [target])
    }

    pub fn write(line: u32, expr: Node) -> Node {
        Node::with_children(NodeKind::Write, line, Type::NoType, [expr])
    }

    pub fn assign(line: u32, target: Node, expr: Node) -> Node {
        Node::binary(Operator::Assign, line, target, expr)
    }

    pub fn binary(op: Operator, line: u32, left: Node, right: Node) -> Node {
        Node::with_children(
            NodeKind::from_operator(op),
            line,
            Type::NoType,
            [left, right],
        )
    }

    /// Unbound variable use; the checker fills in type and slot.
    pub fn var_use(name: &str, line: u32) -> Node {
        Node::new(
            NodeKind::VarUse,
            Some(name),
            line,
            Type::NoType,
            Payload::None,
        )
    }

    pub fn bool_val(value: bool, line: u32) -> Node {
        Node::new(
            NodeKind::BoolVal,
            None,
            line,
            Type::Bool,
            Payload::Bool(value),
        )
    }

    pub fn int_val(value: i32, line: u32) -> Node {
        Node::new(NodeKind::IntVal, None, line, Type::Int, Payload::Int(value))
    }

    pub fn real_val(value: f32, line: u32) -> Node {
        Node::new(
            NodeKind::RealVal,
            None,
            line,
            Type::Real,
            Payload::Real(value),
        )
    }

    pub fn str_val(handle: StrHandle, line: u32) -> Node {
        Node::new(
            NodeKind::StrVal,
            None,
            line,
            Type::Str,
            Payload::Str(handle),
        )
    }
}
