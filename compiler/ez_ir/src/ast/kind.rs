//! Node kinds and implicit coercions.

use crate::{Operator, Type};
use std::fmt;

/// Implicit widening inserted by the resolver between an operator and one of
/// its operands.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Coercion {
    BoolToInt,
    BoolToReal,
    BoolToStr,
    IntToReal,
    IntToStr,
    RealToStr,
}

impl Coercion {
    pub const ALL: [Coercion; 6] = [
        Coercion::BoolToInt,
        Coercion::BoolToReal,
        Coercion::BoolToStr,
        Coercion::IntToReal,
        Coercion::IntToStr,
        Coercion::RealToStr,
    ];

    /// Type of the wrapped operand.
    pub const fn source(self) -> Type {
        match self {
            Coercion::BoolToInt | Coercion::BoolToReal | Coercion::BoolToStr => Type::Bool,
            Coercion::IntToReal | Coercion::IntToStr => Type::Int,
            Coercion::RealToStr => Type::Real,
        }
    }

    /// Type the operand has after conversion.
    pub const fn target(self) -> Type {
        match self {
            Coercion::BoolToInt => Type::Int,
            Coercion::BoolToReal | Coercion::IntToReal => Type::Real,
            Coercion::BoolToStr | Coercion::IntToStr | Coercion::RealToStr => Type::Str,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Coercion::BoolToInt => "bool -> int",
            Coercion::BoolToReal => "bool -> real",
            Coercion::BoolToStr => "bool -> string",
            Coercion::IntToReal => "int -> real",
            Coercion::IntToStr => "int -> string",
            Coercion::RealToStr => "real -> string",
        }
    }
}

impl fmt::Display for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a node is.
///
/// Arity by kind:
/// - `Coerce`: exactly one child
/// - operators (`Assign` .. `Divide`): exactly two children, left then right
/// - `If`: condition, then-branch, optional else-branch
/// - `Repeat`: body, condition
/// - `Read`, `Write`: one child
/// - `Program`, `VarDeclList`, `StmtList`: any number
/// - declarations and literals: none
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeKind {
    // Structure
    Program,
    VarDeclList,
    VarDecl,
    StmtList,
    If,
    Repeat,
    Read,
    Write,

    // Operators
    Assign,
    LessThan,
    Equal,
    Plus,
    Minus,
    Times,
    Divide,

    // Leaves
    VarUse,
    BoolVal,
    IntVal,
    RealVal,
    StrVal,

    /// Implicit conversion of the single child.
    Coerce(Coercion),
}

impl NodeKind {
    /// The operator this node applies, if it is a binary operator node.
    pub const fn operator(self) -> Option<Operator> {
        match self {
            NodeKind::Assign => Some(Operator::Assign),
            NodeKind::LessThan => Some(Operator::LessThan),
            NodeKind::Equal => Some(Operator::Equal),
            NodeKind::Plus => Some(Operator::Plus),
            NodeKind::Minus => Some(Operator::Minus),
            NodeKind::Times => Some(Operator::Times),
            NodeKind::Divide => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Node kind for a binary operator.
    pub const fn from_operator(op: Operator) -> NodeKind {
        match op {
            Operator::Assign => NodeKind::Assign,
            Operator::LessThan => NodeKind::LessThan,
            Operator::Equal => NodeKind::Equal,
            Operator::Plus => NodeKind::Plus,
            Operator::Minus => NodeKind::Minus,
            Operator::Times => NodeKind::Times,
            Operator::Divide => NodeKind::Divide,
        }
    }

    /// Static type implied by a literal kind.
    pub const fn literal_type(self) -> Option<Type> {
        match self {
            NodeKind::BoolVal => Some(Type::Bool),
            NodeKind::IntVal => Some(Type::Int),
            NodeKind::RealVal => Some(Type::Real),
            NodeKind::StrVal => Some(Type::Str),
            _ => None,
        }
    }

    /// Whether executing a node of this kind leaves exactly one value on the
    /// operand stack. `Assign` stores its value instead.
    pub const fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::LessThan
                | NodeKind::Equal
                | NodeKind::Plus
                | NodeKind::Minus
                | NodeKind::Times
                | NodeKind::Divide
                | NodeKind::VarUse
                | NodeKind::BoolVal
                | NodeKind::IntVal
                | NodeKind::RealVal
                | NodeKind::StrVal
                | NodeKind::Coerce(_)
        )
    }

    /// Whether a node of this kind may appear in a statement list or as an
    /// `if`/`repeat` branch.
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::StmtList
                | NodeKind::If
                | NodeKind::Repeat
                | NodeKind::Read
                | NodeKind::Write
                | NodeKind::Assign
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::VarDeclList => "var_decl_list",
            NodeKind::VarDecl => "var_decl",
            NodeKind::StmtList => "stmt_list",
            NodeKind::If => "if",
            NodeKind::Repeat => "repeat",
            NodeKind::Read => "read",
            NodeKind::Write => "write",
            NodeKind::Assign => ":=",
            NodeKind::LessThan => "<",
            NodeKind::Equal => "=",
            NodeKind::Plus => "+",
            NodeKind::Minus => "-",
            NodeKind::Times => "*",
            NodeKind::Divide => "/",
            NodeKind::VarUse => "var_use",
            NodeKind::BoolVal => "bool_val",
            NodeKind::IntVal => "int_val",
            NodeKind::RealVal => "real_val",
            NodeKind::StrVal => "str_val",
            NodeKind::Coerce(c) => c.label(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
