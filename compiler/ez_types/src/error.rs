//! Semantic errors reported by the checker.

use ez_ir::{AstError, Coercion, NodeKind, Operator, Type};

/// A reason the program cannot run.
///
/// All variants except [`SemanticError::Malformed`] describe mistakes in the
/// program itself; the checker collects them and keeps walking.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    #[error("SEMANTIC ERROR ({line}): variable '{name}' was not declared.")]
    UndeclaredVariable { name: String, line: u32 },

    #[error("SEMANTIC ERROR ({line}): variable '{name}' already declared at line {first_line}.")]
    RedeclaredVariable {
        name: String,
        line: u32,
        first_line: u32,
    },

    #[error(
        "SEMANTIC ERROR ({line}): incompatible types for operator '{op}', LHS is '{left}' and RHS is '{right}'."
    )]
    IncompatibleTypes {
        op: Operator,
        left: Type,
        right: Type,
        line: u32,
    },

    #[error(
        "SEMANTIC ERROR ({line}): conditional expression in '{construct}' is '{found}' instead of 'bool'."
    )]
    ConditionNotBool {
        construct: NodeKind,
        found: Type,
        line: u32,
    },

    #[error(
        "SEMANTIC ERROR ({line}): target of '{construct}' must be a variable, found '{found}'."
    )]
    InvalidTarget {
        construct: NodeKind,
        found: NodeKind,
        line: u32,
    },

    /// A statement or structural node where a value is needed.
    #[error("SEMANTIC ERROR ({line}): '{found}' does not produce a value for '{construct}'.")]
    NotAValue {
        construct: NodeKind,
        found: NodeKind,
        line: u32,
    },

    /// An expression or structural node where a statement is needed.
    #[error("SEMANTIC ERROR ({line}): '{found}' is not a statement in '{construct}'.")]
    NotAStatement {
        construct: NodeKind,
        found: NodeKind,
        line: u32,
    },

    #[error("SEMANTIC ERROR ({line}): coercion '{coercion}' applied to '{found}'.")]
    CoercionMismatch {
        coercion: Coercion,
        found: Type,
        line: u32,
    },

    /// The tree itself is malformed; checking stops here.
    #[error("malformed tree: {0}")]
    Malformed(#[from] AstError),
}

impl SemanticError {
    /// Source line the error points at.
    pub fn line(&self) -> u32 {
        match self {
            SemanticError::UndeclaredVariable { line, .. }
            | SemanticError::RedeclaredVariable { line, .. }
            | SemanticError::IncompatibleTypes { line, .. }
            | SemanticError::ConditionNotBool { line, .. }
            | SemanticError::InvalidTarget { line, .. }
            | SemanticError::NotAValue { line, .. }
            | SemanticError::NotAStatement { line, .. }
            | SemanticError::CoercionMismatch { line, .. } => *line,
            SemanticError::Malformed(err) => match err {
                AstError::ChildOutOfBounds { line, .. }
                | AstError::WrongArity { line, .. }
                | AstError::MissingName { line, .. }
                | AstError::UnboundVariable { line, .. }
                | AstError::UnexpectedKind { line, .. } => *line,
            },
        }
    }
}
