//! Evaluation errors.
//!
//! Every variant aborts the run. None of them can be caused by a program
//! that passed the checker except `DivisionByZero`, the input errors, the
//! capacity limits and I/O failures.

use ez_ir::{AstError, NodeKind, Operator, StrHandle, Type, VarSlot};

/// Result of evaluation.
pub type EvalResult<T = ()> = Result<T, EvalError>;

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("operand stack overflow (capacity {capacity})")]
    StackOverflow { capacity: usize },

    #[error("operand stack underflow")]
    StackUnderflow,

    /// The value on the stack does not have the representation the tree's
    /// static types promised.
    #[error("expected {expected} on the operand stack, found {found}")]
    TypeMismatch { expected: Type, found: Type },

    #[error("operator '{op}' is not defined on {ty}")]
    InvalidOperator { op: Operator, ty: Type },

    #[error("memory slot {slot} out of bounds (capacity {capacity})")]
    MemoryOutOfBounds { slot: VarSlot, capacity: usize },

    #[error("string handle {0} is not in the string table")]
    UnknownString(StrHandle),

    #[error("division by zero at line {line}")]
    DivisionByZero { line: u32 },

    /// A node of a kind that must be resolved away before execution.
    #[error("cannot execute '{kind}' node of type '{ty}' at line {line}")]
    Unresolved { kind: NodeKind, ty: Type, line: u32 },

    /// A literal node whose payload does not match its kind.
    #[error("'{kind}' literal at line {line} carries no matching value")]
    InvalidLiteral { kind: NodeKind, line: u32 },

    #[error("invalid {expected} input '{token}'")]
    InvalidInput { expected: Type, token: String },

    #[error("end of input while reading {expected}")]
    InputExhausted { expected: Type },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ast(#[from] AstError),
}

#[cold]
pub fn type_mismatch(expected: Type, found: Type) -> EvalError {
    EvalError::TypeMismatch { expected, found }
}

#[cold]
pub fn division_by_zero(line: u32) -> EvalError {
    EvalError::DivisionByZero { line }
}

#[cold]
pub fn unresolved(kind: NodeKind, ty: Type, line: u32) -> EvalError {
    EvalError::Unresolved { kind, ty, line }
}

#[cold]
pub fn invalid_operator(op: Operator, ty: Type) -> EvalError {
    EvalError::InvalidOperator { op, ty }
}
