//! Runtime values.

use ez_ir::{StrHandle, Type};
use std::fmt;

/// A value on the operand stack or in a memory slot.
///
/// Strings are handles into the interpreter's string table; the table owns
/// the text.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Real(f32),
    Str(StrHandle),
}

impl Value {
    /// Static type this value represents.
    pub const fn ty(self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Real(_) => Type::Real,
            Value::Str(_) => Type::Str,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r:.6}"),
            Value::Str(h) => write!(f, "{h}"),
        }
    }
}
