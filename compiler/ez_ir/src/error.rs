//! Structural errors raised by AST accessors and mutators.

use crate::NodeKind;

/// A structural invariant of the tree was violated.
///
/// These are programming errors in whoever built the tree, not conditions a
/// program can trigger. Callers propagate them and abort the current phase.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    /// Child index is past the populated prefix.
    #[error("index out of bounds: [0 <= {index} < {len}] on '{kind}' node (line {line})")]
    ChildOutOfBounds {
        kind: NodeKind,
        line: u32,
        index: usize,
        len: usize,
    },
    /// The node has the wrong number of children for its kind.
    #[error("'{kind}' node at line {line} has {found} children, expected {expected}")]
    WrongArity {
        kind: NodeKind,
        line: u32,
        expected: String,
        found: usize,
    },
    /// A node needs a name (declarations and variable uses) but has none.
    #[error("'{kind}' node at line {line} has no name")]
    MissingName { kind: NodeKind, line: u32 },
    /// A variable use was never bound to a storage slot.
    #[error("variable '{name}' at line {line} is not bound to a memory slot")]
    UnboundVariable { name: String, line: u32 },
    /// The node is not the kind the caller requires.
    #[error("expected {expected} at line {line}, found '{found}'")]
    UnexpectedKind {
        expected: &'static str,
        found: NodeKind,
        line: u32,
    },
}
