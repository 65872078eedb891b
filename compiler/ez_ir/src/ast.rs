//! Typed abstract syntax tree.
//!
//! A tree of owned [`Node`]s. Each node has a kind, an optional source name,
//! a line, a resolved [`Type`](crate::Type), a [`Payload`] and an ordered,
//! growable list of children.
//!
//! Trees are built by a front end (or by the shorthand constructors in
//! `build`), typed and rewritten by the checker, then only read by the
//! interpreter.

mod build;
mod kind;
mod node;

pub use kind::{Coercion, NodeKind};
pub use node::{Node, NodeId, Payload};
