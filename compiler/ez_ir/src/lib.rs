//! EZ IR - typed AST and symbol tables.
//!
//! This crate contains the data the rest of the pipeline works on:
//! - `Type` and `Operator`, the closed enums indexing the resolution tables
//! - `Node`, the typed AST with owned, growable child lists
//! - `StringTable`, mapping string content to stable `StrHandle`s
//! - `VarTable`, mapping declared names to memory slots
//! - `TreeDump` / `DotGraph`, diagnostic renderings of a tree
//!
//! # Lifecycle
//!
//! A front end builds the tree and a `StringTable` for its literals. The
//! checker (`ez_types`) fills a `VarTable`, types every node and splices in
//! coercions. The interpreter (`ez_eval`) then only reads the tree.

pub mod ast;
pub mod dump;
mod error;
mod interner;
mod ty;
mod var_table;

pub use ast::{Coercion, Node, NodeId, NodeKind, Payload};
pub use dump::{DotGraph, TreeDump};
pub use error::AstError;
pub use interner::{StrHandle, StringTable};
pub use ty::{Operator, Type, UnknownType};
pub use var_table::{VarInfo, VarSlot, VarTable};
