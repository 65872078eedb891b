//! EZ type resolution.
//!
//! - `unify`: the per-operator 4x4 tables giving result type and coercions
//! - `resolve_binary`: applies a table decision to an operator node
//! - `check_program`: binds variables and types a whole program

mod check;
mod error;
mod resolve;
mod unify;

pub use check::check_program;
pub use error::SemanticError;
pub use resolve::resolve_binary;
pub use unify::{unify, Unification};
