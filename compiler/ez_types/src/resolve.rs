//! Splicing table decisions into the tree.

use ez_ir::{AstError, Node};

use crate::unify::{unify, Unification};

/// Type one binary operator node whose operands are already typed.
///
/// Looks up the operand types in the operator's table, wraps each operand
/// that needs widening in a coercion node, and sets the node's type to the
/// table's result. On `Type::Error` nothing is spliced; the node is only
/// marked so the error propagates to its parent.
pub fn resolve_binary(node: &mut Node) -> Result<Unification, AstError> {
    let Some(op) = node.kind().operator() else {
        return Err(AstError::UnexpectedKind {
            expected: "binary operator",
            found: node.kind(),
            line: node.line(),
        });
    };
    node.check_arity(2, 2)?;

    let left = node.child(0)?.ty();
    let right = node.child(1)?.ty();
    let resolved = unify(op, left, right);

    if !resolved.is_error() {
        if let Some(coercion) = resolved.left {
            tracing::debug!(
                line = node.line(),
                %op,
                coercion = coercion.label(),
                "coerce left operand"
            );
            node.wrap_child(0, coercion)?;
        }
        if let Some(coercion) = resolved.right {
            tracing::debug!(
                line = node.line(),
                %op,
                coercion = coercion.label(),
                "coerce right operand"
            );
            node.wrap_child(1, coercion)?;
        }
    }
    node.set_type(resolved.ty);
    Ok(resolved)
}
