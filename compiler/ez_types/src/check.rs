//! Whole-program checking.
//!
//! One depth-first pass over a freshly built tree:
//!
//! ```text
//! var_decl      -> register in the VarTable, store slot in payload
//! var_use       -> bind type and slot from the first declaration
//! literal       -> type from kind
//! operator      -> children first, then resolve_binary (splices coercions)
//! if / repeat   -> condition must be bool
//! read / :=     -> target must be a variable use
//! coerce        -> operand must have the coercion's source type
//! ```
//!
//! Placement is checked too: operands, conditions and `write` arguments must
//! be expressions, and statement lists and branches must hold statements.
//! A tree that passes leaves the operand stack balanced when run.
//!
//! Program errors are collected and the walk continues; an operand typed
//! `err_type` marks its parent `err_type` without a second report. A
//! structural [`AstError`] stops the walk.

use ez_ir::{AstError, Coercion, Node, NodeKind, Payload, Type, VarTable};
use ez_stack::ensure_sufficient_stack;

use crate::resolve::resolve_binary;
use crate::SemanticError;

/// Check and annotate `root` in place, registering its declarations in `vars`.
///
/// On success every node carries its final type, every variable is bound to
/// a slot and every required coercion node is in place.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_program(root: &mut Node, vars: &mut VarTable) -> Result<(), Vec<SemanticError>> {
    let mut checker = Checker {
        vars,
        errors: Vec::new(),
    };
    if let Err(err) = checker.walk(root) {
        checker.errors.push(err.into());
    }
    if checker.errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = checker.errors.len(), "semantic errors");
        Err(checker.errors)
    }
}

struct Checker<'a> {
    vars: &'a mut VarTable,
    errors: Vec<SemanticError>,
}

impl Checker<'_> {
    fn walk(&mut self, node: &mut Node) -> Result<(), AstError> {
        ensure_sufficient_stack(|| self.walk_inner(node))
    }

    fn walk_inner(&mut self, node: &mut Node) -> Result<(), AstError> {
        match node.kind() {
            NodeKind::Program => {
                node.check_arity(2, 2)?;
                self.walk_children(node)
            }
            NodeKind::VarDeclList => self.walk_children(node),
            NodeKind::StmtList => {
                self.walk_children(node)?;
                for index in 0..node.len() {
                    self.require_statement(node, index)?;
                }
                Ok(())
            }
            NodeKind::VarDecl => self.declare(node),
            NodeKind::VarUse => self.bind(node),
            NodeKind::BoolVal | NodeKind::IntVal | NodeKind::RealVal | NodeKind::StrVal => {
                if let Some(ty) = node.kind().literal_type() {
                    node.set_type(ty);
                }
                Ok(())
            }
            NodeKind::If => {
                node.check_arity(2, 3)?;
                self.walk_children(node)?;
                for branch in 1..node.len() {
                    self.require_statement(node, branch)?;
                }
                self.require_bool(node, 0)
            }
            NodeKind::Repeat => {
                node.check_arity(2, 2)?;
                self.walk_children(node)?;
                self.require_statement(node, 0)?;
                self.require_bool(node, 1)
            }
            NodeKind::Read => {
                node.check_arity(1, 1)?;
                self.walk_children(node)?;
                self.require_target(node);
                Ok(())
            }
            NodeKind::Write => {
                node.check_arity(1, 1)?;
                self.walk_children(node)?;
                self.require_value(node, 0)?;
                Ok(())
            }
            NodeKind::Assign
            | NodeKind::LessThan
            | NodeKind::Equal
            | NodeKind::Plus
            | NodeKind::Minus
            | NodeKind::Times
            | NodeKind::Divide => self.operator(node),
            NodeKind::Coerce(coercion) => {
                node.check_arity(1, 1)?;
                self.walk_children(node)?;
                let ty = if self.require_value(node, 0)? {
                    self.coerced_type(node, coercion)?
                } else {
                    Type::Error
                };
                node.set_type(ty);
                Ok(())
            }
        }
    }

    fn walk_children(&mut self, node: &mut Node) -> Result<(), AstError> {
        for child in node.children_mut() {
            self.walk(child)?;
        }
        Ok(())
    }

    fn declare(&mut self, node: &mut Node) -> Result<(), AstError> {
        let name = node.required_name()?.to_owned();
        if let Some(first) = self.vars.lookup(&name) {
            self.errors.push(SemanticError::RedeclaredVariable {
                first_line: first.line,
                name,
                line: node.line(),
            });
            return Ok(());
        }
        let slot = self.vars.declare(&name, node.line(), node.ty());
        tracing::debug!(%name, %slot, ty = %node.ty(), "declare variable");
        node.set_payload(Payload::Slot(slot));
        Ok(())
    }

    fn bind(&mut self, node: &mut Node) -> Result<(), AstError> {
        let name = node.required_name()?;
        if let Some(info) = self.vars.lookup(name) {
            let (ty, slot) = (info.ty, info.slot);
            node.set_type(ty).set_payload(Payload::Slot(slot));
        } else {
            self.errors.push(SemanticError::UndeclaredVariable {
                name: name.to_owned(),
                line: node.line(),
            });
            node.set_type(Type::Error);
        }
        Ok(())
    }

    fn operator(&mut self, node: &mut Node) -> Result<(), AstError> {
        node.check_arity(2, 2)?;
        self.walk_children(node)?;

        let operands_ok = if node.kind() == NodeKind::Assign {
            let target = self.require_target(node);
            self.require_value(node, 1)? && target
        } else {
            let left = self.require_value(node, 0)?;
            self.require_value(node, 1)? && left
        };
        if !operands_ok {
            node.set_type(Type::Error);
            return Ok(());
        }

        let left = node.child(0)?.ty();
        let right = node.child(1)?.ty();
        let resolved = resolve_binary(node)?;
        if resolved.is_error() && left != Type::Error && right != Type::Error {
            if let Some(op) = node.kind().operator() {
                self.errors.push(SemanticError::IncompatibleTypes {
                    op,
                    left,
                    right,
                    line: node.line(),
                });
            }
        }
        Ok(())
    }

    /// Report unless child 0 is a variable use. Returns whether it is.
    fn require_target(&mut self, node: &Node) -> bool {
        match node.children().first() {
            Some(target) if target.kind() == NodeKind::VarUse => true,
            Some(target) => {
                self.errors.push(SemanticError::InvalidTarget {
                    construct: node.kind(),
                    found: target.kind(),
                    line: target.line(),
                });
                false
            }
            None => false,
        }
    }

    /// Report unless child `index` is an expression with a value type.
    /// Returns whether it is.
    fn require_value(&mut self, node: &Node, index: usize) -> Result<bool, AstError> {
        let operand = node.child(index)?;
        if operand.kind().is_expression() && operand.ty() != Type::NoType {
            return Ok(true);
        }
        self.errors.push(SemanticError::NotAValue {
            construct: node.kind(),
            found: operand.kind(),
            line: operand.line(),
        });
        Ok(false)
    }

    fn require_statement(&mut self, node: &Node, index: usize) -> Result<(), AstError> {
        let stmt = node.child(index)?;
        if !stmt.kind().is_statement() {
            self.errors.push(SemanticError::NotAStatement {
                construct: node.kind(),
                found: stmt.kind(),
                line: stmt.line(),
            });
        }
        Ok(())
    }

    /// Target type of a coercion node whose operand is a value, or `Error`
    /// if the operand has the wrong type.
    fn coerced_type(&mut self, node: &Node, coercion: Coercion) -> Result<Type, AstError> {
        let found = node.child(0)?.ty();
        if found == coercion.source() {
            return Ok(coercion.target());
        }
        if found != Type::Error {
            self.errors.push(SemanticError::CoercionMismatch {
                coercion,
                found,
                line: node.line(),
            });
        }
        Ok(Type::Error)
    }

    fn require_bool(&mut self, node: &Node, index: usize) -> Result<(), AstError> {
        if !self.require_value(node, index)? {
            return Ok(());
        }
        let cond = node.child(index)?;
        match cond.ty() {
            Type::Bool | Type::Error => {}
            found => self.errors.push(SemanticError::ConditionNotBool {
                construct: node.kind(),
                found,
                line: cond.line(),
            }),
        }
        Ok(())
    }
}
