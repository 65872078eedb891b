//! Tree-walking interpreter.
//!
//! # Execution model
//!
//! Every expression node leaves exactly one value on the operand stack;
//! statements leave the stack as they found it. Variables live in a flat
//! memory indexed by the slot the checker stored in each variable node.
//!
//! Binary operators evaluate the right operand first, then the left, so the
//! left value ends up on top and is popped first.
//!
//! # Preconditions
//!
//! The tree has been through `ez_types::check_program` without errors: every
//! operator node carries a value type, every variable node a slot, and every
//! coercion node is in place. Violations surface as [`EvalError`]s, never as
//! panics.

mod builder;

pub use builder::{InterpreterBuilder, DEFAULT_MEMORY_CAPACITY, DEFAULT_STACK_CAPACITY};

use ez_ir::{AstError, Node, NodeKind, Payload, StringTable, Type, VarSlot};
use ez_stack::ensure_sufficient_stack;

use crate::errors::unresolved;
use crate::format::{format_bool, format_real, unescape};
use crate::input_handler::SharedInputHandler;
use crate::memory::Memory;
use crate::operand_stack::OperandStack;
use crate::operators::{coerce, evaluate_binary, resolve};
use crate::print_handler::SharedPrintHandler;
use crate::{EvalError, EvalResult, Value};

const PROMPT_INT: &str = "read (int): ";
const PROMPT_REAL: &str = "read (real): ";
const PROMPT_BOOL: &str = "read (bool - 0 = false, 1 = true): ";
const PROMPT_STR: &str = "read (str): ";

pub struct Interpreter<'a> {
    strings: &'a mut StringTable,
    stack: OperandStack,
    memory: Memory,
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
}

impl Interpreter<'_> {
    /// Execute a checked program from a clean state.
    ///
    /// The operand stack and memory are reset first, so running the same tree
    /// twice with the same input produces the same output.
    #[tracing::instrument(level = "debug", skip_all, fields(root = %root.id()))]
    pub fn run(&mut self, root: &Node) -> EvalResult {
        self.stack.clear();
        self.memory.reset();
        self.exec(root)?;
        tracing::debug!(leftover = self.stack.len(), "run finished");
        Ok(())
    }

    /// Output captured by a buffer print handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Current content of a variable slot; `None` until first stored.
    pub fn load(&self, slot: VarSlot) -> EvalResult<Option<Value>> {
        self.memory.load(slot)
    }

    fn exec(&mut self, node: &Node) -> EvalResult {
        ensure_sufficient_stack(|| self.exec_inner(node))
    }

    fn exec_inner(&mut self, node: &Node) -> EvalResult {
        tracing::trace!(id = %node.id(), kind = %node.kind(), line = node.line(), "exec");
        match node.kind() {
            NodeKind::Program => {
                node.check_arity(2, 2)?;
                self.exec_children(node)
            }
            NodeKind::VarDeclList | NodeKind::StmtList => self.exec_children(node),
            NodeKind::VarDecl => Ok(()),
            NodeKind::If => {
                node.check_arity(2, 3)?;
                self.exec(node.child(0)?)?;
                if self.stack.pop_bool()? {
                    self.exec(node.child(1)?)
                } else if let Some(else_branch) = node.children().get(2) {
                    self.exec(else_branch)
                } else {
                    Ok(())
                }
            }
            NodeKind::Repeat => {
                node.check_arity(2, 2)?;
                let (body, cond) = (node.child(0)?, node.child(1)?);
                loop {
                    self.exec(body)?;
                    self.exec(cond)?;
                    if !self.stack.pop_bool()? {
                        return Ok(());
                    }
                }
            }
            NodeKind::Read => {
                node.check_arity(1, 1)?;
                self.read(node.child(0)?)
            }
            NodeKind::Write => {
                node.check_arity(1, 1)?;
                let expr = node.child(0)?;
                self.exec(expr)?;
                let value = self.stack.pop_as(expr.ty())?;
                self.write(value)
            }
            NodeKind::Assign => {
                node.check_arity(2, 2)?;
                let target = variable(node.child(0)?)?;
                let expr = node.child(1)?;
                self.exec(expr)?;
                let value = self.stack.pop_as(target.ty())?;
                self.memory.store(target.slot()?, value)
            }
            NodeKind::LessThan
            | NodeKind::Equal
            | NodeKind::Plus
            | NodeKind::Minus
            | NodeKind::Times
            | NodeKind::Divide => self.binary(node),
            NodeKind::VarUse => {
                let value = match self.memory.load(node.slot()?)? {
                    Some(value) => value,
                    None => self.zero(node)?,
                };
                self.stack.push(value)
            }
            NodeKind::BoolVal | NodeKind::IntVal | NodeKind::RealVal | NodeKind::StrVal => {
                let value = literal(node)?;
                self.stack.push(value)
            }
            NodeKind::Coerce(coercion) => {
                node.check_arity(1, 1)?;
                self.exec(node.child(0)?)?;
                let operand = self.stack.pop()?;
                let value = coerce(coercion, operand, self.strings)?;
                self.stack.push(value)
            }
        }
    }

    fn exec_children(&mut self, node: &Node) -> EvalResult {
        for child in node.children() {
            self.exec(child)?;
        }
        Ok(())
    }

    fn binary(&mut self, node: &Node) -> EvalResult {
        let Some(op) = node.kind().operator() else {
            return Err(unresolved(node.kind(), node.ty(), node.line()));
        };
        if !node.ty().is_value() {
            return Err(unresolved(node.kind(), node.ty(), node.line()));
        }
        node.check_arity(2, 2)?;
        let (left, right) = (node.child(0)?, node.child(1)?);

        self.exec(right)?;
        self.exec(left)?;
        let l = self.stack.pop_as(left.ty())?;
        let r = self.stack.pop_as(right.ty())?;

        let result = evaluate_binary(op, l, r, self.strings, node.line())?;
        self.stack.push(result)
    }

    fn read(&mut self, target: &Node) -> EvalResult {
        let target = variable(target)?;
        let value = match target.ty() {
            Type::Int => {
                self.print_handler.print(PROMPT_INT)?;
                let token = self.next_token(Type::Int)?;
                let i = token.parse().map_err(|_| invalid_input(Type::Int, &token))?;
                Value::Int(i)
            }
            Type::Real => {
                self.print_handler.print(PROMPT_REAL)?;
                let token = self.next_token(Type::Real)?;
                let r = token
                    .parse()
                    .map_err(|_| invalid_input(Type::Real, &token))?;
                Value::Real(r)
            }
            Type::Bool => loop {
                self.print_handler.print(PROMPT_BOOL)?;
                match self.next_token(Type::Bool)?.parse::<i32>() {
                    Ok(0) => break Value::Bool(false),
                    Ok(1) => break Value::Bool(true),
                    _ => {}
                }
            },
            Type::Str => {
                self.print_handler.print(PROMPT_STR)?;
                let token = self.next_token(Type::Str)?;
                Value::Str(self.strings.intern_owned(token))
            }
            ty @ (Type::NoType | Type::Error) => {
                return Err(unresolved(target.kind(), ty, target.line()))
            }
        };
        tracing::debug!(slot = %target.slot()?, %value, "read");
        self.memory.store(target.slot()?, value)
    }

    fn next_token(&self, expected: Type) -> EvalResult<String> {
        self.input_handler
            .next_token()?
            .ok_or(EvalError::InputExhausted { expected })
    }

    fn write(&mut self, value: Value) -> EvalResult {
        match value {
            Value::Bool(b) => self.print_handler.println(format_bool(b))?,
            Value::Int(i) => self.print_handler.println(&i.to_string())?,
            Value::Real(r) => self.print_handler.println(&format_real(r))?,
            Value::Str(h) => {
                let text = unescape(resolve(self.strings, h)?);
                self.print_handler.print(&text)?;
            }
        }
        Ok(())
    }

    /// Value of a variable that was never stored to.
    fn zero(&mut self, var: &Node) -> EvalResult<Value> {
        Ok(match var.ty() {
            Type::Bool => Value::Bool(false),
            Type::Int => Value::Int(0),
            Type::Real => Value::Real(0.0),
            Type::Str => Value::Str(self.strings.intern("")),
            ty @ (Type::NoType | Type::Error) => {
                return Err(unresolved(var.kind(), ty, var.line()))
            }
        })
    }
}

/// `node`, if it is a variable use.
fn variable(node: &Node) -> Result<&Node, AstError> {
    if node.kind() == NodeKind::VarUse {
        Ok(node)
    } else {
        Err(AstError::UnexpectedKind {
            expected: "variable",
            found: node.kind(),
            line: node.line(),
        })
    }
}

fn literal(node: &Node) -> EvalResult<Value> {
    match (node.kind(), node.payload()) {
        (NodeKind::BoolVal, Payload::Bool(b)) => Ok(Value::Bool(b)),
        (NodeKind::IntVal, Payload::Int(i)) => Ok(Value::Int(i)),
        (NodeKind::RealVal, Payload::Real(r)) => Ok(Value::Real(r)),
        (NodeKind::StrVal, Payload::Str(h)) => Ok(Value::Str(h)),
        (kind, _) => Err(EvalError::InvalidLiteral {
            kind,
            line: node.line(),
        }),
    }
}

fn invalid_input(expected: Type, token: &str) -> EvalError {
    EvalError::InvalidInput {
        expected,
        token: token.to_owned(),
    }
}
