//! `InterpreterBuilder` for configuring an [`Interpreter`].

use ez_ir::StringTable;

use super::Interpreter;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::memory::Memory;
use crate::operand_stack::OperandStack;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Operand stack depth used unless configured otherwise.
pub const DEFAULT_STACK_CAPACITY: usize = 100;

/// Number of variable slots used unless configured otherwise.
pub const DEFAULT_MEMORY_CAPACITY: usize = 100;

/// Builder for creating Interpreter instances.
///
/// The string table is borrowed mutably for the interpreter's lifetime:
/// string concatenation, coercion to string and `read` of a string all
/// intern new entries.
pub struct InterpreterBuilder<'a> {
    strings: &'a mut StringTable,
    stack_capacity: usize,
    memory_capacity: usize,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(strings: &'a mut StringTable) -> Self {
        Self {
            strings,
            stack_capacity: DEFAULT_STACK_CAPACITY,
            memory_capacity: DEFAULT_MEMORY_CAPACITY,
            print_handler: None,
            input_handler: None,
        }
    }

    #[must_use]
    pub fn stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }

    #[must_use]
    pub fn memory_capacity(mut self, capacity: usize) -> Self {
        self.memory_capacity = capacity;
        self
    }

    /// Set where `write` output and read prompts go. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set where `read` takes input from. Default is stdin.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            strings: self.strings,
            stack: OperandStack::with_capacity(self.stack_capacity),
            memory: Memory::with_capacity(self.memory_capacity),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
        }
    }
}
