//! EZ Eval - tree-walking interpreter.
//!
//! # Architecture
//!
//! - `Interpreter`: recursive dispatch on node kind, built by `InterpreterBuilder`
//! - `OperandStack`: bounded stack of intermediate `Value`s
//! - `Memory`: flat variable storage addressed by `VarSlot`
//! - `evaluate_binary` / `coerce`: operator semantics on runtime values
//! - print and input handlers: enum-dispatched I/O endpoints, stdout/stdin
//!   for the CLI and in-memory buffers for tests

pub mod errors;
mod format;
pub mod interpreter;
mod input_handler;
mod memory;
mod operand_stack;
mod operators;
mod print_handler;
mod value;

pub use errors::{EvalError, EvalResult};
pub use format::{format_real, unescape};
pub use input_handler::{
    scripted_input, stdin_handler, BufferInputHandler, InputHandlerImpl, SharedInputHandler,
    StdinInputHandler,
};
pub use interpreter::{
    Interpreter, InterpreterBuilder, DEFAULT_MEMORY_CAPACITY, DEFAULT_STACK_CAPACITY,
};
pub use memory::Memory;
pub use operand_stack::OperandStack;
pub use operators::{coerce, evaluate_binary};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::Value;
