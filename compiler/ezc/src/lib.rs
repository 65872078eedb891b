//! EZ driver library.
//!
//! Loads programs from JSON, checks them with `ez_types` and runs them with
//! `ez_eval`. The `ezc` binary is a thin argument parser over [`commands`].

pub mod commands;
mod program_file;
mod tracing_setup;

pub use commands::{check_source, dot_source, dump_source, run_source, CheckedProgram, CommandError};
pub use program_file::{parse_program, read_source, LiteralSpec, LoadError, NodeSpec, Program};
pub use tracing_setup::{init_tracing, LOG_ENV};
