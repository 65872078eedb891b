//! The `ezc` subcommands as library functions.
//!
//! Each command returns its output instead of printing it, so `main` owns all
//! process-level concerns (stdout, stderr, exit codes) and tests can call the
//! commands directly.

use std::fmt::{self, Write as _};

use ez_eval::{EvalError, InterpreterBuilder, SharedInputHandler, SharedPrintHandler};
use ez_ir::{DotGraph, Node, StringTable, TreeDump, VarTable};
use ez_types::{check_program, SemanticError};

use crate::program_file::{parse_program, LoadError, Program};

/// A program that passed the checker and is ready to run.
#[derive(Debug)]
pub struct CheckedProgram {
    pub root: Node,
    pub strings: StringTable,
    pub vars: VarTable,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{}", SemanticErrors(.0))]
    Semantic(Vec<SemanticError>),

    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
}

/// One diagnostic per line.
struct SemanticErrors<'a>(&'a [SemanticError]);

impl fmt::Display for SemanticErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

/// Load and check program text.
pub fn check_source(text: &str) -> Result<CheckedProgram, CommandError> {
    let Program { mut root, strings } = parse_program(text)?;
    let mut vars = VarTable::new();
    check_program(&mut root, &mut vars).map_err(CommandError::Semantic)?;
    Ok(CheckedProgram {
        root,
        strings,
        vars,
    })
}

/// Load, check and run program text with the given I/O endpoints.
pub fn run_source(
    text: &str,
    print: SharedPrintHandler,
    input: SharedInputHandler,
) -> Result<(), CommandError> {
    let mut program = check_source(text)?;
    let mut interpreter = InterpreterBuilder::new(&mut program.strings)
        .print_handler(print)
        .input_handler(input)
        .build();
    interpreter.run(&program.root)?;
    Ok(())
}

/// Tree dump followed by the string and variable tables.
///
/// The tree is dumped as far as checking got: when the checker reports
/// errors the dump is still produced, with `err_type` on the failing nodes,
/// and the errors are returned alongside it.
pub fn dump_source(text: &str) -> Result<(String, Vec<SemanticError>), CommandError> {
    let Program { mut root, strings } = parse_program(text)?;
    let mut vars = VarTable::new();
    let errors = check_program(&mut root, &mut vars)
        .err()
        .unwrap_or_default();

    let mut out = TreeDump(&root).to_string();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{strings}");
    let _ = write!(out, "{vars}");
    Ok((out, errors))
}

/// Graphviz rendering of the checked tree, coercion nodes included.
pub fn dot_source(text: &str) -> Result<(String, Vec<SemanticError>), CommandError> {
    let Program { mut root, .. } = parse_program(text)?;
    let mut vars = VarTable::new();
    let errors = check_program(&mut root, &mut vars)
        .err()
        .unwrap_or_default();
    Ok((DotGraph(&root).to_string(), errors))
}
