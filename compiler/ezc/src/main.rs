//! EZ interpreter CLI.

use std::path::Path;

use ez_eval::{stdin_handler, stdout_handler};
use ez_types::SemanticError;
use ezc::{check_source, dot_source, dump_source, init_tracing, read_source, run_source};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let path = require_path(&args, "run");
            let text = read_or_exit(path);
            if let Err(err) = run_source(&text, stdout_handler(), stdin_handler()) {
                fail(&err);
            }
        }
        "check" => {
            let path = require_path(&args, "check");
            let text = read_or_exit(path);
            match check_source(&text) {
                Ok(program) => println!("{path}: ok ({} variables)", program.vars.len()),
                Err(err) => fail(&err),
            }
        }
        "dump" => {
            let path = require_path(&args, "dump");
            let text = read_or_exit(path);
            match dump_source(&text) {
                Ok((dump, errors)) => {
                    print!("{dump}");
                    exit_on_semantic_errors(&errors);
                }
                Err(err) => fail(&err),
            }
        }
        "dot" => {
            let mut output = None;
            let mut file_path = None;
            let mut i = 2;
            while i < args.len() {
                if args[i] == "-o" && i + 1 < args.len() {
                    output = Some(args[i + 1].as_str());
                    i += 2;
                } else {
                    if !args[i].starts_with('-') && file_path.is_none() {
                        file_path = Some(args[i].as_str());
                    }
                    i += 1;
                }
            }
            let Some(path) = file_path else {
                eprintln!("Usage: ezc dot <program.json> [-o <file.dot>]");
                std::process::exit(1);
            };

            let text = read_or_exit(path);
            match dot_source(&text) {
                Ok((graph, errors)) => {
                    match output {
                        Some(out) => {
                            if let Err(err) = std::fs::write(out, graph) {
                                eprintln!("error: cannot write '{out}': {err}");
                                std::process::exit(1);
                            }
                        }
                        None => print!("{graph}"),
                    }
                    exit_on_semantic_errors(&errors);
                }
                Err(err) => fail(&err),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("ezc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare program file runs it.
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                let text = read_or_exit(command);
                if let Err(err) = run_source(&text, stdout_handler(), stdin_handler()) {
                    fail(&err);
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn require_path<'a>(args: &'a [String], command: &str) -> &'a str {
    let Some(path) = args.get(2) else {
        eprintln!("Usage: ezc {command} <program.json>");
        std::process::exit(1);
    };
    path
}

fn read_or_exit(path: &str) -> String {
    read_source(Path::new(path)).unwrap_or_else(|err| fail(&err))
}

fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}

fn exit_on_semantic_errors(errors: &[SemanticError]) {
    if errors.is_empty() {
        return;
    }
    for err in errors {
        eprintln!("{err}");
    }
    std::process::exit(1);
}

fn print_usage() {
    println!("EZ interpreter");
    println!();
    println!("Usage: ezc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <program.json>         Check and run a program");
    println!("  check <program.json>       Check a program without running it");
    println!("  dump <program.json>        Print the checked tree and its tables");
    println!("  dot <program.json> [-o f]  Print the checked tree as a Graphviz digraph");
    println!("  help                       Show this help message");
    println!("  version                    Show version information");
    println!();
    println!("A program file given without a command is run.");
    println!();
    println!("Environment:");
    println!("  EZ_LOG    Log filter (falls back to RUST_LOG), e.g. EZ_LOG=ez_eval=trace");
}
