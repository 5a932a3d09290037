//! rzrc CLI
//!
//! Emits C# string literals and `#line` regions from text input.

use rzrc::commands::{parse_command_args, run_literal, run_pragma};

fn main() {
    rzrc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let parsed = match parse_command_args(&args[2..]) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    match command.as_str() {
        "literal" => run_literal(&parsed),
        "pragma" => {
            if parsed.positional.len() < 2 {
                eprintln!("Usage: rzrc pragma <path> <line> [<file>] [options]");
                eprintln!();
                eprintln!("Wraps the input in a #line region mapped to <path> at <line>.");
                std::process::exit(1);
            }
            run_pragma(&parsed);
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("rzrc - C# code writer tools");
    println!();
    println!("Usage: rzrc <command> [args] [options]");
    println!();
    println!("Commands:");
    println!("  literal [<file>]               Print the input as a C# string literal");
    println!("  pragma <path> <line> [<file>]  Wrap the input in a #line region");
    println!("  help                           Show this message");
    println!();
    println!("Input is read from stdin when <file> is omitted or '-'.");
    println!();
    println!("Options:");
    println!("  --crlf          Use \\r\\n line endings");
    println!("  --indent=<n>    Indent step in columns (default: 4)");
    println!("  --tabs          Indent with tabs");
    println!();
    println!("Set RUST_LOG=rzr_codegen=trace to log writer decisions to stderr.");
}
