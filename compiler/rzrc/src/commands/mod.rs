//! Command handlers for the rzrc CLI.
//!
//! `render_*` functions are pure and return the generated text; `run_*`
//! functions read input, print the result, and exit on failure.

use std::io::Read;

use rzr_codegen::{
    CodeWriter, CodeWriterOptions, CodegenError, NewLine, SourceLocation, SourceSpan,
};

/// Writer configuration and positional arguments split out of a command's
/// argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    pub options: CodeWriterOptions,
    pub positional: Vec<String>,
}

/// Parse `--crlf`, `--indent=<n>`, and `--tabs`; everything not starting
/// with `-` is positional.
///
/// Options are validated as a whole once all flags are seen.
pub fn parse_command_args(args: &[String]) -> Result<CommandArgs, String> {
    let mut options = CodeWriterOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if arg == "--crlf" {
            options.new_line = NewLine::CrLf;
        } else if arg == "--tabs" {
            options.indent_with_tabs = true;
        } else if let Some(value) = arg.strip_prefix("--indent=") {
            options.indent_size = value
                .parse()
                .map_err(|_| format!("invalid indent size '{value}'"))?;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.clone());
        }
    }

    options.validate().map_err(|e| e.to_string())?;
    Ok(CommandArgs {
        options,
        positional,
    })
}

/// Parse a 1-based line number.
pub fn parse_line_number(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(line) if line > 0 => Ok(line),
        _ => Err(format!("invalid line number '{value}' (expected 1 or more)")),
    }
}

/// Encode `text` as a C# string literal using a writer with `options`.
pub fn render_literal(text: &str, options: CodeWriterOptions) -> Result<String, CodegenError> {
    let mut writer = CodeWriter::with_options(options)?;
    writer.write_string_literal(text);
    Ok(writer.into_string())
}

/// Wrap `text` in a `#line` region attributed to `file_path` at the 1-based
/// `line_number`.
pub fn render_pragma(
    text: &str,
    file_path: &str,
    line_number: usize,
    options: CodeWriterOptions,
) -> Result<String, CodegenError> {
    if file_path.is_empty() {
        return Err(CodegenError::EmptyArgument {
            argument: "file_path",
        });
    }
    let start = SourceLocation::new(0, line_number.saturating_sub(1), 0);
    let span = SourceSpan::from_location(
        Some(file_path.to_owned()),
        start,
        text.chars().count(),
    );
    let mut writer = CodeWriter::with_options(options)?;
    {
        let mut pragma = writer.build_line_pragma(&span);
        pragma.write(text);
    }
    tracing::debug!(file_path, line_number, location = %writer.location(), "pragma rendered");
    Ok(writer.into_string())
}

/// Read `path`, or stdin when `path` is absent or `-`.
///
/// Exits with a message on failure.
pub fn read_input(path: Option<&str>) -> String {
    let result = match path {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
        }
        Some(path) => std::fs::read_to_string(path),
    };
    match result {
        Ok(content) => content,
        Err(e) => {
            let name = path.unwrap_or("<stdin>");
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{name}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{name}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{name}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{name}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// `rzrc literal [<file>]`
pub fn run_literal(args: &CommandArgs) {
    let text = read_input(args.positional.first().map(String::as_str));
    match render_literal(&text, args.options) {
        Ok(literal) => println!("{literal}"),
        Err(e) => exit_with(&e),
    }
}

/// `rzrc pragma <path> <line> [<file>]`
pub fn run_pragma(args: &CommandArgs) {
    let [file_path, line, rest @ ..] = args.positional.as_slice() else {
        eprintln!("Usage: rzrc pragma <path> <line> [<file>]");
        std::process::exit(1);
    };
    let line_number = match parse_line_number(line) {
        Ok(line_number) => line_number,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };
    let text = read_input(rest.first().map(String::as_str));
    match render_pragma(&text, file_path, line_number, args.options) {
        Ok(output) => print!("{output}"),
        Err(e) => exit_with(&e),
    }
}

fn exit_with(error: &CodegenError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}
