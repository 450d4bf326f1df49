//! Command-line arguments.
//!
//! `amsl <command> <file> [-o <out>]`, parsed by hand into [`Options`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Extension of IR files written by `emit`.
pub const IR_EXTENSION: &str = "amslc";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Lex,
    Parse,
    Resolve,
    Emit,
    Exec,
    Run,
    Builtins,
    Help,
    Version,
}

impl Command {
    pub fn from_arg(arg: &str) -> Option<Command> {
        Some(match arg {
            "lex" => Command::Lex,
            "parse" => Command::Parse,
            "resolve" => Command::Resolve,
            "emit" => Command::Emit,
            "exec" => Command::Exec,
            "run" => Command::Run,
            "builtins" => Command::Builtins,
            "help" | "--help" | "-h" => Command::Help,
            "version" | "--version" | "-V" => Command::Version,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Lex => "lex",
            Command::Parse => "parse",
            Command::Resolve => "resolve",
            Command::Emit => "emit",
            Command::Exec => "exec",
            Command::Run => "run",
            Command::Builtins => "builtins",
            Command::Help => "help",
            Command::Version => "version",
        }
    }

    fn takes_input(self) -> bool {
        !matches!(self, Command::Builtins | Command::Help | Command::Version)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    pub command: Command,
    pub input: Option<PathBuf>,
    /// `-o`, only accepted by `emit`.
    pub output: Option<PathBuf>,
}

impl Options {
    /// Where `emit` writes: `-o` if given, else next to the input.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output
            .clone()
            .or_else(|| self.input.as_deref().map(default_output))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` needs a file")]
    MissingInput(Command),
    #[error("`-o` needs a path")]
    MissingOutputPath,
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Options, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let first = args.next().ok_or(UsageError::MissingCommand)?;
    let command = Command::from_arg(&first).ok_or(UsageError::UnknownCommand(first))?;

    let mut options = Options {
        command,
        input: None,
        output: None,
    };
    while let Some(arg) = args.next() {
        if arg == "-o" && command == Command::Emit {
            let path = args.next().ok_or(UsageError::MissingOutputPath)?;
            options.output = Some(PathBuf::from(path));
        } else if command.takes_input() && options.input.is_none() && !arg.starts_with('-') {
            options.input = Some(PathBuf::from(arg));
        } else {
            return Err(UsageError::UnexpectedArgument(arg));
        }
    }

    if command.takes_input() && options.input.is_none() {
        return Err(UsageError::MissingInput(command));
    }
    Ok(options)
}

/// `prog.amsl` becomes `prog.amslc`; a name without extension gets one.
pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension(IR_EXTENSION)
}

pub fn usage() -> String {
    format!(
        "\
AMSL compiler {version}

Usage: amsl <command> <file> [options]

Commands:
  lex <file>              Print the token stream
  parse <file>            Print the syntax tree
  resolve <file>          Print the tree with variables resolved to slots
  emit <file> [-o <out>]  Write the binary IR (default: <file>.amslc)
  exec <file.amslc>       Run a binary IR file
  run <file>              Compile and run a source file
  builtins                List the functions callable as `@name(...)`
  help                    Show this message
  version                 Show the version

Set RUST_LOG (e.g. RUST_LOG=debug) to trace the pipeline on stderr.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
