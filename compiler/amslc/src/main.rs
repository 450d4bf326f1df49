//! AMSL compiler CLI.

use amslc::cli::{parse_args, usage, Command};
use amslc::commands::{
    emit_file, exec_file, lex_file, list_builtins, parse_file, resolve_file, run_file,
};

fn main() {
    amslc::init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprint!("{}", usage());
            std::process::exit(1);
        }
    };

    let Some(input) = options.input.as_deref() else {
        match options.command {
            Command::Version => println!("amsl {}", env!("CARGO_PKG_VERSION")),
            Command::Builtins => list_builtins(),
            _ => print!("{}", usage()),
        }
        return;
    };

    match options.command {
        Command::Lex => lex_file(input),
        Command::Parse => parse_file(input),
        Command::Resolve => resolve_file(input),
        Command::Emit => {
            let output = options
                .output_path()
                .unwrap_or_else(|| amslc::cli::default_output(input));
            emit_file(input, &output);
        }
        Command::Exec => exec_file(input),
        Command::Run => run_file(input),
        Command::Builtins | Command::Help | Command::Version => print!("{}", usage()),
    }
}
