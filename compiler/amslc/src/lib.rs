//! AMSL compiler driver.
//!
//! [`compile`] runs the front half (lex, parse, resolve), [`emit`] adds IR
//! encoding, and [`run_source`] takes a program all the way through the
//! binary IR and into the executor. The `amsl` binary wraps these in the
//! [`commands`].

pub mod cli;
pub mod commands;
mod pipeline;

pub use pipeline::{compile, emit, run_bytes, run_source, PipelineError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber writing to stderr.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=amsl_eval=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
