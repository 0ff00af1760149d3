//! cat implementation in Rust
//!
//! Concatenates files to standard output with optional line numbering,
//! tab and line-end markers, and blank-line squeezing.

use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

use mycat::{
    args::{parse_args, usage_text},
    cat,
    config::LOG_ENV_VAR,
    error::{CatError, CatResult},
    PROGRAM_NAME,
};

fn main() {
    init_logging();

    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprint!("{}", failure_message(&e));
            process::exit(e.exit_code());
        }
    }
}

fn run() -> CatResult<i32> {
    let args = parse_args(std::env::args_os().skip(1))?;
    cat(&args.config, &args.inputs)
}

/// Diagnostics stay quiet unless MYCAT_LOG asks for them
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Text written to stderr for an error that ends the run
fn failure_message(err: &CatError) -> String {
    let mut message = match err {
        CatError::HelpRequested => String::new(),
        CatError::InvalidOption { .. } => format!(
            "{PROGRAM_NAME}: {err}\nTry '{PROGRAM_NAME} -h' for more information.\n"
        ),
        _ => format!("{PROGRAM_NAME}: {err}\n"),
    };
    if err.is_usage() {
        message.push_str(&usage_text());
    }
    message
}
