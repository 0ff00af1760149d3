//! Command line parsing for the cat utility
//!
//! Flags are single characters and may be clustered (`-nET`). A lone `-`
//! is always an operand naming standard input, and `--` ends option
//! parsing. The clap [`Command`] returned by [`usage_command`] only
//! describes that surface for the usage text.

use crate::config::{CatConfig, CatConfigBuilder};
use crate::error::{CatError, CatResult};
use crate::input::{InputSpec, STDIN_SENTINEL};
use crate::PROGRAM_NAME;
use clap::{Arg, ArgAction, Command};
use std::ffi::OsStr;

/// Marker that ends option parsing
pub const END_OF_OPTIONS: &str = "--";

/// Parsed command line: options plus the ordered work list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatArgs {
    pub config: CatConfig,
    pub inputs: Vec<InputSpec>,
}

/// Parse the arguments that follow the program name.
///
/// With no operands the work list is a single stdin entry.
pub fn parse_args<I, S>(args: I) -> CatResult<CatArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut builder = CatConfigBuilder::new();
    let mut inputs = Vec::new();
    let mut options_done = false;

    for arg in args {
        let arg = arg.as_ref();

        if !options_done {
            if arg == END_OF_OPTIONS {
                options_done = true;
                continue;
            }

            let text = arg.to_string_lossy();
            if text != STDIN_SENTINEL && text.starts_with('-') {
                for flag in text.chars().skip(1) {
                    builder = apply_flag(builder, flag)?;
                }
                continue;
            }
        }

        inputs.push(InputSpec::from_arg(arg));
    }

    if inputs.is_empty() {
        inputs.push(InputSpec::Stdin);
    }

    Ok(CatArgs {
        config: builder.build(),
        inputs,
    })
}

fn apply_flag(builder: CatConfigBuilder, flag: char) -> CatResult<CatConfigBuilder> {
    let builder = match flag {
        'n' => builder.number_lines(),
        'b' => builder.number_non_blank(),
        'E' => builder.show_ends(),
        'T' => builder.show_tabs(),
        's' => builder.squeeze_blanks(),
        'h' => return Err(CatError::HelpRequested),
        other => return Err(CatError::invalid_option(other)),
    };
    Ok(builder)
}

/// Description of the command line surface, used to render usage
pub fn usage_command() -> Command {
    Command::new(PROGRAM_NAME)
        .override_usage(format!("{PROGRAM_NAME} [OPTION]... [FILE]..."))
        .about("Concatenate FILE(s) to standard output.")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(Arg::new("files")
            .help("Files to concatenate; '-' reads standard input")
            .num_args(0..)
            .value_name("FILE"))
        .arg(Arg::new("number")
            .short('n')
            .help("Number all output lines")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("number-nonblank")
            .short('b')
            .help("Number non-empty output lines, overrides -n")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("show-ends")
            .short('E')
            .help("Display $ at end of each line")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("show-tabs")
            .short('T')
            .help("Display TAB characters as ^I")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("squeeze-blank")
            .short('s')
            .help("Suppress repeated empty output lines")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("help")
            .short('h')
            .help("Display this help and exit")
            .action(ArgAction::Help))
        .after_help(
            "Use -- to end option parsing; remaining arguments are files.\n\
             With no FILE, or when FILE is -, read standard input.",
        )
}

/// Rendered usage text
pub fn usage_text() -> String {
    usage_command().render_help().to_string()
}
