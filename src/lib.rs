//! cat implementation in Rust
//!
//! Concatenates files or standard input to standard output, optionally
//! numbering lines, marking tabs and line ends, and squeezing runs of blank
//! lines. Numbering and blank-run state carry over from one input to the
//! next.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;
pub mod args;
pub mod input;
pub mod access;
pub mod transform;

// Re-export commonly used types
pub use error::{CatError, CatResult};
pub use config::{CatConfig, CatConfigBuilder};
pub use input::InputSpec;
pub use transform::{LineTransformer, RunState};

use error::CatContext;
use std::io::{self, BufReader, BufWriter, Write};
use tracing::{debug, warn};

/// Name used in diagnostics and usage text
pub const PROGRAM_NAME: &str = "mycat";

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Drives the access check and the transformer over a work list
pub struct Cat {
    transformer: LineTransformer,
}

impl Cat {
    pub fn new(config: CatConfig) -> Self {
        Self {
            transformer: LineTransformer::new(config),
        }
    }

    pub fn state(&self) -> RunState {
        self.transformer.state()
    }

    /// Process every input in order, writing content to `out` and
    /// per-input diagnostics to `diagnostics`.
    ///
    /// A failing input is reported and skipped; the returned exit code is
    /// non-zero if any input failed. Only a failure to write `out` ends the
    /// run early.
    pub fn run<W, E>(
        &mut self,
        inputs: &[InputSpec],
        out: &mut W,
        diagnostics: &mut E,
    ) -> CatResult<i32>
    where
        W: Write,
        E: Write,
    {
        let mut had_errors = false;

        for input in inputs {
            match self.process_input(input, out) {
                Ok(lines) => debug!(input = %input, lines, "input done"),
                Err(err) if err.is_isolated() => {
                    warn!(input = %input, error = ?err, "input failed");
                    // stderr failures are ignored, as eprintln! users expect
                    writeln!(diagnostics, "{PROGRAM_NAME}: {err}").ok();
                    had_errors = true;
                }
                Err(err) => return Err(err),
            }
        }

        out.flush().map_err(CatError::Write)?;

        let state = self.state();
        debug!(next_line = state.line_number, had_errors, "run finished");
        Ok(if had_errors { EXIT_FAILURE } else { EXIT_SUCCESS })
    }

    fn process_input<W: Write>(&mut self, input: &InputSpec, out: &mut W) -> CatResult<u64> {
        access::check_access(input)?;

        let name = input.display_name();
        debug!(input = %name, "opening input");
        let source = input.open().with_open_context(&name)?;
        let mut reader = BufReader::new(source);

        self.transformer.transform(&mut reader, out, &name)
    }
}

/// Main cat function: stream `inputs` to standard output
pub fn cat(config: &CatConfig, inputs: &[InputSpec]) -> CatResult<i32> {
    debug!(?config, inputs = inputs.len(), "starting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut diagnostics = stderr.lock();

    Cat::new(*config).run(inputs, &mut out, &mut diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct Outcome {
        code: i32,
        stdout: String,
        stderr: String,
    }

    fn run_cat(config: CatConfig, inputs: &[InputSpec]) -> Outcome {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = Cat::new(config)
            .run(inputs, &mut out, &mut err)
            .expect("Failed to run cat");
        Outcome {
            code,
            stdout: String::from_utf8(out).expect("stdout is utf-8"),
            stderr: String::from_utf8(err).expect("stderr is utf-8"),
        }
    }

    fn spec(path: &Path) -> InputSpec {
        InputSpec::Path(path.to_path_buf())
    }

    #[test]
    fn test_concatenates_in_order() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "alpha\n")?;
        fs::write(&b, "beta\ngamma")?;

        let outcome = run_cat(CatConfig::default(), &[spec(&b), spec(&a), spec(&b)]);
        assert_eq!(outcome.code, EXIT_SUCCESS);
        assert_eq!(outcome.stdout, "beta\ngamma\nalpha\nbeta\ngamma\n");
        assert!(outcome.stderr.is_empty());
        Ok(())
    }

    #[test]
    fn test_numbering_continues_across_files() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "one\ntwo\n")?;
        fs::write(&b, "three\n")?;

        let config = CatConfigBuilder::new().number_lines().build();
        let outcome = run_cat(config, &[spec(&a), spec(&b)]);
        assert_eq!(outcome.stdout, "     1 one\n     2 two\n     3 three\n");
        Ok(())
    }

    #[test]
    fn test_squeeze_across_file_boundary() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "end\n\n")?;
        fs::write(&b, "\nstart\n")?;

        let config = CatConfigBuilder::new().squeeze_blanks().build();
        let outcome = run_cat(config, &[spec(&a), spec(&b)]);
        assert_eq!(outcome.stdout, "end\n\nstart\n");
        Ok(())
    }

    #[test]
    fn test_directory_is_skipped() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("f.txt");
        fs::write(&file, "kept\n")?;
        let dir = spec(temp_dir.path());

        let outcome = run_cat(CatConfig::default(), &[dir.clone(), spec(&file)]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert_eq!(outcome.stdout, "kept\n");
        assert_eq!(
            outcome.stderr,
            format!("mycat: {}: Is a directory\n", dir.display_name())
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_does_not_stop_run() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("missing.txt");
        let present = temp_dir.path().join("present.txt");
        fs::write(&present, "here\n")?;

        let config = CatConfigBuilder::new().number_lines().build();
        let outcome = run_cat(config, &[spec(&missing), spec(&present), spec(&missing)]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert_eq!(outcome.stdout, "     1 here\n");

        let expected = format!(
            "mycat: {}: No such file or directory\n",
            missing.display()
        );
        assert_eq!(outcome.stderr, expected.repeat(2));
        Ok(())
    }

    #[test]
    fn test_non_blank_numbering_end_to_end() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("f.txt");
        fs::write(&file, "a\n\n\tb\n")?;

        let args = args::parse_args([OsStr::new("-n"), OsStr::new("-bT"), file.as_os_str()])
            .expect("Failed to parse test arguments");
        let outcome = run_cat(args.config, &args.inputs);
        assert_eq!(outcome.stdout, "     1 a\n\n     2 ^Ib\n");
        Ok(())
    }

    #[test]
    fn test_empty_work_list() {
        let outcome = run_cat(CatConfig::default(), &[]);
        assert_eq!(outcome.code, EXIT_SUCCESS);
        assert!(outcome.stdout.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_does_not_stop_run() -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        // SAFETY: geteuid has no preconditions
        if unsafe { libc::geteuid() } == 0 {
            return Ok(());
        }

        let temp_dir = TempDir::new()?;
        let secret = temp_dir.path().join("secret.txt");
        let open = temp_dir.path().join("open.txt");
        fs::write(&secret, "hidden\n")?;
        fs::set_permissions(&secret, fs::Permissions::from_mode(0o000))?;
        fs::write(&open, "visible\n")?;

        let outcome = run_cat(CatConfig::default(), &[spec(&secret), spec(&open)]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert_eq!(outcome.stdout, "visible\n");
        assert_eq!(
            outcome.stderr,
            format!("mycat: {}: Permission denied\n", secret.display())
        );
        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_open_failure_after_access_check() -> io::Result<()> {
        use std::os::unix::net::UnixListener;

        // A socket passes the access check but cannot be opened for reading
        let temp_dir = TempDir::new()?;
        let socket = temp_dir.path().join("sock");
        let _listener = UnixListener::bind(&socket)?;
        let after = temp_dir.path().join("after.txt");
        fs::write(&after, "after\n")?;

        assert!(access::check_access(&spec(&socket)).is_ok());

        let config = CatConfigBuilder::new().number_lines().build();
        let outcome = run_cat(config, &[spec(&socket), spec(&after)]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert_eq!(outcome.stdout, "     1 after\n");
        assert_eq!(
            outcome.stderr,
            format!("mycat: {}: No such device or address\n", socket.display())
        );
        Ok(())
    }
}
