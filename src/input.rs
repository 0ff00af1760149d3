//! Input specifiers: named files or standard input

use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Argument that stands for standard input
pub const STDIN_SENTINEL: &str = "-";

/// One entry of the work list, in argument order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    Stdin,
    Path(PathBuf),
}

impl InputSpec {
    /// Classify a command line operand
    pub fn from_arg<S: AsRef<OsStr>>(arg: S) -> Self {
        let arg = arg.as_ref();
        if arg == STDIN_SENTINEL {
            InputSpec::Stdin
        } else {
            InputSpec::Path(PathBuf::from(arg))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSpec::Stdin => None,
            InputSpec::Path(path) => Some(path),
        }
    }

    /// Name used when attributing diagnostics to this input
    pub fn display_name(&self) -> String {
        self.to_string()
    }

    /// Open the source for reading.
    ///
    /// The returned handle owns the file and closes it on drop. For stdin it
    /// wraps the process-wide handle, whose descriptor stays open.
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self {
            InputSpec::Stdin => Ok(Box::new(io::stdin())),
            InputSpec::Path(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}

impl fmt::Display for InputSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSpec::Stdin => f.write_str(STDIN_SENTINEL),
            InputSpec::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
