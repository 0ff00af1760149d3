//! Error handling for the cat utility

use std::io;
use thiserror::Error;

/// Custom error type for cat operations
#[derive(Error, Debug)]
pub enum CatError {
    #[error("invalid option -- '{option}'")]
    InvalidOption { option: char },

    #[error("help requested")]
    HelpRequested,

    #[error("{file}: {reason}")]
    Access { file: String, reason: String },

    #[error("{file}: Is a directory")]
    IsDirectory { file: String },

    #[error("{file}: {reason}")]
    Open { file: String, reason: String },

    #[error("{file}: Read error")]
    ReadFault {
        file: String,
        #[source]
        source: io::Error,
    },

    #[error("write error: {}", os_reason(.0))]
    Write(#[source] io::Error),
}

impl CatError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        crate::EXIT_FAILURE
    }

    /// Errors that only affect one input specifier; the run carries on
    pub fn is_isolated(&self) -> bool {
        matches!(
            self,
            CatError::Access { .. }
                | CatError::IsDirectory { .. }
                | CatError::Open { .. }
                | CatError::ReadFault { .. }
        )
    }

    /// Errors produced while parsing the command line
    pub fn is_usage(&self) -> bool {
        matches!(self, CatError::InvalidOption { .. } | CatError::HelpRequested)
    }

    /// Create an invalid option error
    pub fn invalid_option(option: char) -> Self {
        CatError::InvalidOption { option }
    }

    /// Create an access error from the underlying OS error
    pub fn access(file: &str, err: &io::Error) -> Self {
        CatError::Access {
            file: file.to_string(),
            reason: os_reason(err),
        }
    }

    /// Create an is directory error
    pub fn is_directory(file: &str) -> Self {
        CatError::IsDirectory {
            file: file.to_string(),
        }
    }

    /// Create an open error from the underlying OS error
    pub fn open(file: &str, err: &io::Error) -> Self {
        CatError::Open {
            file: file.to_string(),
            reason: os_reason(err),
        }
    }

    /// Create a read fault error
    pub fn read_fault(file: &str, source: io::Error) -> Self {
        CatError::ReadFault {
            file: file.to_string(),
            source,
        }
    }
}

/// OS error text without the ` (os error N)` suffix std appends
pub fn os_reason(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => {
            let suffix = format!(" (os error {code})");
            text.strip_suffix(&suffix).unwrap_or(&text).to_string()
        }
        None => text,
    }
}

/// Result type for cat operations
pub type CatResult<T> = Result<T, CatError>;

/// Context trait for attributing I/O errors to an input
pub trait CatContext<T> {
    fn with_access_context(self, filename: &str) -> CatResult<T>;

    fn with_open_context(self, filename: &str) -> CatResult<T>;

    fn with_read_context(self, filename: &str) -> CatResult<T>;
}

impl<T> CatContext<T> for Result<T, io::Error> {
    fn with_access_context(self, filename: &str) -> CatResult<T> {
        self.map_err(|io_err| CatError::access(filename, &io_err))
    }

    fn with_open_context(self, filename: &str) -> CatResult<T> {
        self.map_err(|io_err| CatError::open(filename, &io_err))
    }

    fn with_read_context(self, filename: &str) -> CatResult<T> {
        self.map_err(|io_err| CatError::read_fault(filename, io_err))
    }
}
