//! Configuration management for cat operations

/// Environment variable holding the `tracing` filter directive
pub const LOG_ENV_VAR: &str = "MYCAT_LOG";

/// Width of the right-aligned line number field
pub const NUMBER_WIDTH: usize = 6;

/// Output options, fixed once the command line has been parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatConfig {
    /// Number all output lines (-n)
    pub number_lines: bool,
    /// Number non-empty output lines, overrides -n (-b)
    pub number_non_blank: bool,
    /// Append '$' at the end of each line (-E)
    pub show_ends: bool,
    /// Render tabs as ^I (-T)
    pub show_tabs: bool,
    /// Collapse runs of blank lines (-s)
    pub squeeze_blanks: bool,
}

impl CatConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// -b takes precedence over -n
    pub fn normalize(mut self) -> Self {
        if self.number_non_blank {
            self.number_lines = false;
        }
        self
    }

    /// Whether a line of the given blankness gets a number field
    pub fn numbers(&self, blank: bool) -> bool {
        self.number_lines || (self.number_non_blank && !blank)
    }
}

/// Builder pattern for creating configurations
#[derive(Debug, Default)]
pub struct CatConfigBuilder {
    config: CatConfig,
}

impl CatConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_lines(mut self) -> Self {
        self.config.number_lines = true;
        self
    }

    pub fn number_non_blank(mut self) -> Self {
        self.config.number_non_blank = true;
        self
    }

    pub fn show_ends(mut self) -> Self {
        self.config.show_ends = true;
        self
    }

    pub fn show_tabs(mut self) -> Self {
        self.config.show_tabs = true;
        self
    }

    pub fn squeeze_blanks(mut self) -> Self {
        self.config.squeeze_blanks = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> CatConfig {
        self.config.normalize()
    }
}
