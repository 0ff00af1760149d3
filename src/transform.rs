//! Line transformer: squeezing, numbering and marker decoration
//!
//! Lines are handled as raw bytes split on `\n`. The delimiter is stripped
//! before a line is inspected and a fresh `\n` is written after it, so a
//! final unterminated line comes out terminated.

use crate::config::{CatConfig, NUMBER_WIDTH};
use crate::error::{CatContext, CatError, CatResult};
use std::io::{BufRead, BufReader, Read, Write};

/// State carried across every input of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    /// Next number to print
    pub line_number: u64,
    /// Whether the last consumed line was blank
    pub last_was_blank: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            line_number: 1,
            last_was_blank: false,
        }
    }
}

/// Applies the configured decorations line by line
#[derive(Debug, Clone)]
pub struct LineTransformer {
    config: CatConfig,
    state: RunState,
}

impl LineTransformer {
    pub fn new(config: CatConfig) -> Self {
        Self::with_state(config, RunState::default())
    }

    pub fn with_state(config: CatConfig, state: RunState) -> Self {
        Self { config, state }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Stream every line of `reader` to `out`, returning how many lines were
    /// consumed (squeezed lines included).
    ///
    /// Output is flushed before each read that would have to go back to the
    /// underlying source, so interactive input is echoed without delay. A
    /// read failure is attributed to `name`; lines already written stay
    /// written.
    pub fn transform<R, W>(
        &mut self,
        reader: &mut BufReader<R>,
        out: &mut W,
        name: &str,
    ) -> CatResult<u64>
    where
        R: Read,
        W: Write,
    {
        let mut line = Vec::new();
        let mut rendered = Vec::new();
        let mut consumed = 0u64;

        loop {
            if reader.buffer().is_empty() {
                out.flush().map_err(CatError::Write)?;
            }

            line.clear();
            let read = reader.read_until(b'\n', &mut line).with_read_context(name)?;
            if read == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            consumed += 1;

            rendered.clear();
            if self.render_line(&line, &mut rendered) {
                out.write_all(&rendered).map_err(CatError::Write)?;
            }
        }

        Ok(consumed)
    }

    /// Render one delimiter-stripped line into `out`.
    ///
    /// Returns false when the line is squeezed away; nothing is appended then.
    pub fn render_line(&mut self, line: &[u8], out: &mut Vec<u8>) -> bool {
        let blank = line.is_empty();

        if self.config.squeeze_blanks && blank && self.state.last_was_blank {
            return false;
        }
        self.state.last_was_blank = blank;

        if self.config.numbers(blank) {
            let field = format!("{:>width$} ", self.state.line_number, width = NUMBER_WIDTH);
            out.extend_from_slice(field.as_bytes());
            self.state.line_number += 1;
        }

        if self.config.show_tabs {
            for &byte in line {
                if byte == b'\t' {
                    out.extend_from_slice(b"^I");
                } else {
                    out.push(byte);
                }
            }
        } else {
            out.extend_from_slice(line);
        }

        if self.config.show_ends {
            out.push(b'$');
        }
        out.push(b'\n');
        true
    }
}
