//! Append-only output buffer

use super::config::EmitConfig;

/// Line break of the output language (CRLF).
pub const LINE_BREAK: &str = "\r\n";

/// Writer that builds the generated output
///
/// Output is append-only: nothing written is ever revised.
#[derive(Debug)]
pub struct OutputWriter {
    /// The output buffer
    output: String,
    /// Configuration
    config: EmitConfig,
}

impl OutputWriter {
    /// Create a new output writer with the given config
    pub fn new(config: EmitConfig) -> Self {
        Self {
            output: String::new(),
            config,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Write a string
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write a string, then a line break when pretty-printing
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        if self.config.pretty {
            self.output.push_str(LINE_BREAK);
        }
    }

    /// Write a line break regardless of the config
    pub fn line_break(&mut self) {
        self.output.push_str(LINE_BREAK);
    }
}
