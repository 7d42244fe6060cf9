//! Emission configuration

/// Emission configuration
///
/// The default is dense output: everything on one line, except for preprocessor directives which always keep their
/// own line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitConfig {
    /// Emit a CRLF line break after statements and block openers
    pub pretty: bool,
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Dense output (same as the default)
    pub fn dense() -> Self {
        Self { pretty: false }
    }

    /// Line-broken output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Set whether line breaks are emitted
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
