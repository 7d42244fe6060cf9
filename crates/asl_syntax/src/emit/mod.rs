//! Output emission for the asl code generator.
//!
//! The parser writes output-language text straight into an [`OutputWriter`] while it descends. The only layout
//! decision is whether statement and block boundaries get a CRLF line break ([`EmitConfig::pretty`]).

mod config;
mod writer;

pub use config::EmitConfig;
pub use writer::{LINE_BREAK, OutputWriter};
