//! asl compiler version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The asl compiler version string (for example, `1.2.0`).
pub const ASL_VERSION: &str = env!("CARGO_PKG_VERSION");
