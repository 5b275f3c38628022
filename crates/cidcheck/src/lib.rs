//! Command-line surface of `cidcheck`.
//!
//! Parses arguments, opens the input and reports the verdict produced by
//! [`cidcheck_verify`].

pub use self::cli::{App, HashMismatch};
pub use self::input::Input;

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "CIDCHECK_LOG";

mod cli;
mod input;
