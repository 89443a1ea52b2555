//! Command-line front-end for generating data models from the Unicode
//! Character Database.
//!
//! The crate is argument parsing and console formatting glue: argv is
//! parsed into [`flags::ParsedFlags`], resolved to a [`cli::Command`], and
//! dispatched to the help renderer, the version banner, or the `generate`
//! handler.

pub mod cli;
pub mod cmd;
pub mod flags;
pub mod help;
pub mod logging;

/// Version baked in from the crate manifest at build time.
pub const VERSION: &str = match option_env!("CARGO_PKG_VERSION") {
    Some(version) => version,
    None => "0.0.0",
};
