//! CLI command implementations.
//!
//! One submodule per subcommand; help and version are handled inline by the
//! dispatcher in [`crate::cli`].

pub mod generate;

pub use generate::cmd_generate;
