//! Command resolution and dispatch.
//!
//! A parsed argument vector resolves to exactly one [`Command`]:
//! a truthy `--version` wins over everything, then the subcommand slot,
//! then the help screen as the permissive default. Dispatch is an
//! exhaustive match over [`Command`].

use anyhow::Result;
use console::style;

use crate::cmd;
use crate::flags::{ParsedFlags, parse_flags};
use crate::help::HelpDocument;

/// Name shown in banners and usage lines.
pub const TOOL_NAME: &str = "ucdgen";

/// Positional slot holding the subcommand. The argument vector carries the
/// executable path ahead of user input, so user arguments start at slot 1.
/// The lookup is slot-addressed on purpose: a stray positional ahead of the
/// slot means no subcommand, not a shifted one.
pub const SUBCOMMAND_SLOT: usize = 1;

/// The closed set of things this binary can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Generate,
}

impl Command {
    /// Subcommand lookup by name. Only `generate` is a real subcommand;
    /// help and version are reached through flags or fallback.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "generate" => Some(Self::Generate),
            _ => None,
        }
    }
}

/// Resolve the command for one invocation.
///
/// Precedence: a truthy `version` flag beats an explicit subcommand, and an
/// unrecognized subcommand (typo or absent) silently falls back to `Help`
/// rather than erroring.
pub fn resolve_command(flags: &ParsedFlags) -> Command {
    if flags.is_truthy("version") {
        return Command::Version;
    }

    flags
        .positional(SUBCOMMAND_SLOT)
        .and_then(Command::from_name)
        .unwrap_or(Command::Help)
}

/// Execute the resolved command.
pub async fn run_command(command: Command, flags: &ParsedFlags) -> Result<()> {
    match command {
        Command::Help => {
            tool_help().print();
            Ok(())
        }
        Command::Version => {
            println!(
                "  {} {}",
                style(format!(" {TOOL_NAME} ")).black().on_green(),
                style(format!("v{}", crate::VERSION)).green(),
            );
            Ok(())
        }
        Command::Generate => cmd::cmd_generate(flags).await,
    }
}

/// Parse, resolve, dispatch. The caller passes the full process argument
/// vector; any error propagates to `main`'s blanket handler.
pub async fn run_cli(argv: Vec<String>) -> Result<()> {
    let flags = parse_flags(&argv);
    let command = resolve_command(&flags);
    tracing::debug!(?command, "dispatching");
    run_command(command, &flags).await
}

/// The tool-level help screen.
fn tool_help() -> HelpDocument {
    HelpDocument::new(TOOL_NAME)
        .headline("Generate data models from Unicode Character Database (UCD) files.")
        .usage("[command] [flags]")
        .table(
            "Commands",
            &[("generate", "Generate data models from UCD source files.")],
        )
        .table(
            "Global Flags",
            &[
                ("--version", "Show the version number and exit."),
                ("--help", "Show this help message."),
            ],
        )
}
