//! The `generate` subcommand.
//!
//! Front-end only for now: `-h`/`--help` renders the subcommand help page,
//! anything else reaches the placeholder that will become the UCD-to-data-
//! model pipeline.

use anyhow::Result;

use crate::cli::TOOL_NAME;
use crate::flags::ParsedFlags;
use crate::help::HelpDocument;

/// Typed view of the flags the generation pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub config: Option<String>,
    pub mode: String,
    pub commit: Option<String>,
    pub tag: Option<String>,
    pub sign: bool,
    pub push: Option<String>,
    pub print_commits: bool,
}

impl GenerateOptions {
    pub fn from_flags(flags: &ParsedFlags) -> Self {
        Self {
            config: flags.text("config").map(str::to_owned),
            mode: flags.text("mode").unwrap_or("monolith").to_owned(),
            commit: flags.text("commit").map(str::to_owned),
            tag: flags.text("tag").map(str::to_owned),
            sign: flags.is_truthy("sign"),
            push: flags.text("push").map(str::to_owned),
            print_commits: flags.is_truthy("print-commits"),
        }
    }
}

pub async fn cmd_generate(flags: &ParsedFlags) -> Result<()> {
    if flags.is_truthy("help") || flags.is_truthy("h") {
        generate_help().print();
        return Ok(());
    }

    let options = GenerateOptions::from_flags(flags);
    tracing::debug!(?options, "generate invoked");

    // TODO: drive the UCD parsing and data-model emission here once the
    // generator backend lands.
    println!("generate command");

    Ok(())
}

/// Help page for `ucdgen generate`.
fn generate_help() -> HelpDocument {
    HelpDocument::new(format!("{TOOL_NAME} generate"))
        .headline("Generate Command")
        .usage("[flags]")
        .table(
            "Flags",
            &[
                ("--config <path>", "Path to a generator configuration file."),
                ("--mode <mode>", "Generation mode. Defaults to monolith."),
                (
                    "--commit (-c) <message>",
                    "Commit generated files with the given message.",
                ),
                ("--tag (-t) <name>", "Tag the generated release."),
                ("--push (-p) <remote>", "Push commits and tags to the given remote."),
                ("--ignore <pattern>", "Skip matching UCD files. Repeatable."),
                (
                    "--print-commits",
                    "Print created commits. On by default; disable with --no-print-commits.",
                ),
                ("--help (-h)", "See all available flags."),
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::parse_flags;

    fn flags_for(args: &[&str]) -> ParsedFlags {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        parse_flags(&args)
    }

    #[test]
    fn test_options_from_flags() {
        let flags = flags_for(&[
            "bin", "generate", "--mode", "split", "-c", "msg", "--sign",
        ]);
        let options = GenerateOptions::from_flags(&flags);

        assert_eq!(options.mode, "split");
        assert_eq!(options.commit.as_deref(), Some("msg"));
        assert!(options.sign);
        assert!(options.print_commits);
        assert_eq!(options.config, None);
        assert_eq!(options.tag, None);
        assert_eq!(options.push, None);
    }

    #[test]
    fn test_options_defaults() {
        let options = GenerateOptions::from_flags(&flags_for(&["bin", "generate"]));

        assert_eq!(options.mode, "monolith");
        assert!(!options.sign);
        assert!(options.print_commits);
    }
}
