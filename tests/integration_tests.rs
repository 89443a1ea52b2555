//! Integration tests for ucdgen
//!
//! These tests drive the built binary end to end: dispatch, help screens,
//! the version banner, and exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Helper to create a ucdgen Command
fn ucdgen() -> Command {
    cargo_bin_cmd!("ucdgen")
}

// =============================================================================
// Dispatch
// =============================================================================

mod dispatch {
    use super::*;

    #[test]
    fn test_no_arguments_shows_help() {
        ucdgen()
            .assert()
            .success()
            .stdout(predicate::str::contains("USAGE"))
            .stdout(predicate::str::contains("COMMANDS"))
            .stdout(predicate::str::contains(
                "Run with --help for more information",
            ));
    }

    #[test]
    fn test_unrecognized_subcommand_falls_back_to_help() {
        // a typo is not an error: the help screen appears and the exit is clean
        ucdgen()
            .arg("generat")
            .assert()
            .success()
            .stdout(predicate::str::contains("USAGE"))
            .stdout(predicate::str::contains("generate command").not());
    }

    #[test]
    fn test_version_banner() {
        ucdgen()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("ucdgen"))
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_version_beats_explicit_subcommand() {
        ucdgen()
            .args(["generate", "--version"])
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
            .stdout(predicate::str::contains("generate command").not());
    }
}

// =============================================================================
// Help screens
// =============================================================================

mod help_screen {
    use super::*;

    #[test]
    fn test_tool_help_lists_generate() {
        ucdgen()
            .assert()
            .success()
            .stdout(predicate::str::contains("generate"))
            .stdout(predicate::str::contains("--version"))
            .stdout(predicate::str::contains("--help"));
    }

    #[test]
    fn test_help_ends_with_blank_line() {
        let output = ucdgen().assert().success().get_output().stdout.clone();
        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("\n\n"));
    }
}

// =============================================================================
// Generate
// =============================================================================

mod generate {
    use super::*;

    #[test]
    fn test_generate_stub_message() {
        ucdgen()
            .arg("generate")
            .assert()
            .success()
            .stdout(predicate::str::contains("generate command"));
    }

    #[test]
    fn test_generate_help_short_flag() {
        ucdgen()
            .args(["generate", "-h"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Generate Command"))
            .stdout(predicate::str::contains("generate command").not());
    }

    #[test]
    fn test_generate_help_long_flag() {
        ucdgen()
            .args(["generate", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("FLAGS"))
            .stdout(predicate::str::contains("generate command").not());
    }

    #[test]
    fn test_generate_accepts_its_flags() {
        ucdgen()
            .args(["generate", "--mode", "split", "-c", "msg", "--ignore", "a"])
            .assert()
            .success()
            .stdout(predicate::str::contains("generate command"));
    }
}
