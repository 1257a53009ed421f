//! CLI error handling tests
//!
//! Tests that verify altersql provides helpful error messages when inputs are wrong.

use crate::helpers::cli::with_cli_helper;
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_missing_command_file_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper
            .command()
            .args(["render", "nope.yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read command file"));

        Ok(())
    })
}

#[test]
fn test_invalid_command_yaml_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("broken.yaml", "commands: [unbalanced")?;

        helper
            .command()
            .args(["render", "broken.yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid command file"));

        Ok(())
    })
}

#[test]
fn test_unknown_operation_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("unknown.yaml", "commands:\n  - op: truncate_table\n")?;

        helper
            .command()
            .args(["validate", "unknown.yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("truncate_table"));

        Ok(())
    })
}

#[test]
fn test_invalid_config_yaml_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("ok.yaml", "commands:\n  - op: drop_primary_key\n")?;
        helper.write_config("render: [unbalanced")?;

        helper
            .command()
            .args(["render", "ok.yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid config file"));

        Ok(())
    })
}

#[test]
fn test_statement_without_table_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("ok.yaml", "commands:\n  - op: drop_primary_key\n")?;

        helper
            .command()
            .args(["render", "ok.yaml", "--format", "statement"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("table name is required"));

        Ok(())
    })
}

#[test]
fn test_strict_and_no_strict_conflict() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("ok.yaml", "commands: []\n")?;

        helper
            .command()
            .args(["render", "ok.yaml", "--strict", "--no-strict"])
            .assert()
            .failure();

        Ok(())
    })
}
