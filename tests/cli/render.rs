//! `altersql render` end-to-end tests

use crate::helpers::cli::with_cli_helper;
use anyhow::Result;
use predicates::prelude::*;

const USERS_COMMANDS: &str = r#"
table: users
commands:
  - op: add_column
    name: age
    column: { type: INT, not_null: true }
    after: name
  - op: add_column
    column: INT
  - op: add_index
    name: idx_age
    columns: [age]
"#;

#[test]
fn test_render_fragment_by_default() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("users.yaml", USERS_COMMANDS)?;

        helper
            .command()
            .args(["render", "users.yaml"])
            .assert()
            .success()
            .stdout("ADD COLUMN `age` INT NOT NULL AFTER name, ADD KEY `idx_age` (`age`)\n");

        Ok(())
    })
}

#[test]
fn test_render_statement() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("users.yaml", USERS_COMMANDS)?;

        helper
            .command()
            .args(["render", "users.yaml", "--format", "statement"])
            .assert()
            .success()
            .stdout(
                "ALTER TABLE `users` ADD COLUMN `age` INT NOT NULL AFTER name, ADD KEY `idx_age` (`age`);\n",
            );

        Ok(())
    })
}

#[test]
fn test_render_json_reports_safety() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file(
            "drop.json",
            r#"{"table": "users", "commands": [{"op": "drop_column", "name": "legacy"}]}"#,
        )?;

        let output = helper
            .command()
            .args(["render", "drop.json", "--format", "json"])
            .output()?;
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["sql"], "ALTER TABLE `users` DROP COLUMN `legacy`;");
        assert_eq!(value["safety"], "destructive");

        Ok(())
    })
}

#[test]
fn test_table_flag_overrides_command_file() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("users.yaml", USERS_COMMANDS)?;

        helper
            .command()
            .args([
                "render",
                "users.yaml",
                "--format",
                "statement",
                "--table",
                "accounts",
            ])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("ALTER TABLE `accounts` "));

        Ok(())
    })
}

#[test]
fn test_strict_flag_fails_on_incomplete_command() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("users.yaml", USERS_COMMANDS)?;

        helper
            .command()
            .args(["render", "users.yaml", "--strict"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("command #2"))
            .stderr(predicate::str::contains("missing column name"));

        Ok(())
    })
}

#[test]
fn test_config_file_enables_strict_mode() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("users.yaml", USERS_COMMANDS)?;
        helper.write_config("render:\n  strict: true\n")?;

        helper
            .command()
            .args(["render", "users.yaml"])
            .assert()
            .failure();

        // CLI flag wins over the config file
        helper
            .command()
            .args(["render", "users.yaml", "--no-strict"])
            .assert()
            .success();

        Ok(())
    })
}

#[test]
fn test_render_nothing_prints_nothing() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file(
            "empty.yaml",
            "commands:\n  - op: drop_index\n  - op: rename_column\n    old: nm\n",
        )?;

        helper
            .command()
            .args(["render", "empty.yaml"])
            .assert()
            .success()
            .stdout("");

        Ok(())
    })
}

#[test]
fn test_env_format_applies_unless_config_sets_one() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("users.yaml", USERS_COMMANDS)?;

        helper
            .command()
            .env("ALTERSQL_FORMAT", "statement")
            .args(["render", "users.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("ALTER TABLE `users` "));

        helper.write_config("render:\n  format: fragment\n")?;

        helper
            .command()
            .env("ALTERSQL_FORMAT", "statement")
            .args(["render", "users.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("ADD COLUMN `age`"));

        Ok(())
    })
}

#[test]
fn test_invalid_env_strict_value_fails() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("users.yaml", USERS_COMMANDS)?;

        helper
            .command()
            .env("ALTERSQL_STRICT", "maybe")
            .args(["render", "users.yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid ALTERSQL_STRICT value: maybe"));

        Ok(())
    })
}
