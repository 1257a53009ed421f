/// CLI integration tests that exercise the actual binary with assert_cmd.
///
/// ```rust
/// helper.command()
///     .args(["render", "commands.yaml"])
///     .assert()
///     .success()
///     .stdout(predicate::str::contains("ADD COLUMN"));
/// ```
pub mod error_handling;
pub mod render;
