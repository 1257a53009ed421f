use anyhow::{Result, anyhow};
use std::path::Path;

use crate::operations::input::load_command_file;

pub fn cmd_validate(file: &Path) -> Result<()> {
    println!("🔍 Validating {}...", file.display());

    let commands = load_command_file(file)?.into_commands();
    let problems = commands.problems();

    if problems.is_empty() {
        println!("✅ All {} command(s) are complete", commands.len());
        return Ok(());
    }

    for (position, message) in &problems {
        println!("❌ command #{}: {}", position, message);
    }

    Err(anyhow!(
        "{} of {} command(s) are incomplete and would be skipped",
        problems.len(),
        commands.len()
    ))
}
