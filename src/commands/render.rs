use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing::info;

use crate::config::{Config, OutputFormat};
use crate::operations::input::load_command_file;
use crate::render::render_alter_table;

/// Render a command file in the configured output format.
///
/// Returns `None` when no command produced any SQL.
pub fn render_command_file(
    file: &Path,
    table: Option<&str>,
    config: &Config,
) -> Result<Option<String>> {
    let command_file = load_command_file(file)?;
    let table = table
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| command_file.table.clone().filter(|t| !t.is_empty()));
    let commands = command_file.into_commands();

    let clauses = if config.render.strict {
        commands.try_render()?
    } else {
        commands.render()
    };

    if clauses.is_empty() {
        info!("No table commands produced SQL");
        return Ok(None);
    }

    match config.render.format {
        OutputFormat::Fragment => Ok(Some(clauses)),
        OutputFormat::Statement | OutputFormat::Json => {
            let table = table.ok_or_else(|| {
                anyhow!("A table name is required for this format; set `table` in the command file or pass --table")
            })?;
            let rendered = render_alter_table(&table, &commands)
                .ok_or_else(|| anyhow!("Nothing to alter on table {}", table))?;

            if config.render.format == OutputFormat::Json {
                let json = serde_json::to_string_pretty(&rendered)
                    .context("Failed to serialize rendered SQL")?;
                Ok(Some(json))
            } else {
                Ok(Some(rendered.sql))
            }
        }
    }
}

pub fn cmd_render(file: &Path, table: Option<&str>, config: &Config) -> Result<()> {
    if let Some(output) = render_command_file(file, table, config)? {
        println!("{}", output);
    }
    Ok(())
}
