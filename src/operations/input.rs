//! Command files: table commands described in YAML or JSON.
//!
//! ```yaml
//! table: users
//! commands:
//!   - op: add_column
//!     name: age
//!     column: { type: INT, not_null: true }
//!     after: name
//!   - op: drop_index
//!     name: idx_old
//! ```
//!
//! Fields left out of a command deserialize as empty, so the command renders
//! empty instead of failing to load.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use super::{ColumnRef, ForeignKeyRef, TableCommand, TableCommands};
use crate::catalog::{Column, ForeignKey};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandFile {
    pub table: Option<String>,
    #[serde(default)]
    pub commands: Vec<CommandInput>,
}

impl CommandFile {
    pub fn into_commands(self) -> TableCommands {
        self.commands.into_iter().map(TableCommand::from).collect()
    }
}

/// A column given either as a raw definition string or as a [`Column`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColumnInput {
    Raw(String),
    Column(Column),
}

impl ColumnInput {
    fn into_definition(self) -> ColumnRef {
        match self {
            ColumnInput::Raw(sql) => Arc::new(sql),
            ColumnInput::Column(column) => Arc::new(column),
        }
    }
}

/// A foreign key given either as a raw clause string or as a [`ForeignKey`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ForeignKeyInput {
    Raw(String),
    ForeignKey(ForeignKey),
}

impl ForeignKeyInput {
    fn into_definition(self) -> ForeignKeyRef {
        match self {
            ForeignKeyInput::Raw(sql) => Arc::new(sql),
            ForeignKeyInput::ForeignKey(fk) => Arc::new(fk),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CommandInput {
    AddColumn {
        #[serde(default)]
        name: String,
        column: Option<ColumnInput>,
        after: Option<String>,
        #[serde(default)]
        first: bool,
    },
    RenameColumn {
        #[serde(default)]
        old: String,
        #[serde(default)]
        new: String,
    },
    ModifyColumn {
        #[serde(default)]
        name: String,
        column: Option<ColumnInput>,
    },
    ChangeColumn {
        #[serde(default)]
        from: String,
        #[serde(default)]
        to: String,
        column: Option<ColumnInput>,
    },
    DropColumn {
        #[serde(default)]
        name: String,
    },
    AddIndex {
        #[serde(default)]
        name: String,
        #[serde(default)]
        columns: Vec<String>,
    },
    DropIndex {
        #[serde(default)]
        name: String,
    },
    AddForeignKey {
        foreign_key: Option<ForeignKeyInput>,
    },
    DropForeignKey {
        #[serde(default)]
        name: String,
    },
    AddUniqueIndex {
        #[serde(default)]
        key: String,
        #[serde(default)]
        columns: Vec<String>,
    },
    AddPrimaryKey {
        #[serde(default)]
        column: String,
    },
    DropPrimaryKey,
    RenameIndex {
        #[serde(default)]
        from: String,
        #[serde(default)]
        to: String,
    },
    DropConstraint {
        #[serde(default)]
        name: String,
    },
    DropCheck {
        #[serde(default)]
        name: String,
    },
    AddFulltextIndex {
        #[serde(default)]
        name: String,
        #[serde(default)]
        columns: Vec<String>,
    },
    AddSpatialIndex {
        #[serde(default)]
        name: String,
        #[serde(default)]
        columns: Vec<String>,
    },
}

impl From<CommandInput> for TableCommand {
    fn from(input: CommandInput) -> Self {
        match input {
            CommandInput::AddColumn {
                name,
                column,
                after,
                first,
            } => TableCommand::AddColumn {
                name,
                column: column.map(ColumnInput::into_definition),
                after,
                first,
            },
            CommandInput::RenameColumn { old, new } => TableCommand::RenameColumn { old, new },
            CommandInput::ModifyColumn { name, column } => TableCommand::ModifyColumn {
                name,
                column: column.map(ColumnInput::into_definition),
            },
            CommandInput::ChangeColumn { from, to, column } => TableCommand::ChangeColumn {
                from,
                to,
                column: column.map(ColumnInput::into_definition),
            },
            CommandInput::DropColumn { name } => TableCommand::DropColumn { name },
            CommandInput::AddIndex { name, columns } => TableCommand::AddIndex { name, columns },
            CommandInput::DropIndex { name } => TableCommand::DropIndex { name },
            CommandInput::AddForeignKey { foreign_key } => TableCommand::AddForeignKey {
                foreign_key: foreign_key.map(ForeignKeyInput::into_definition),
            },
            CommandInput::DropForeignKey { name } => TableCommand::DropForeignKey { name },
            CommandInput::AddUniqueIndex { key, columns } => {
                TableCommand::AddUniqueIndex { key, columns }
            }
            CommandInput::AddPrimaryKey { column } => TableCommand::AddPrimaryKey { column },
            CommandInput::DropPrimaryKey => TableCommand::DropPrimaryKey,
            CommandInput::RenameIndex { from, to } => TableCommand::RenameIndex { from, to },
            CommandInput::DropConstraint { name } => TableCommand::DropConstraint { name },
            CommandInput::DropCheck { name } => TableCommand::DropCheck { name },
            CommandInput::AddFulltextIndex { name, columns } => {
                TableCommand::AddFulltextIndex { name, columns }
            }
            CommandInput::AddSpatialIndex { name, columns } => {
                TableCommand::AddSpatialIndex { name, columns }
            }
        }
    }
}

/// Parse a command file; `.json` files are read as JSON, anything else as YAML.
pub fn parse_command_file(contents: &str, is_json: bool) -> Result<CommandFile> {
    if is_json {
        serde_json::from_str(contents).context("Failed to parse JSON command file")
    } else {
        serde_yaml::from_str(contents).context("Failed to parse YAML command file")
    }
}

pub fn load_command_file(path: &Path) -> Result<CommandFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read command file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file = parse_command_file(&contents, is_json)
        .with_context(|| format!("Invalid command file {}", path.display()))?;

    info!(
        "Loaded {} command(s) from {}",
        file.commands.len(),
        path.display()
    );

    Ok(file)
}
