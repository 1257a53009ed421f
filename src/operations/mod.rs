//! Table commands for MySQL `ALTER TABLE` statements.
//!
//! Each [`TableCommand`] describes one clause of an `ALTER TABLE` statement
//! (see <https://dev.mysql.com/doc/refman/8.0/en/alter-table.html>). Rendering
//! is permissive: a command that is missing a required field renders to an
//! empty string and is left out of the clause list. Callers that want to know
//! about such commands use [`TableCommand::validate`] or
//! [`TableCommands::try_render`].

pub mod input;

use anyhow::{Context, Result, anyhow};
use std::sync::Arc;

use crate::catalog::{ColumnDefinition, ForeignKeyDefinition};

pub type ColumnRef = Arc<dyn ColumnDefinition>;
pub type ForeignKeyRef = Arc<dyn ForeignKeyDefinition>;

/// Trait for rendering SQL from table commands
pub trait SqlRenderer {
    fn to_sql(&self) -> String;
    fn is_destructive(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub enum TableCommand {
    AddColumn {
        name: String,
        column: Option<ColumnRef>,
        /// Takes precedence over `first` when non-empty.
        after: Option<String>,
        first: bool,
    },
    RenameColumn {
        old: String,
        new: String,
    },
    ModifyColumn {
        name: String,
        column: Option<ColumnRef>,
    },
    ChangeColumn {
        from: String,
        to: String,
        column: Option<ColumnRef>,
    },
    DropColumn {
        name: String,
    },
    AddIndex {
        name: String,
        columns: Vec<String>,
    },
    DropIndex {
        name: String,
    },
    AddForeignKey {
        foreign_key: Option<ForeignKeyRef>,
    },
    DropForeignKey {
        name: String,
    },
    AddUniqueIndex {
        key: String,
        columns: Vec<String>,
    },
    AddPrimaryKey {
        column: String,
    },
    DropPrimaryKey,
    RenameIndex {
        from: String,
        to: String,
    },
    DropConstraint {
        name: String,
    },
    DropCheck {
        name: String,
    },
    AddFulltextIndex {
        name: String,
        columns: Vec<String>,
    },
    AddSpatialIndex {
        name: String,
        columns: Vec<String>,
    },
}

impl TableCommand {
    pub fn add_column(name: impl Into<String>, column: impl ColumnDefinition + 'static) -> Self {
        TableCommand::AddColumn {
            name: name.into(),
            column: Some(Arc::new(column)),
            after: None,
            first: false,
        }
    }

    pub fn add_column_after(
        name: impl Into<String>,
        column: impl ColumnDefinition + 'static,
        after: impl Into<String>,
    ) -> Self {
        TableCommand::AddColumn {
            name: name.into(),
            column: Some(Arc::new(column)),
            after: Some(after.into()),
            first: false,
        }
    }

    pub fn add_column_first(
        name: impl Into<String>,
        column: impl ColumnDefinition + 'static,
    ) -> Self {
        TableCommand::AddColumn {
            name: name.into(),
            column: Some(Arc::new(column)),
            after: None,
            first: true,
        }
    }

    pub fn rename_column(old: impl Into<String>, new: impl Into<String>) -> Self {
        TableCommand::RenameColumn {
            old: old.into(),
            new: new.into(),
        }
    }

    pub fn modify_column(name: impl Into<String>, column: impl ColumnDefinition + 'static) -> Self {
        TableCommand::ModifyColumn {
            name: name.into(),
            column: Some(Arc::new(column)),
        }
    }

    pub fn change_column(
        from: impl Into<String>,
        to: impl Into<String>,
        column: impl ColumnDefinition + 'static,
    ) -> Self {
        TableCommand::ChangeColumn {
            from: from.into(),
            to: to.into(),
            column: Some(Arc::new(column)),
        }
    }

    pub fn drop_column(name: impl Into<String>) -> Self {
        TableCommand::DropColumn { name: name.into() }
    }

    pub fn add_index<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableCommand::AddIndex {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn drop_index(name: impl Into<String>) -> Self {
        TableCommand::DropIndex { name: name.into() }
    }

    pub fn add_foreign_key(foreign_key: impl ForeignKeyDefinition + 'static) -> Self {
        TableCommand::AddForeignKey {
            foreign_key: Some(Arc::new(foreign_key)),
        }
    }

    pub fn drop_foreign_key(name: impl Into<String>) -> Self {
        TableCommand::DropForeignKey { name: name.into() }
    }

    pub fn add_unique_index<I, S>(key: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableCommand::AddUniqueIndex {
            key: key.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_primary_key(column: impl Into<String>) -> Self {
        TableCommand::AddPrimaryKey {
            column: column.into(),
        }
    }

    pub fn rename_index(from: impl Into<String>, to: impl Into<String>) -> Self {
        TableCommand::RenameIndex {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn drop_constraint(name: impl Into<String>) -> Self {
        TableCommand::DropConstraint { name: name.into() }
    }

    pub fn drop_check(name: impl Into<String>) -> Self {
        TableCommand::DropCheck { name: name.into() }
    }

    pub fn add_fulltext_index<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableCommand::AddFulltextIndex {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_spatial_index<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableCommand::AddSpatialIndex {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// The clause keyword this command renders, used in diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            TableCommand::AddColumn { .. } => "ADD COLUMN",
            TableCommand::RenameColumn { .. } => "RENAME COLUMN",
            TableCommand::ModifyColumn { .. } => "MODIFY",
            TableCommand::ChangeColumn { .. } => "CHANGE",
            TableCommand::DropColumn { .. } => "DROP COLUMN",
            TableCommand::AddIndex { .. } => "ADD KEY",
            TableCommand::DropIndex { .. } => "DROP KEY",
            TableCommand::AddForeignKey { .. } => "ADD FOREIGN KEY",
            TableCommand::DropForeignKey { .. } => "DROP FOREIGN KEY",
            TableCommand::AddUniqueIndex { .. } => "ADD UNIQUE KEY",
            TableCommand::AddPrimaryKey { .. } => "ADD PRIMARY KEY",
            TableCommand::DropPrimaryKey => "DROP PRIMARY KEY",
            TableCommand::RenameIndex { .. } => "RENAME KEY",
            TableCommand::DropConstraint { .. } => "DROP CONSTRAINT",
            TableCommand::DropCheck { .. } => "DROP CHECK",
            TableCommand::AddFulltextIndex { .. } => "ADD FULLTEXT KEY",
            TableCommand::AddSpatialIndex { .. } => "ADD SPATIAL KEY",
        }
    }

    /// First required field that is empty or absent, if any.
    ///
    /// A command renders to an empty string exactly when this returns `Some`.
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        match self {
            TableCommand::AddColumn { name, column, .. } => {
                if name.is_empty() {
                    Some("column name")
                } else if render_definition(column).is_empty() {
                    Some("column definition")
                } else {
                    None
                }
            }
            TableCommand::RenameColumn { old, new } => {
                if old.is_empty() {
                    Some("old column name")
                } else if new.is_empty() {
                    Some("new column name")
                } else {
                    None
                }
            }
            TableCommand::ModifyColumn { name, column } => {
                if name.is_empty() {
                    Some("column name")
                } else if render_definition(column).is_empty() {
                    Some("column definition")
                } else {
                    None
                }
            }
            TableCommand::ChangeColumn { from, to, column } => {
                if from.is_empty() {
                    Some("old column name")
                } else if to.is_empty() {
                    Some("new column name")
                } else if render_definition(column).is_empty() {
                    Some("column definition")
                } else {
                    None
                }
            }
            TableCommand::DropColumn { name } => name.is_empty().then_some("column name"),
            TableCommand::AddIndex { name, columns }
            | TableCommand::AddFulltextIndex { name, columns }
            | TableCommand::AddSpatialIndex { name, columns } => {
                if name.is_empty() {
                    Some("index name")
                } else if columns.is_empty() {
                    Some("index columns")
                } else {
                    None
                }
            }
            TableCommand::AddUniqueIndex { key, columns } => {
                if key.is_empty() {
                    Some("key name")
                } else if columns.is_empty() {
                    Some("key columns")
                } else {
                    None
                }
            }
            TableCommand::DropIndex { name } => name.is_empty().then_some("index name"),
            TableCommand::AddForeignKey { foreign_key } => {
                let rendered = foreign_key
                    .as_ref()
                    .map(|fk| fk.render())
                    .unwrap_or_default();
                rendered.is_empty().then_some("foreign key definition")
            }
            TableCommand::DropForeignKey { name } => {
                name.is_empty().then_some("foreign key name")
            }
            TableCommand::AddPrimaryKey { column } => column.is_empty().then_some("column name"),
            TableCommand::DropPrimaryKey => None,
            TableCommand::RenameIndex { from, to } => {
                if from.is_empty() {
                    Some("old index name")
                } else if to.is_empty() {
                    Some("new index name")
                } else {
                    None
                }
            }
            TableCommand::DropConstraint { name } | TableCommand::DropCheck { name } => {
                name.is_empty().then_some("constraint name")
            }
        }
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> Result<()> {
        match self.missing_field() {
            Some(field) => Err(anyhow!("{}: missing {}", self.keyword(), field)),
            None => Ok(()),
        }
    }
}

pub(crate) fn render_definition(column: &Option<ColumnRef>) -> String {
    column.as_ref().map(|c| c.render()).unwrap_or_default()
}

/// An ordered list of commands applied to a single table.
#[derive(Debug, Clone, Default)]
pub struct TableCommands {
    commands: Vec<TableCommand>,
}

impl TableCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command; it renders after everything already in the list.
    pub fn push(&mut self, command: TableCommand) {
        self.commands.push(command);
    }

    pub fn with(mut self, command: TableCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when the list holds no commands, complete or not.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TableCommand> {
        self.commands.iter()
    }

    /// Borrow the commands for use with [`crate::render::render`].
    pub fn as_slice(&self) -> &[TableCommand] {
        &self.commands
    }

    /// Render the comma separated clause list, skipping incomplete commands.
    pub fn render(&self) -> String {
        crate::render::render(&self.commands)
    }

    /// Like [`render`](Self::render), but fails on the first incomplete command.
    pub fn try_render(&self) -> Result<String> {
        for (index, command) in self.commands.iter().enumerate() {
            command
                .validate()
                .with_context(|| format!("command #{}", index + 1))?;
        }
        Ok(self.render())
    }

    /// Every incomplete command with its 1-based position in the list.
    pub fn problems(&self) -> Vec<(usize, String)> {
        self.commands
            .iter()
            .enumerate()
            .filter_map(|(index, command)| {
                command
                    .validate()
                    .err()
                    .map(|err| (index + 1, err.to_string()))
            })
            .collect()
    }

    /// Whether any command that actually renders can drop data or constraints.
    pub fn is_destructive(&self) -> bool {
        self.commands
            .iter()
            .any(|command| command.is_destructive() && command.missing_field().is_none())
    }
}

impl From<Vec<TableCommand>> for TableCommands {
    fn from(commands: Vec<TableCommand>) -> Self {
        Self { commands }
    }
}

impl FromIterator<TableCommand> for TableCommands {
    fn from_iter<T: IntoIterator<Item = TableCommand>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TableCommands {
    type Item = &'a TableCommand;
    type IntoIter = std::slice::Iter<'a, TableCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
