//! SQL rendering for table commands

use itertools::Itertools;
use tracing::debug;

use crate::operations::{SqlRenderer, TableCommand, TableCommands, render_definition};
use crate::render::{RenderedSql, quote_ident, quote_ident_list};

impl SqlRenderer for TableCommand {
    fn to_sql(&self) -> String {
        if let Some(field) = self.missing_field() {
            debug!(
                command = self.keyword(),
                field, "Skipping table command with missing field"
            );
            return String::new();
        }

        match self {
            TableCommand::AddColumn {
                name,
                column,
                after,
                first,
            } => {
                let mut sql = format!(
                    "ADD COLUMN {} {}",
                    quote_ident(name),
                    render_definition(column)
                );

                match after.as_deref().filter(|a| !a.is_empty()) {
                    Some(after) => sql.push_str(&format!(" AFTER {}", after)),
                    None if *first => sql.push_str(" FIRST"),
                    None => {}
                }

                sql
            }
            TableCommand::RenameColumn { old, new } => format!(
                "RENAME COLUMN {} TO {}",
                quote_ident(old),
                quote_ident(new)
            ),
            TableCommand::ModifyColumn { name, column } => format!(
                "MODIFY {} {}",
                quote_ident(name),
                render_definition(column)
            ),
            TableCommand::ChangeColumn { from, to, column } => format!(
                "CHANGE {} {} {}",
                quote_ident(from),
                quote_ident(to),
                render_definition(column)
            ),
            TableCommand::DropColumn { name } => format!("DROP COLUMN {}", quote_ident(name)),
            TableCommand::AddIndex { name, columns } => format!(
                "ADD KEY {} ({})",
                quote_ident(name),
                quote_ident_list(columns)
            ),
            TableCommand::DropIndex { name } => format!("DROP KEY {}", quote_ident(name)),
            TableCommand::AddForeignKey { foreign_key } => match foreign_key {
                Some(fk) => format!("ADD {}", fk.render()),
                None => String::new(),
            },
            TableCommand::DropForeignKey { name } => {
                format!("DROP FOREIGN KEY {}", quote_ident(name))
            }
            TableCommand::AddUniqueIndex { key, columns } => format!(
                "ADD UNIQUE KEY {} ({})",
                quote_ident(key),
                quote_ident_list(columns)
            ),
            TableCommand::AddPrimaryKey { column } => {
                format!("ADD PRIMARY KEY ({})", quote_ident(column))
            }
            TableCommand::DropPrimaryKey => "DROP PRIMARY KEY".to_string(),
            TableCommand::RenameIndex { from, to } => {
                format!("RENAME KEY {} TO {}", quote_ident(from), quote_ident(to))
            }
            TableCommand::DropConstraint { name } => {
                format!("DROP CONSTRAINT {}", quote_ident(name))
            }
            TableCommand::DropCheck { name } => format!("DROP CHECK {}", quote_ident(name)),
            TableCommand::AddFulltextIndex { name, columns } => format!(
                "ADD FULLTEXT KEY {} ({})",
                quote_ident(name),
                quote_ident_list(columns)
            ),
            TableCommand::AddSpatialIndex { name, columns } => format!(
                "ADD SPATIAL KEY {} ({})",
                quote_ident(name),
                quote_ident_list(columns)
            ),
        }
    }

    fn is_destructive(&self) -> bool {
        matches!(
            self,
            TableCommand::DropColumn { .. }
                | TableCommand::ModifyColumn { .. }
                | TableCommand::ChangeColumn { .. }
                | TableCommand::DropIndex { .. }
                | TableCommand::DropForeignKey { .. }
                | TableCommand::DropPrimaryKey
                | TableCommand::DropConstraint { .. }
                | TableCommand::DropCheck { .. }
        )
    }
}

/// Render the clause list of an `ALTER TABLE` statement.
///
/// Commands render in order and are joined with `, `. Commands that render
/// empty are left out entirely, so the result never contains blank segments.
pub fn render(commands: &[TableCommand]) -> String {
    commands
        .iter()
        .map(SqlRenderer::to_sql)
        .filter(|sql| !sql.is_empty())
        .join(", ")
}

/// Render a complete `ALTER TABLE` statement, or `None` when there is nothing to alter.
pub fn render_alter_table(table: &str, commands: &TableCommands) -> Option<RenderedSql> {
    if table.is_empty() {
        return None;
    }

    let clauses = commands.render();
    if clauses.is_empty() {
        return None;
    }

    let sql = format!("ALTER TABLE {} {};", quote_ident(table), clauses);

    if commands.is_destructive() {
        Some(RenderedSql::destructive(sql))
    } else {
        Some(RenderedSql::new(sql))
    }
}
