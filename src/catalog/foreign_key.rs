use serde::{Deserialize, Serialize};
use std::fmt;

use super::ForeignKeyDefinition;
use crate::render::{quote_ident, quote_ident_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::SetDefault => "SET DEFAULT",
        };
        f.write_str(action)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ForeignKeyReference {
    #[serde(default)]
    pub table: String,
    #[serde(default)]
    pub columns: Vec<String>,
}

/// A foreign key constraint on the altered table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ForeignKey {
    /// Constraint symbol; MySQL generates one when absent.
    pub name: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub references: ForeignKeyReference,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

impl ForeignKey {
    pub fn new<C, R>(columns: C, table: impl Into<String>, referenced_columns: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
            references: ForeignKeyReference {
                table: table.into(),
                columns: referenced_columns.into_iter().map(Into::into).collect(),
            },
            on_delete: None,
            on_update: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }
}

impl ForeignKeyDefinition for ForeignKey {
    fn render(&self) -> String {
        if self.columns.is_empty()
            || self.references.table.is_empty()
            || self.references.columns.is_empty()
        {
            return String::new();
        }

        let mut sql = String::new();

        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            sql.push_str(&format!("CONSTRAINT {} ", quote_ident(name)));
        }

        sql.push_str(&format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            quote_ident_list(&self.columns),
            quote_ident(&self.references.table),
            quote_ident_list(&self.references.columns)
        ));

        if let Some(on_delete) = self.on_delete {
            sql.push_str(&format!(" ON DELETE {}", on_delete));
        }
        if let Some(on_update) = self.on_update {
            sql.push_str(&format!(" ON UPDATE {}", on_update));
        }

        sql
    }
}
