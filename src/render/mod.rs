pub mod table;

pub use table::{render, render_alter_table};

use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Safety {
    Safe,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSql {
    pub sql: String,
    pub safety: Safety,
}

impl RenderedSql {
    pub fn new(sql: String) -> Self {
        Self {
            sql,
            safety: Safety::Safe,
        }
    }

    pub fn destructive(sql: String) -> Self {
        Self {
            sql,
            safety: Safety::Destructive,
        }
    }
}

/// Wrap an identifier in backticks, doubling any backtick inside it.
pub fn quote_ident(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Quote each identifier and join them with `, `.
pub fn quote_ident_list<S: AsRef<str>>(idents: &[S]) -> String {
    idents.iter().map(|i| quote_ident(i.as_ref())).join(", ")
}

pub fn escape_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
