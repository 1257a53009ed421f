use serde::{Deserialize, Serialize};

use super::ColumnDefinition;
use crate::render::escape_string;

/// A MySQL column definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Column {
    #[serde(rename = "type", default)]
    pub data_type: String,
    #[serde(default)]
    pub not_null: bool,
    /// Emitted verbatim, so string literals must carry their own quotes.
    pub default: Option<String>,
    #[serde(default)]
    pub auto_increment: bool,
    pub comment: Option<String>,
}

impl Column {
    pub fn new(data_type: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            ..Self::default()
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl ColumnDefinition for Column {
    fn render(&self) -> String {
        let data_type = self.data_type.trim();
        if data_type.is_empty() {
            return String::new();
        }

        let mut sql = data_type.to_string();

        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = self.default.as_deref().filter(|d| !d.is_empty()) {
            sql.push_str(&format!(" DEFAULT {}", default));
        }
        if self.auto_increment {
            sql.push_str(" AUTO_INCREMENT");
        }
        if let Some(comment) = self.comment.as_deref().filter(|c| !c.is_empty()) {
            sql.push_str(&format!(" COMMENT {}", escape_string(comment)));
        }

        sql
    }
}
