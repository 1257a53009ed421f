//! Definitions that table commands render through.
//!
//! A command only knows how to place a column or foreign key definition inside
//! its clause. What the definition itself looks like is delegated to the two
//! capabilities below, so callers can plug in their own column models.

pub mod column;
pub mod foreign_key;

pub use column::Column;
pub use foreign_key::{ForeignKey, ForeignKeyReference, ReferentialAction};

use std::fmt::Debug;

/// Something that renders to a column definition such as `VARCHAR(255) NOT NULL`.
///
/// An empty render means no definition is available and makes the owning
/// command render empty as well.
pub trait ColumnDefinition: Debug + Send + Sync {
    fn render(&self) -> String;
}

/// Something that renders to a `FOREIGN KEY (...) REFERENCES ...` clause body,
/// without the leading `ADD`.
pub trait ForeignKeyDefinition: Debug + Send + Sync {
    fn render(&self) -> String;
}

impl ColumnDefinition for String {
    fn render(&self) -> String {
        self.trim().to_string()
    }
}

impl ColumnDefinition for &'static str {
    fn render(&self) -> String {
        self.trim().to_string()
    }
}

impl ForeignKeyDefinition for String {
    fn render(&self) -> String {
        self.trim().to_string()
    }
}

impl ForeignKeyDefinition for &'static str {
    fn render(&self) -> String {
        self.trim().to_string()
    }
}
