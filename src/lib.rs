//! Render MySQL `ALTER TABLE` clause fragments from typed table commands.
//!
//! ```
//! use altersql::catalog::Column;
//! use altersql::operations::{TableCommand, TableCommands};
//!
//! let commands = TableCommands::new()
//!     .with(TableCommand::add_column_after("age", Column::new("INT").not_null(), "name"))
//!     .with(TableCommand::drop_index("idx_x"));
//!
//! assert_eq!(
//!     commands.render(),
//!     "ADD COLUMN `age` INT NOT NULL AFTER name, DROP KEY `idx_x`"
//! );
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod operations;
pub mod render;

pub use operations::{SqlRenderer, TableCommand, TableCommands};
pub use render::{RenderedSql, Safety, render, render_alter_table};
