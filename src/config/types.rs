use clap::Args;
use serde::{Deserialize, Serialize};

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub render: Option<RenderInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub render: Render,
}

/// How rendered SQL is written out
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Only the clause list, e.g. ADD COLUMN `a` INT, DROP KEY `b`
    #[default]
    Fragment,
    /// A complete ALTER TABLE statement
    Statement,
    /// JSON object with the statement and its safety
    Json,
}

// Render configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RenderInput {
    pub strict: Option<bool>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone)]
pub struct Render {
    /// Fail on incomplete commands instead of skipping them
    pub strict: bool,
    pub format: OutputFormat,
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[arg(long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Fail on incomplete commands instead of skipping them")]
    pub strict: bool,

    #[arg(long, conflicts_with = "strict", help = "Skip incomplete commands silently")]
    pub no_strict: bool,
}

impl From<RenderArgs> for RenderInput {
    fn from(args: RenderArgs) -> Self {
        Self {
            strict: if args.no_strict {
                Some(false)
            } else if args.strict {
                Some(true)
            } else {
                None
            },
            format: args.format,
        }
    }
}
