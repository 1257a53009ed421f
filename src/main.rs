use altersql::{commands, config};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "altersql.yaml", global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
struct RenderCmdArgs {
    /// Command file (YAML, or JSON with a .json extension)
    file: PathBuf,

    /// Table to alter; overrides `table` in the command file
    #[arg(long)]
    table: Option<String>,

    #[command(flatten)]
    render_args: config::RenderArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Render table commands as ALTER TABLE SQL
    Render(RenderCmdArgs),

    /// Report commands that are incomplete and would be skipped
    Validate {
        /// Command file (YAML, or JSON with a .json extension)
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    // stdout carries the rendered SQL
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => {
            let file_config = config::load_config(&cli.config_file)?;
            let cli_config = config::ConfigInput {
                render: Some(args.render_args.into()),
            };

            let config = config::ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve()?;
            debug!(?config, "Resolved configuration");

            commands::cmd_render(&args.file, args.table.as_deref(), &config)
        }
        Commands::Validate { file } => commands::cmd_validate(&file),
    }
}
