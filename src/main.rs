use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::cli::convert::ConvertArgs;
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount; omitted values reuse the last conversion
    Convert {
        /// Amount to convert, a comma works as decimal separator
        amount: Option<String>,
        /// Source currency code
        from: Option<String>,
        /// Target currency code
        to: Option<String>,
        /// Fetch fresh rates even if the cache is still valid
        #[arg(short, long)]
        refresh: bool,
    },
    /// Swap the remembered source and target currencies
    Swap,
    /// Display the current rate table
    Rates {
        /// Fetch fresh rates even if the cache is still valid
        #[arg(short, long)]
        refresh: bool,
    },
    /// List the currencies available for conversion
    Currencies,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                refresh,
            } => fxconv::AppCommand::Convert(ConvertArgs {
                amount,
                from,
                to,
                refresh,
            }),
            Commands::Swap => fxconv::AppCommand::Swap,
            Commands::Rates { refresh } => fxconv::AppCommand::Rates { refresh },
            Commands::Currencies => fxconv::AppCommand::Currencies,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> Result<()> {
    let path = fxconv::cli::setup::setup()?;
    println!("Created default configuration at {}", path.display());
    Ok(())
}
