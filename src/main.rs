use anyhow::Result;
use clap::{Parser, Subcommand};

/// chefshare - recipe sharing with dietary and health aware recommendations
#[derive(Parser)]
#[command(name = "chefshare")]
#[command(about = "Recipe sharing with dietary and health aware recommendations", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = chefshare::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    chefshare::observability::init_observability(
        "chefshare",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => chefshare::cli::server::serve(config, host, port).await,
        Commands::Migrate => chefshare::cli::migrate::migrate(&config).await,
        Commands::Reset => chefshare::cli::migrate::reset(&config).await,
    }
}
