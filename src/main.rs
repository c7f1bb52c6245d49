mod cli;
mod import;

use clap::Parser;
use cli::{Cli, Commands};
use showcase_api::config::Config;
use showcase_api::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let log_filter = observability::init_tracing();
    let config = Config::load()?;
    observability::apply_log_filter(&log_filter, &config.telemetry.log_filter);

    match cli.command {
        Commands::Server(args) => {
            let address = args.address.unwrap_or(config.server.bind_addr);
            showcase_api::api::run(config, address).await?
        }
        Commands::Import(args) => import::run(&config, &args.file)?,
    }

    Ok(())
}
