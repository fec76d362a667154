mod cli;

use clap::Parser;
use cli::{Cli, Commands, SummarizeArgs};
use postdigest::collection;
use postdigest::config::Config;
use postdigest::observability;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();
    let config = Config::load().map_err(|e| format!("Failed to load config: {}", e))?;

    observability::init_tracing(&config.telemetry.log_filter);

    match cli.command {
        Commands::Server(args) => postdigest::api::run(config, args.address).await?,
        Commands::Summarize(args) => summarize(config, args)?,
    }

    Ok(())
}

fn summarize(config: Config, args: SummarizeArgs) -> Result<(), AnyError> {
    let mut options = config.extract;
    options.flatten_folders |= args.flatten_folders;

    let rendered = collection::summarize(args.path.into(), &options)?;
    println!("{rendered}");
    Ok(())
}
