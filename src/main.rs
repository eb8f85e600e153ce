use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod matching;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("guide_scan=debug,info")
    } else {
        EnvFilter::new("guide_scan=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Pams(args) => {
            cli::pams::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Generate(args) => {
            cli::generate::run(args, cli.verbose)?;
        }
    }

    Ok(())
}
