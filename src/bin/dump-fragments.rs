//! Prints the raw text fragments of one configured restaurant, one numbered
//! block per node matched by its selector. Handy when writing a selector.

use clap::Parser;
use menu_scraper::{config::DEFAULT_CONFIG_PATH, fetch::fetch_fragments, Config, HttpSource};
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
struct Args {
    /// Name of the restaurant as written in the config.
    name: String,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    let Some(site) = config.sites.iter().find(|s| s.name == args.name) else {
        eprintln!("No restaurant named `{}` in {}", args.name, args.config.display());
        return Ok(ExitCode::FAILURE);
    };

    let source = HttpSource::new(&config.http)?;
    let raw = fetch_fragments(&source, site).await?;

    println!("{} blocks (fold threshold {})", raw.len(), config.parser.fold_threshold);
    for (i, block) in raw.iter().enumerate() {
        println!("[{}]", i);
        for fragment in block {
            println!("    {:?}", fragment);
        }
    }

    Ok(ExitCode::SUCCESS)
}
