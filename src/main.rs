use clap::{Parser, ValueEnum};
use menu_scraper::{config::DEFAULT_CONFIG_PATH, report, Config, HttpSource, MenuScraper, SiteFilter};
use std::path::PathBuf;
use tracing::debug;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Prints the daily lunch menus of the configured restaurants.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Restaurant configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print only today's menus.
    #[arg(long)]
    today: bool,

    /// Only restaurants carrying this tag. Repeatable.
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Only the restaurant with this name. Repeatable.
    #[arg(long = "name")]
    names: Vec<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    let sites = SiteFilter::new(args.tags, args.names).apply(config.sites);
    debug!("{} sites after filtering", sites.len());

    let scraper = MenuScraper::new(HttpSource::new(&config.http)?, config.parser);
    let mut results = scraper.scrape(&sites).await;

    if args.today {
        results.retain_today(scraper.today());
    }
    results.sort_by_name();

    match args.format {
        Format::Text => print!("{}", results),
        Format::Json => println!("{}", report::to_json(&results)?),
    }

    Ok(())
}
