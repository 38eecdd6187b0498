use clap::Parser;
use gujarati_news_finder::sites::{self, SiteProfile};
use gujarati_news_finder::{run_search, GoogleTranslator, HttpFetcher};
use std::time::Duration;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find and extract Gujarati news articles by keyword")]
struct Cli {
    /// Keyword to search for (in English or Gujarati)
    keyword: String,

    /// Search a single site instead of all of them
    /// (gujarat-samachar, divya-bhaskar, sandesh)
    #[arg(long)]
    site: Option<String>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// HTTP timeout in seconds; the transport default applies when omitted
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let cli = Cli::parse();

    let profiles: Vec<Box<dyn SiteProfile>> = match &cli.site {
        Some(key) => {
            vec![sites::find(key).ok_or_else(|| format!("Unknown site '{}'", key))?]
        }
        None => sites::default_profiles(),
    };

    let fetcher = HttpFetcher::new(cli.timeout.map(Duration::from_secs))?;
    let translator = GoogleTranslator::new()?;

    let report = run_search(&fetcher, &translator, &profiles, &cli.keyword).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
