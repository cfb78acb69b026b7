use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use nb_core::types::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use nb_core::{Error, Result, SummaryParams};
use nb_inference::{create_model, NewsSummarizer};
use nb_scrapers::rules::DEFAULT_LIMIT;
use nb_scrapers::{FetchConfig, HttpFetcher, ScraperManager};
use nb_web::handlers::TopNewsResponse;
use nb_web::{create_app, AppState};
use tracing::info;

mod logging;

#[derive(Debug, Clone)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    /// Accepts `90`, `10s`, `2m`, `1h30m`; a bare number means seconds.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let too_long = || format!("Duration too long: {}", s);
        let mut total: u64 = 0;
        let mut digits = String::new();
        let mut seen_number = false;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            if digits.is_empty() {
                return Err(format!("Invalid character in duration: {}", c));
            }
            let scale = match c {
                's' => 1,
                'm' => 60,
                'h' => 3600,
                _ => return Err(format!("Invalid duration unit: {}", c)),
            };
            let value: u64 = digits.parse().map_err(|_| too_long())?;
            total = value
                .checked_mul(scale)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(too_long)?;
            digits.clear();
            seen_number = true;
        }

        if !digits.is_empty() {
            let value: u64 = digits.parse().map_err(|_| too_long())?;
            total = total.checked_add(value).ok_or_else(too_long)?;
            seen_number = true;
        }

        if !seen_number {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape news sites and summarize articles into bullet points", long_about = None)]
pub struct Cli {
    #[arg(long, env = "NB_MODEL", default_value = "huggingface", help = "Summarization backend. Available models: huggingface (default), dummy")]
    model: String,
    /// Model identifier on the hosted inference API
    #[arg(long, env = "NB_MODEL_ID")]
    model_id: Option<String>,
    /// Full summarization endpoint URL, for self-hosted models
    #[arg(long, env = "NB_MODEL_URL")]
    model_url: Option<String>,
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    api_key: Option<String>,
    /// Articles fetched and summarized at once
    #[arg(long, default_value_t = 4)]
    concurrency: usize,
    /// Timeout for page fetches (e.g. 10s, 1m)
    #[arg(long, default_value = "10s")]
    timeout: HumanDuration,
    /// Timeout for summarization calls
    #[arg(long, default_value = "2m")]
    model_timeout: HumanDuration,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct LengthArgs {
    /// Upper bound on summary length
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,
    /// Lower bound on summary length
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,
}

impl From<LengthArgs> for SummaryParams {
    fn from(args: LengthArgs) -> Self {
        SummaryParams {
            max_length: args.max_length,
            min_length: args.min_length,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, env = "NB_BIND", default_value = "127.0.0.1:5000")]
        bind: SocketAddr,
    },
    /// Summarize the top articles linked from a news listing page
    Top {
        url: String,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        #[command(flatten)]
        lengths: LengthArgs,
    },
    /// Summarize a single article
    Summarize {
        url: String,
        #[command(flatten)]
        lengths: LengthArgs,
    },
    /// List the site rules used for link extraction
    Rules,
}

fn create_summarizer(cli: &Cli) -> Result<NewsSummarizer> {
    let config = nb_inference::Config {
        api_key: cli.api_key.clone(),
        model_name: Some(cli.model.clone()),
        model_id: cli.model_id.clone(),
        model_url: cli.model_url.clone(),
        timeout: cli.model_timeout.0,
    };
    let model = create_model(Some(config))?;
    Ok(NewsSummarizer::new(model).with_concurrency(cli.concurrency))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let fetcher = HttpFetcher::new(FetchConfig {
        timeout: cli.timeout.0,
        ..Default::default()
    })?;
    let scraper = ScraperManager::new(Arc::new(fetcher)).with_concurrency(cli.concurrency);

    if let Commands::Rules = cli.command {
        println!("Site rules (first match wins):");
        for rule in scraper.rules().rules() {
            println!("  - {}", rule.name());
        }
        return Ok(());
    }

    let summarizer = create_summarizer(&cli)?;

    match cli.command {
        Commands::Serve { bind } => {
            let app = create_app(AppState { scraper, summarizer });
            let listener = tokio::net::TcpListener::bind(bind).await?;
            info!("🚀 Listening on http://{}", bind);
            axum::serve(listener, app).await?;
        }
        Commands::Top { url, limit, lengths } => {
            let articles = scraper.get_top_news(&url, limit).await;
            if articles.is_empty() {
                return Err(Error::Fetch(format!("Could not fetch news articles from {}", url)));
            }
            let articles = summarizer.summarize_all(articles, lengths.into()).await;
            print_json(&TopNewsResponse {
                count: articles.len(),
                articles,
            })?;
        }
        Commands::Summarize { url, lengths } => {
            let article = scraper
                .scrape_article(&url)
                .await
                .ok_or_else(|| Error::ExtractionEmpty(url.clone()))?;
            let record = summarizer
                .summarize(&article, lengths.into())
                .await
                .ok_or_else(|| Error::Summarization(format!("Could not generate summary for {}", url)))?;
            print_json(&record)?;
        }
        Commands::Rules => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_duration() {
        assert_eq!(HumanDuration::from_str("10").unwrap().0, Duration::from_secs(10));
        assert_eq!(HumanDuration::from_str("1m30s").unwrap().0, Duration::from_secs(90));
        assert_eq!(HumanDuration::from_str("2h").unwrap().0, Duration::from_secs(7200));
        assert!(HumanDuration::from_str("5x").is_err());
        assert!(HumanDuration::from_str("").is_err());
    }

    #[test]
    fn test_human_duration_rejects_overflow() {
        assert!(HumanDuration::from_str("18446744073709551615h").is_err());
        assert!(HumanDuration::from_str("99999999999999999999").is_err());
        assert!(HumanDuration::from_str("18446744073709551615s1s").is_err());
        assert_eq!(HumanDuration::from_str("1m 30s").unwrap().0, Duration::from_secs(90));
        assert!(HumanDuration::from_str("m").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["nb", "top", "https://www.bbc.com/news"]).unwrap();
        assert_eq!(cli.model, "huggingface");
        assert_eq!(cli.timeout.0, Duration::from_secs(10));
        match cli.command {
            Commands::Top { url, limit, lengths } => {
                assert_eq!(url, "https://www.bbc.com/news");
                assert_eq!(limit, 50);
                assert_eq!(SummaryParams::from(lengths), SummaryParams::default());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_serve_bind() {
        let cli = Cli::try_parse_from(["nb", "--model", "dummy", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        assert_eq!(cli.model, "dummy");
        assert!(matches!(cli.command, Commands::Serve { bind } if bind.port() == 8080));
    }

    #[test]
    fn test_dummy_summarizer_builds() {
        let cli = Cli::try_parse_from(["nb", "--model", "dummy", "rules"]).unwrap();
        assert_eq!(create_summarizer(&cli).unwrap().model_name(), "Dummy");
    }
}
