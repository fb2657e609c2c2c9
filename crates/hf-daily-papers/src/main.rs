//! Hugging Face Daily Papers - Command line entry point
//!
//! Logs go to stderr so command output on stdout stays pipeable.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hf_daily_papers::formatters::{self, text};
use hf_daily_papers::models::{Paper, PaperDetails, resolve_lookup_id};
use hf_daily_papers::navigation::{DateNavigator, Direction, FeedDriver, Outcome, ViewStatus};
use hf_daily_papers::preferences::{Theme, ThemeStore};
use hf_daily_papers::{Config, PapersClient, arxiv, digest};

#[derive(Parser, Debug)]
#[command(name = "hf-papers")]
#[command(about = "Browse the Hugging Face daily papers feed")]
#[command(version)]
struct Cli {
    /// Papers API base URL
    #[arg(long, env = "HF_PAPERS_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "HF_PAPERS_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Output format
    #[arg(long, default_value = "markdown")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable Markdown
    #[default]
    Markdown,
    /// Compact JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Papers for a day (defaults to the API's latest day)
    Daily {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Maximum number of papers
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Latest day's papers sorted by upvotes
    Trending {
        /// Maximum number of papers
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Latest day's papers sorted by publish date
    Recent {
        /// Maximum number of papers
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Keyword search
    Search {
        /// Search terms
        query: String,
    },
    /// Paper details by arXiv ID or URL
    Paper {
        /// arXiv ID or arxiv.org URL
        id: String,
        /// Paper JSON already held (its fields win over fetched ones)
        #[arg(long)]
        held: Option<String>,
    },
    /// arXiv abstract and PDF links
    Links {
        /// arXiv ID or arxiv.org URL
        id: String,
    },
    /// Interactive day-by-day browsing (p = previous, n = next, r = refresh, q = quit)
    Browse {
        /// Starting date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Check whether today has new papers
    Digest,
    /// Show or change the theme preference
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ThemeAction {
    Show,
    Dark,
    Light,
    Toggle,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(secs) = cli.timeout_secs {
        config.request_timeout = Duration::from_secs(secs);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        "Starting hf-papers"
    );

    let client = PapersClient::new(config.clone())?;
    let format = cli.format;

    match cli.command {
        Command::Daily { date, limit } => {
            let daily = client
                .get_daily_papers(date, limit.unwrap_or(config.default_limit))
                .await?;
            let heading = date.map_or_else(
                || "Daily Papers".to_string(),
                |d| format!("Daily Papers {d}"),
            );
            print_papers(&heading, &daily.papers, format)?;
        }
        Command::Trending { limit } => {
            let papers = client
                .get_trending_papers(limit.unwrap_or(config.default_limit))
                .await?;
            print_papers("Trending", &papers, format)?;
        }
        Command::Recent { limit } => {
            let papers = client
                .get_recent_papers(limit.unwrap_or(config.default_limit))
                .await?;
            print_papers("Recent", &papers, format)?;
        }
        Command::Search { query } => {
            let papers = if query.trim().is_empty() {
                Vec::new()
            } else {
                client.search_papers(query.trim()).await?.papers
            };
            print_papers(&format!("Search: {}", query.trim()), &papers, format)?;
        }
        Command::Paper { id, held } => {
            show_paper(&client, &id, held.as_deref(), format).await?;
        }
        Command::Links { id } => {
            let id = arxiv::lookup_id(&id);
            if !arxiv::is_valid_id(&id) {
                tracing::warn!(%id, "Not a YYMM.NNNNN arXiv identifier; links may not resolve");
            }
            println!("{}", PapersClient::arxiv_url(&id));
            println!("{}", PapersClient::pdf_url(&id));
        }
        Command::Browse { date } => {
            browse(client, &config, date, format).await?;
        }
        Command::Digest => {
            let today = Local::now().date_naive();
            match digest::check_today(&client, today, config.default_limit).await {
                Ok(Some(note)) => match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&note)?),
                    OutputFormat::Markdown => println!("**{}**\n\n{}", note.title, note.body),
                },
                Ok(None) => println!("No new papers today."),
                Err(e) => {
                    tracing::error!(error = %e, "Daily paper check failed");
                    return Err(e.into());
                }
            }
        }
        Command::Theme { action } => {
            let store = ThemeStore::new(&config.theme_file);
            let theme = match action {
                ThemeAction::Show => store.load()?,
                ThemeAction::Toggle => store.toggle()?,
                ThemeAction::Dark => {
                    store.save(Theme::Dark)?;
                    Theme::Dark
                }
                ThemeAction::Light => {
                    store.save(Theme::Light)?;
                    Theme::Light
                }
            };
            println!("{theme}");
        }
    }

    Ok(())
}

fn print_papers(heading: &str, papers: &[Paper], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Markdown => {
            println!(
                "{}",
                formatters::format_papers_markdown(heading, papers, Utc::now())
            );
        }
        OutputFormat::Json => {
            let compact = formatters::compact_papers(papers);
            println!("{}", serde_json::to_string_pretty(&compact)?);
        }
    }
    Ok(())
}

async fn show_paper(
    client: &PapersClient,
    id: &str,
    held: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let held_value = held
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()?;
    let held_paper = held.map(PaperDetails::from_route_param).transpose()?;

    let id = arxiv::lookup_id(id);
    let lookup = resolve_lookup_id(held_paper.as_ref().map(|d| &d.paper), Some(&id))
        .ok_or_else(|| anyhow::anyhow!("no paper identifier given"))?;

    let fetched = client.get_paper_details(&lookup).await?;
    let details = match &held_value {
        Some(held) => fetched.merged_under(held)?,
        None => fetched,
    };

    match format {
        OutputFormat::Markdown => {
            println!("{}", formatters::format_details_markdown(&details));
            println!("{}", text::share_message(&details.paper));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details)?),
    }
    Ok(())
}

async fn browse(
    client: PapersClient,
    config: &Config,
    start: Option<NaiveDate>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let navigator = DateNavigator::starting_at(start.unwrap_or(today), today, config.floor_date);
    let mut driver = FeedDriver::new(Arc::new(client), navigator, config.default_limit);

    println!("Commands: p = previous day, n = next day, r = refresh/retry, q = quit");
    driver.load();
    render_status(driver.navigator(), format)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            outcome = driver.next_outcome(), if driver.navigator().in_flight().is_some() => {
                match outcome {
                    Outcome::Stale => {}
                    Outcome::Skipped(ticket) => {
                        println!("No papers, searching {}...", ticket.date);
                    }
                    _ => render_status(driver.navigator(), format)?,
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "q" | "quit" => break,
                    "p" | "prev" => step(&mut driver, Direction::Previous, format)?,
                    "n" | "next" => step(&mut driver, Direction::Next, format)?,
                    "r" | "refresh" => {
                        if driver.navigator().error().is_some() {
                            driver.retry();
                        } else {
                            driver.refresh();
                        }
                        render_status(driver.navigator(), format)?;
                    }
                    "" => {}
                    other => println!("Unknown command '{other}'"),
                }
            }
        }
    }

    Ok(())
}

fn step(
    driver: &mut FeedDriver<PapersClient>,
    direction: Direction,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if driver.navigate(direction) {
        render_status(driver.navigator(), format)
    } else {
        let bound = match direction {
            Direction::Previous => "earliest available",
            Direction::Next => "today's",
        };
        println!("Already at {bound} date.");
        Ok(())
    }
}

fn render_status(navigator: &DateNavigator, format: OutputFormat) -> anyhow::Result<()> {
    let date = navigator.current_date();
    match navigator.status() {
        ViewStatus::Loading => println!("[{date}] Loading papers..."),
        ViewStatus::Refreshing => println!("[{date}] Refreshing..."),
        ViewStatus::Searching => println!("[{date}] Searching for papers..."),
        ViewStatus::Empty => println!("[{date}] No papers available"),
        ViewStatus::Error(message) => println!("[{date}] {message} (r to retry)"),
        ViewStatus::Ready => {
            print_papers(&format!("Daily Papers {date}"), navigator.papers(), format)?;
        }
    }
    Ok(())
}
