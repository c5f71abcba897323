//! CodeCamp CLI - Camp management from the terminal
//!
//! Thin client over the CodeCamp HTTP API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use tracing_subscriber::EnvFilter;

use api::{CampClient, CampRequest, CampResponse};
use config::Config;

#[derive(Parser)]
#[command(name = "codecamp")]
#[command(about = "CodeCamp CLI - Camp management", long_about = None)]
#[command(version)]
struct Cli {
    /// Log HTTP activity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API is reachable
    Health,

    /// Camp operations
    Camp {
        #[command(subcommand)]
        action: CampAction,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CampAction {
    /// List all camps
    List {
        /// Include talks and speakers
        #[arg(short, long)]
        talks: bool,
    },
    /// Show one camp
    Get {
        /// Camp moniker (e.g., "ATL2018")
        moniker: String,
    },
    /// Find camps starting on a date
    Search {
        /// Event date (YYYY-MM-DD)
        date: NaiveDate,
        /// Include talks and speakers
        #[arg(short, long)]
        talks: bool,
    },
    /// Create a camp (prompts for missing required values)
    Create {
        #[arg(short, long)]
        moniker: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Length in days
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..))]
        length: Option<i32>,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update the given fields of a camp
    Update {
        /// Camp moniker
        moniker: String,
        #[arg(short, long)]
        name: Option<String>,
        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Length in days
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..))]
        length: Option<i32>,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a camp
    Delete {
        /// Camp moniker
        moniker: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the API base URL
    SetUrl {
        /// e.g., "https://codecamp.shuttle.app"
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Health => cmd_health().await,
        Commands::Camp { action } => cmd_camp(action).await,
        Commands::Config { action } => cmd_config(action),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn client() -> Result<CampClient> {
    let config = Config::load()?;
    tracing::debug!("Using API at {}", config.base_url);
    Ok(CampClient::new(&config.base_url))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_health() -> Result<()> {
    let client = client()?;
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach the CodeCamp API. Check the base URL with `codecamp config show`.");
        }
    }
}

async fn cmd_camp(action: CampAction) -> Result<()> {
    let client = client()?;

    match action {
        CampAction::List { talks } => {
            let camps = client.list_camps(talks).await?;
            if camps.is_empty() {
                println!("{}", "No camps yet.".yellow());
            }
            for camp in &camps {
                print_camp(camp, talks);
            }
        }

        CampAction::Get { moniker } => {
            let camp = client.get_camp(&moniker).await?;
            print_camp(&camp, false);
        }

        CampAction::Search { date, talks } => {
            let camps = client.search_camps(date, talks).await?;
            if camps.is_empty() {
                println!("{}", format!("No camps on {}.", date).yellow());
            }
            for camp in &camps {
                print_camp(camp, talks);
            }
        }

        CampAction::Create {
            moniker,
            name,
            date,
            length,
            venue,
            description,
        } => {
            let moniker = match moniker {
                Some(m) => m,
                None => Input::new()
                    .with_prompt("Moniker")
                    .interact_text()
                    .context("Failed to read moniker")?,
            };
            let name = match name {
                Some(n) => n,
                None => Input::new()
                    .with_prompt("Name")
                    .interact_text()
                    .context("Failed to read name")?,
            };
            let date = match date {
                Some(d) => d,
                None => {
                    let raw: String = Input::new()
                        .with_prompt("Event date (YYYY-MM-DD)")
                        .interact_text()
                        .context("Failed to read event date")?;
                    raw.parse()
                        .with_context(|| format!("Invalid date: {}", raw))?
                }
            };

            let request = CampRequest {
                moniker: Some(moniker),
                name: Some(name),
                description,
                event_date: Some(date),
                length,
                venue,
            };

            let (location, camp) = client.create_camp(&request).await?;
            println!("{} Created {} at {}", "✓".green(), camp.moniker.bold(), location);
        }

        CampAction::Update {
            moniker,
            name,
            date,
            length,
            venue,
            description,
        } => {
            let request = CampRequest {
                moniker: None,
                name,
                description,
                event_date: date,
                length,
                venue,
            };

            let camp = client.update_camp(&moniker, &request).await?;
            println!("{} Updated {}", "✓".green(), camp.moniker.bold());
            print_camp(&camp, false);
        }

        CampAction::Delete { moniker, yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Delete camp {} and all its talks?", moniker))
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;

            if !confirmed {
                println!("{}", "Aborted.".yellow());
                return Ok(());
            }

            client.delete_camp(&moniker).await?;
            println!("{} Deleted {}", "✓".green(), moniker.bold());
        }
    }

    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", "CodeCamp CLI Configuration".bold());
            println!("  Config file: {:?}", Config::config_path()?);
            println!("  Base URL:    {}", config.base_url);
        }
        ConfigAction::SetUrl { url } => {
            let mut config = Config::load()?;
            config.set_base_url(&url)?;
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
    }
    Ok(())
}

fn print_camp(camp: &CampResponse, with_talks: bool) {
    let days = match camp.end_date {
        Some(end) if camp.length > 1 => format!(" to {} ({} days)", end, camp.length),
        _ => String::new(),
    };
    println!(
        "{}  {}  {}{}",
        camp.moniker.cyan().bold(),
        camp.name,
        camp.event_date,
        days
    );

    let place: Vec<&str> = [&camp.venue, &camp.location_city_town, &camp.location_country]
        .into_iter()
        .filter_map(|s| s.as_deref())
        .collect();
    if !place.is_empty() {
        println!("    {}", place.join(", ").dimmed());
    }
    if let Some(description) = &camp.description {
        println!("    {}", description);
    }

    if with_talks {
        for talk in &camp.talks {
            let speaker = talk
                .speaker
                .as_ref()
                .map(|s| format!(" - {} {}", s.first_name, s.last_name))
                .unwrap_or_default();
            println!("    • [{}] {}{}", talk.level, talk.title, speaker);
        }
    }
}
