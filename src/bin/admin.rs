//! CLI administration tool for link-tracker.
//!
//! Works directly against the database through the same services the HTTP
//! API uses, so codes allocated here follow the same rules.
//!
//! # Usage
//!
//! ```bash
//! # Create a link (prompts for missing URLs)
//! cargo run --bin admin -- links create --white https://example.com/safe --black https://example.com/offer
//!
//! # List links
//! cargo run --bin admin -- links list --page 2
//!
//! # Statistics for one link
//! cargo run --bin admin -- links stats 42
//!
//! # Record a click by hand
//! cargo run --bin admin -- clicks record 42 --country US --bot
//!
//! # Overall summary
//! cargo run --bin admin -- summary
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use link_tracker::application::services::{ClickAggregator, LinkRegistry};
use link_tracker::config;
use link_tracker::domain::click_filter::ClickFilter;
use link_tracker::domain::entities::NewClick;
use link_tracker::domain::page::PageRequest;
use link_tracker::domain::repositories::{ClickRepository, LinkRepository};
use link_tracker::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use link_tracker::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-tracker.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Inspect and record clicks
    Clicks {
        #[command(subcommand)]
        action: ClickAction,
    },

    /// Show overall counts
    Summary,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links, newest first
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short = 's', long, default_value_t = 10)]
        page_size: u32,
    },

    /// Create a link with a generated code
    Create {
        /// Destination for regular visitors
        #[arg(short, long)]
        white: Option<String>,

        /// Alternate destination
        #[arg(short, long)]
        black: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show click statistics for a link
    Stats {
        /// Link id
        id: i64,
    },
}

/// Click subcommands.
#[derive(Subcommand)]
enum ClickAction {
    /// List clicks, newest first
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short = 's', long, default_value_t = 10)]
        page_size: u32,

        /// Exact country match
        #[arg(short, long)]
        country: Option<String>,

        /// Only bot (`true`) or only human (`false`) clicks
        #[arg(long)]
        bot: Option<bool>,
    },

    /// Append a click to a link
    Record {
        /// Link id
        link_id: i64,

        #[arg(long, default_value = "127.0.0.1")]
        ip: String,

        #[arg(long, default_value = "admin-cli")]
        user_agent: String,

        #[arg(short, long, default_value = "")]
        country: String,

        /// Mark the click as a bot visit
        #[arg(long)]
        bot: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

struct Services {
    links: LinkRegistry,
    clicks: ClickAggregator,
}

impl Services {
    fn new(pool: &PgPool) -> Self {
        let pool = Arc::new(pool.clone());
        let link_repository: Arc<dyn LinkRepository> =
            Arc::new(PgLinkRepository::new(pool.clone()));
        let click_repository: Arc<dyn ClickRepository> = Arc::new(PgClickRepository::new(pool));

        Self {
            links: LinkRegistry::new(link_repository.clone()),
            clicks: ClickAggregator::new(click_repository, link_repository),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &Services::new(&pool)).await?,
        Commands::Clicks { action } => handle_click_action(action, &Services::new(&pool)).await?,
        Commands::Summary => handle_summary(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, services: &Services) -> Result<()> {
    match action {
        LinkAction::List { page, page_size } => {
            list_links(services, PageRequest::new(page, page_size)).await?
        }
        LinkAction::Create { white, black, yes } => {
            create_link(services, white, black, yes).await?
        }
        LinkAction::Stats { id } => link_stats(services, id).await?,
    }

    Ok(())
}

/// Creates a link with interactive prompts for missing URLs.
async fn create_link(
    services: &Services,
    white: Option<String>,
    black: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let white_url = match white {
        Some(url) => url,
        None => Input::new().with_prompt("White URL").interact_text()?,
    };
    let black_url = match black {
        Some(url) => url,
        None => Input::new().with_prompt("Black URL").interact_text()?,
    };

    println!();
    println!("  White: {}", white_url.cyan());
    println!("  Black: {}", black_url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = services
        .links
        .create(white_url, black_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!("  ID:   {}", link.id.to_string().bright_white().bold());
    println!("  Code: {}", link.code.bright_yellow().bold());
    println!();

    Ok(())
}

/// Prints one page of links.
///
/// ```text
///   ID     Code     Created            White URL
///   ─────────────────────────────────────────────────────────
///   2      aB3xY9   2026-01-02 03:04   https://example.com/safe
/// ```
async fn list_links(services: &Services, page: PageRequest) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let (links, total) = services
        .links
        .list(page)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links on this page".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<6} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "White URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<6} {:<8} {:<18} {}",
            link.id.to_string().bright_black(),
            link.code.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.white_url
        );
    }

    println!();
    println!(
        "  Page {} ({} per page), total: {}",
        page.page,
        page.page_size,
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints totals and the country breakdown for one link.
async fn link_stats(services: &Services, id: i64) -> Result<()> {
    println!("{}", format!("📊 Link {id}").bright_blue().bold());
    println!();

    let stats = services
        .clicks
        .stats(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load stats: {}", e))?;

    println!(
        "  Clicks:      {}",
        stats.total_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Bot clicks:  {}",
        stats.bot_clicks.to_string().bright_green().bold()
    );
    println!();

    for entry in &stats.country_stats {
        let country = if entry.country.is_empty() {
            "(unknown)".to_string()
        } else {
            entry.country.clone()
        };
        println!("  {:<10} {}", country.cyan(), entry.count);
    }
    println!();

    Ok(())
}

/// Dispatches click commands.
async fn handle_click_action(action: ClickAction, services: &Services) -> Result<()> {
    match action {
        ClickAction::List {
            page,
            page_size,
            country,
            bot,
        } => {
            let filter = ClickFilter::new().with_country(country).with_is_bot(bot);
            list_clicks(services, filter, PageRequest::new(page, page_size)).await?
        }
        ClickAction::Record {
            link_id,
            ip,
            user_agent,
            country,
            bot,
        } => {
            let click = services
                .clicks
                .record_click(NewClick {
                    link_id,
                    ip,
                    user_agent,
                    country,
                    is_bot: bot,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to record click: {}", e))?;

            println!(
                "{} {}",
                "✅ Click recorded:".green().bold(),
                click.id.to_string().bright_white()
            );
        }
    }

    Ok(())
}

async fn list_clicks(services: &Services, filter: ClickFilter, page: PageRequest) -> Result<()> {
    println!("{}", "🖱  Clicks".bright_blue().bold());
    println!();

    let listing = services
        .clicks
        .list_clicks(filter, page)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list clicks: {}", e))?;

    println!(
        "  {:<6} {:<6} {:<8} {:<5} {:<18} {}",
        "ID".bright_white().bold(),
        "Link".bright_white().bold(),
        "Country".bright_white().bold(),
        "Bot".bright_white().bold(),
        "Time".bright_white().bold(),
        "IP".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for click in &listing.clicks {
        let bot = if click.is_bot { "yes".red() } else { "no".green() };
        println!(
            "  {:<6} {:<6} {:<8} {:<5} {:<18} {}",
            click.id.to_string().bright_black(),
            click.link_id,
            click.country.cyan(),
            bot,
            click
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            click.ip
        );
    }

    println!();
    println!(
        "  Matching: {}   Countries: {}",
        listing.total.to_string().bright_white().bold(),
        listing.countries.join(", ")
    );
    println!();

    Ok(())
}

/// Displays overall counts.
async fn handle_summary(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Summary".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
        .fetch_one(pool)
        .await?;

    let bot_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE is_bot")
        .fetch_one(pool)
        .await?;

    let countries_count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT country) FROM clicks")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:      {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:     {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!(
        "  Bot clicks: {}",
        bot_count.to_string().bright_green().bold()
    );
    println!(
        "  Countries:  {}",
        countries_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
