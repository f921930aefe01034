//! CLI administration tool for link-shortener.
//!
//! Inspects and deactivates short links and checks the Redis store directly,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show a link's stored record
//! cargo run --bin admin -- link info aZ3kP9q
//!
//! # Deactivate a link (asks for confirmation)
//! cargo run --bin admin -- link deactivate aZ3kP9q
//!
//! # Check the Redis connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; `REDIS_URL` (or `REDIS_HOST`) is required.

use link_shortener::application::services::LinkService;
use link_shortener::config::{self, Config};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::RedisLinkRepository;
use link_shortener::server::build_link_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
    /// Inspect or deactivate short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show the stored record for a short code
    Info {
        /// Short code
        code: String,
    },

    /// Deactivate a short code
    Deactivate {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check the Redis connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set")?;

    let repository = RedisLinkRepository::connect(redis_url, &config.redis_key_prefix)
        .await
        .context("Failed to connect to Redis")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, repository).await?,
        Commands::Store { action } => handle_store_action(action, &repository).await?,
    }

    Ok(())
}

/// Dispatches link commands through the same service the server uses.
async fn handle_link_action(
    action: LinkAction,
    config: &Config,
    repository: RedisLinkRepository,
) -> Result<()> {
    let repository: Arc<dyn LinkRepository> = Arc::new(repository);
    let service = build_link_service(config, repository)?;

    let code = match &action {
        LinkAction::Info { code } | LinkAction::Deactivate { code, .. } => code,
    };
    if !config.code_generator()?.is_valid_code(code) {
        println!(
            "{}",
            "⚠️  Code does not match the configured CODE_LENGTH/CODE_ALPHABET".yellow()
        );
    }

    match action {
        LinkAction::Info { code } => show_link(&service, &code).await?,
        LinkAction::Deactivate { code, yes } => deactivate_link(&service, &code, yes).await?,
    }

    Ok(())
}

/// Prints a link record.
///
/// # Output Format
///
/// ```text
/// 🔗 Link aZ3kP9q
///
///   URL:       https://example.com/some/long/path
///   Short URL: https://s.example.com/aZ3kP9q
///   Clicks:    12
///   Status:    ACTIVE
/// ```
async fn show_link(service: &LinkService<dyn LinkRepository>, code: &str) -> Result<()> {
    let link = match service.get_info(code).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("⚠️  No link with code '{}'", code).yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Store error: {:?}", e)),
    };

    let status = if link.is_active {
        "ACTIVE".green()
    } else {
        "INACTIVE".red()
    };

    println!("{}", format!("🔗 Link {}", link.code).bright_blue().bold());
    println!();
    println!("  URL:       {}", link.url.cyan());
    println!(
        "  Short URL: {}",
        service.short_url(&link.code).bright_white()
    );
    println!(
        "  Clicks:    {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!("  Status:    {}", status);
    println!();

    Ok(())
}

/// Deactivates a link after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - Deactivation cannot be undone
async fn deactivate_link(
    service: &LinkService<dyn LinkRepository>,
    code: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔒 Deactivate Link".bright_blue().bold());
    println!();

    let link = match service.get_info(code).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("⚠️  No link with code '{}'", code).yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Store error: {:?}", e)),
    };

    if !link.is_active {
        println!("{}", "⚠️  This link is already inactive".yellow());
        return Ok(());
    }

    println!("  Code:   {}", link.code.cyan());
    println!("  URL:    {}", link.url.bright_black());
    println!("  Clicks: {}", link.clicks.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Deactivate this link? This cannot be undone")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .deactivate(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to deactivate link: {:?}", e))?;

    println!();
    println!("{}", "✅ Link deactivated".green().bold());
    println!();

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_store_action(action: StoreAction, repository: &RedisLinkRepository) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!("{}", "🔍 Checking Redis connection...".bright_blue());

            if repository.health_check().await {
                println!("{}", "✅ Redis connection OK".green().bold());
            } else {
                anyhow::bail!("Redis PING failed");
            }
        }
    }

    Ok(())
}
