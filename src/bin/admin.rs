//! CLI administration tool for shortlink.
//!
//! # Usage
//!
//! ```bash
//! # View link and visit counts
//! cargo run --bin admin -- stats
//!
//! # List the visits of one link
//! cargo run --bin admin -- visits 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show server version
//! cargo run --bin admin -- db info
//! ```
//!
//! Reads the same database variables as the server (`DATABASE_URL` or
//! `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`).

use shortlink::application::services::VisitService;
use shortlink::config::Config;
use shortlink::domain::repositories::{LinkRepository, VisitRepository};
use shortlink::infrastructure::persistence::{PgLinkRepository, PgVisitRepository};
use shortlink::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show link and visit counts
    Stats,

    /// List the visits recorded for a link
    Visits {
        /// Link id
        link_id: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(pool).await?,
        Commands::Visits { link_id } => handle_visits(pool, link_id).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints the number of stored links and recorded visits.
async fn handle_stats(pool: PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool);
    let links = PgLinkRepository::new(pool.clone());
    let visits = PgVisitRepository::new(pool);

    let (links_count, visits_count) = tokio::try_join!(links.count(), visits.count())
        .map_err(|e| anyhow::anyhow!("Failed to read counts: {e}"))?;

    println!(
        "  Links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Visits:  {}",
        visits_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints one line per visit of `link_id`.
async fn handle_visits(pool: PgPool, link_id: i64) -> Result<()> {
    let service = VisitService::new(Arc::new(PgVisitRepository::new(Arc::new(pool))));

    let visits = service
        .list_for_link(link_id)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    if visits.is_empty() {
        println!("{}", format!("No visits for link {link_id}").yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Visits for link {link_id}").bright_blue().bold()
    );
    println!();

    for visit in &visits {
        println!(
            "  {}  {}  {}  {}",
            visit.created_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
            visit.ip.bright_white(),
            visit.status,
            visit.user_agent.as_deref().unwrap_or("-")
        );
    }
    println!();
    println!("  Total: {}", visits.len().to_string().bright_green().bold());

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database connection check failed")?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
