//! CLI administration tool for the book catalog.
//!
//! Manages the catalogue directly against the database, without going
//! through the HTTP server. Book creation runs the same workflow as the
//! web form, so the same rules and messages apply.
//!
//! # Usage
//!
//! ```bash
//! # List all books
//! cargo run --bin admin -- books list
//!
//! # Add a book (prompts for anything not given on the command line)
//! cargo run --bin admin -- books add --isbn 9780441013593 --title Dune
//!
//! # Show statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`): PostgreSQL connection

use book_catalog::application::services::book_service::fields;
use book_catalog::application::services::{BookService, CreateOutcome};
use book_catalog::config::Config;
use book_catalog::infrastructure::persistence::PgBookRepository;
use book_catalog::utils::params::RequestParams;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the book catalog.
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
    /// Manage books
    Books {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Book management subcommands.
#[derive(Subcommand)]
enum BookAction {
    /// List all books
    List,

    /// Add a book
    Add {
        /// 13-character ISBN
        #[arg(long)]
        isbn: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        /// Publication year
        #[arg(long)]
        year: Option<String>,

        /// Page count
        #[arg(long)]
        pages: Option<String>,

        /// Copies available for lending
        #[arg(long)]
        copies: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

type PgBookService = BookService<PgBookRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Books { action } => handle_book_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches book management commands.
async fn handle_book_action(action: BookAction, pool: &PgPool) -> Result<()> {
    let service = BookService::new(Arc::new(PgBookRepository::new(Arc::new(pool.clone()))));

    match action {
        BookAction::List => list_books(&service).await?,
        BookAction::Add {
            isbn,
            title,
            author,
            year,
            pages,
            copies,
            yes,
        } => {
            let values = [
                (fields::ISBN, "ISBN", isbn),
                (fields::TITLE, "Title", title),
                (fields::AUTHOR, "Author", author),
                (fields::PUBLICATION_YEAR, "Publication year", year),
                (fields::PAGE_COUNT, "Pages", pages),
                (fields::AVAILABLE_COPIES, "Copies available", copies),
            ];
            add_book(&service, values, yes).await?;
        }
    }

    Ok(())
}

/// Lists all books in a table.
async fn list_books(service: &PgBookService) -> Result<()> {
    println!("{}", "📚 Books".bright_blue().bold());
    println!();

    let books = service
        .list_books()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list books: {}", e))?;

    if books.is_empty() {
        println!("{}", "  No books found".yellow());
        println!();
        println!(
            "  Add one with: {} admin books add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<14} {:<30} {:<22} {:<5} {:<6} {:<6}",
        "ID".bright_white().bold(),
        "ISBN".bright_white().bold(),
        "Title".bright_white().bold(),
        "Author".bright_white().bold(),
        "Year".bright_white().bold(),
        "Pages".bright_white().bold(),
        "Copies".bright_white().bold()
    );
    println!("  {}", "─".repeat(94).bright_black());

    for book in &books {
        println!(
            "  {:<5} {:<14} {:<30} {:<22} {:<5} {:<6} {:<6}",
            book.id.to_string().bright_black(),
            book.isbn,
            book.title.cyan(),
            book.author,
            book.publication_year,
            book.page_count,
            book.available_copies
        );
    }

    println!();
    println!("  Total: {}", books.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Adds a book, prompting for any value not passed as a flag.
///
/// Values are submitted unchanged to the creation workflow, which reports
/// missing data, bad integers and rule violations exactly as the web form does.
async fn add_book(
    service: &PgBookService,
    values: [(&'static str, &'static str, Option<String>); 6],
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "➕ Add Book".bright_blue().bold());
    println!();

    let mut submitted = Vec::with_capacity(values.len());
    for (field, label, value) in values {
        let value = match value {
            Some(v) => v,
            None => Input::<String>::new()
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()?,
        };
        submitted.push((field, label, value));
    }

    println!();
    println!("{}", "Book details:".bright_white().bold());
    for (_, label, value) in &submitted {
        println!("  {:<18} {}", format!("{label}:"), value.cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Save this book?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let params: RequestParams = submitted
        .into_iter()
        .map(|(field, _, value)| (field, value))
        .collect();

    let outcome = service.create_book(&params).await;
    print_outcome(&outcome);

    if outcome.is_success() {
        Ok(())
    } else {
        anyhow::bail!("book was not saved ({})", outcome.kind())
    }
}

fn print_outcome(outcome: &CreateOutcome) {
    println!();
    match outcome {
        CreateOutcome::Created(_) => {
            println!("{}", format!("✅ {outcome}").green().bold());
        }
        CreateOutcome::ValidationFailed(findings) => {
            println!("{}", "❌ Invalid data:".red().bold());
            for finding in findings {
                println!("  • {}", finding.message.yellow());
            }
        }
        other => {
            println!("{}", format!("❌ {other}").red().bold());
        }
    }
    println!();
}

/// Displays catalogue statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let books_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;

    let copies_count: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(available_copies), 0)::BIGINT FROM books")
            .fetch_one(pool)
            .await?;

    let authors_count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT author) FROM books")
        .fetch_one(pool)
        .await?;

    println!(
        "  Books:            {}",
        books_count.to_string().bright_green().bold()
    );
    println!(
        "  Copies available: {}",
        copies_count.to_string().bright_green().bold()
    );
    println!(
        "  Authors:          {}",
        authors_count.to_string().bright_green().bold()
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
