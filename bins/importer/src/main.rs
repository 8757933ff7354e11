//! CSV book importer for Aklatan.
//!
//! Loads `id,title,author` rows (after a header row) into the books table,
//! creating the table first if needed.
//!
//! Usage: importer --db sqlite://aklatan.db?mode=rwc --csv books.csv

use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aklatan_db::{BookRepository, connect, import_csv, run_migrations};

/// Import books from a CSV file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Database URL to import into (e.g. `sqlite://aklatan.db?mode=rwc`).
    #[arg(long, env = "DATABASE_URL")]
    db: Option<String>,

    /// CSV file to import from.
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// Exit status when an input is missing, after printing help.
const USAGE_EXIT: u8 = 2;

impl Args {
    /// The database URL and CSV path, if both were given.
    fn inputs(self) -> Option<(String, PathBuf)> {
        Some((self.db?, self.csv?))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aklatan=info,importer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some((database_url, csv_path)) = Args::parse().inputs() else {
        Args::command().print_help()?;
        return Ok(ExitCode::from(USAGE_EXIT));
    };

    let file = File::open(&csv_path)
        .with_context(|| format!("Failed to open CSV file {}", csv_path.display()))?;

    let db = connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&db).await?;

    let repo = BookRepository::new(db);
    let summary = import_csv(BufReader::new(file), &repo)
        .await
        .with_context(|| format!("Failed to import {}", csv_path.display()))?;

    info!(inserted = summary.inserted, csv = %csv_path.display(), "Import complete");
    Ok(ExitCode::SUCCESS)
}
