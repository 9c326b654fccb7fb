use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use configuration::load_settings;
// Import database types directly from the database crate
use database::{CourseRepository, MySqlConnection, connect, server_version};
use report::{ReportDocument, print_summary, write_report};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// The main entry point for the course report generator.
#[tokio::main]
async fn main() {
    // Load environment variables from a .env file, if one exists.
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so they never interleave with the report table.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("\n📊 Course Report Generator\n");

    if let Err(e) = run(cli).await {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    println!("✓ Report generation completed successfully!\n");
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Generates a course enrollment report from the online courses database.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory the JSON report is written to.
    #[arg(long, default_value = "storage/reports")]
    reports_dir: PathBuf,
}

// ==============================================================================
// Error Classes
// ==============================================================================

/// User-facing failure classes. Each becomes a single `✗` line on stderr
/// and a non-zero exit.
#[derive(Debug, Error)]
enum AppError {
    #[error("Invalid database configuration: {0}")]
    Config(#[from] configuration::ConfigError),

    #[error("Error connecting to MySQL: {0}")]
    Connection(database::DbError),

    #[error("Error generating report: {0}")]
    Generation(#[from] GenerationError),
}

/// Anything that goes wrong after the session is established: the
/// aggregation query itself, or emitting the report artifacts.
#[derive(Debug, Error)]
enum GenerationError {
    #[error(transparent)]
    Query(#[from] database::DbError),

    #[error(transparent)]
    Output(#[from] report::ReportError),
}

// ==============================================================================
// Report Run Logic
// ==============================================================================

/// Handles one full report run: configure, connect, generate, close.
async fn run(cli: Cli) -> Result<(), AppError> {
    let settings = load_settings()?;

    let mut conn = connect(&settings).await.map_err(AppError::Connection)?;
    let version = server_version(&mut conn)
        .await
        .map_err(AppError::Connection)?;
    println!("✓ Connected to MySQL database: {version}");

    let outcome = generate(&mut conn, &cli.reports_dir).await;

    // The session is read-only; close it no matter how generation went.
    match database::close(conn).await {
        Ok(()) => println!("✓ Database connection closed"),
        Err(e) => tracing::warn!("database connection did not close cleanly: {e}"),
    }

    outcome.map_err(AppError::Generation)
}

/// Runs the aggregation query and emits both report artifacts: the
/// timestamped JSON file and the console summary.
async fn generate(conn: &mut MySqlConnection, reports_dir: &Path) -> Result<(), GenerationError> {
    let records = CourseRepository::new(conn).fetch_enrollment_stats().await?;

    let now = Local::now();
    let document = ReportDocument::build(records, now);

    let path = write_report(&document, reports_dir, now)?;
    print_summary(&document, &path);

    Ok(())
}
