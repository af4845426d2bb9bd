use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lobby_seed::seeder::Seeder;
use lobby_store::{Database, SqliteStore};

/// Lobby Development Data Seeder
///
/// Populates a development store with one representative record per
/// entity type (user, post with comment, conversation with message,
/// notification). Re-running replaces the same documents in place.
#[derive(Parser, Debug)]
#[command(name = "lobby-seed")]
#[command(about = "Populate a Lobby development store with sample data", long_about = None)]
struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, env = "DATABASE_PATH", default_value = "./lobby.db")]
    database: String,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lobby_seed=info,lobby_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!(database = %args.database, "seeding development store");

    let db = Database::new(&args.database).context("Failed to open database")?;
    db.initialize().context("Failed to initialize store schema")?;

    let store = SqliteStore::new(db);
    let seeder = Seeder::new(&store);
    seeder.run_all()?;

    tracing::info!("sample data seeded successfully");
    Ok(())
}
