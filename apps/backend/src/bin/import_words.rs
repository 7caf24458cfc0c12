use std::path::PathBuf;

use clap::Parser;

use vocab_trainer_backend::config::Config;

/// Import a JSON word list into the card store.
///
/// Cards are matched on (lt, category); matches get their translation and
/// pronunciation refreshed, everything else is inserted.
#[derive(Parser, Debug)]
#[command(name = "import-words", author, version, about)]
struct Args {
    /// JSON file holding an array of {lt, en, category, pronunciation} objects
    #[arg(default_value = "words.json")]
    file: PathBuf,

    /// Database to import into (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();
    vocab_trainer_backend::init_tracing();
    let mut config = Config::from_env()?;

    if let Some(url) = args.database_url {
        config.database_url = url;
    }
    // The import is the data source here, not the starter deck.
    config.seed_starter_cards = false;

    let db = vocab_trainer_backend::prepare_database(&config).await?;
    let summary = vocab_trainer_backend::services::import::import_file(&db, &args.file).await?;

    println!(
        "Import done. Inserted: {}, Updated: {}, Unchanged: {}, Skipped: {}",
        summary.inserted, summary.updated, summary.unchanged, summary.skipped
    );
    Ok(())
}
