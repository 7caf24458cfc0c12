//! Bulk import of word lists into the card store

use std::path::Path;

use anyhow::Context;

use crate::db::Database;
use crate::models::ImportSummary;

/// Import a JSON word list from disk.
pub async fn import_file(db: &Database, path: &Path) -> anyhow::Result<ImportSummary> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    import_str(db, &content).await
}

/// Import a JSON word list already held in memory.
pub async fn import_str(db: &Database, content: &str) -> anyhow::Result<ImportSummary> {
    let list = vocab_core::parse_word_list(content)?;
    if list.skipped > 0 {
        tracing::warn!(skipped = list.skipped, "Skipping incomplete word list entries");
    }

    let mut summary = db.import_words(&list.entries).await?;
    summary.skipped = list.skipped;

    tracing::info!(
        inserted = summary.inserted,
        updated = summary.updated,
        unchanged = summary.unchanged,
        skipped = summary.skipped,
        "Import done"
    );
    Ok(summary)
}
