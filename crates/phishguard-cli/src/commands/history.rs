use anyhow::Result;
use chrono::Local;
use phishguard_core::HistoryStore;

const PREVIEW_LENGTH: usize = 60;

/// Prints past analyses, most recent first.
pub fn list(history: &HistoryStore) {
    if history.is_empty() {
        println!("No analysis history yet");
        return;
    }

    for record in history.all() {
        let when = record
            .created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S");
        let preview: String = record.input_text.chars().take(PREVIEW_LENGTH).collect();
        let ellipsis = if record.input_text.chars().count() > PREVIEW_LENGTH {
            "..."
        } else {
            ""
        };

        println!(
            "[{:>6}] {:>3}/100 {:5} {} {}{}",
            record.risk_level, record.score, record.input_type, when, preview, ellipsis
        );
    }
}

/// Deletes all past analyses.
pub fn clear(mut history: HistoryStore) -> Result<()> {
    history.clear()?;
    println!("Analysis history cleared");
    Ok(())
}
