//! Output formatting for search outcomes and expansions.

use kex_core::config::OutputFormat;
use kex_core::{Expansion, SearchOutcome};

/// Render an outcome for stdout.
///
/// `Text` prints the sentinel message or one matching line per row. `Json`
/// prints the sentinel as a JSON string or the matches as a JSON array.
pub fn render(outcome: &SearchOutcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome.to_string()),
        OutputFormat::Json => {
            let value = match outcome.message() {
                Some(message) => serde_json::Value::from(message),
                None => serde_json::Value::from(outcome.lines().to_vec()),
            };
            Ok(serde_json::to_string(&value)?)
        }
    }
}

/// Describe how a keyword was expanded, for `--explain`.
pub fn explain(keyword: &str, expansion: &Expansion<'_>) -> String {
    match expansion.genre {
        Some(genre) => format!(
            "{keyword:?} → genre [{}] ({} names): {}",
            genre.names.join(", "),
            expansion.names.len(),
            expansion.names.join(", ")
        ),
        None => format!("{keyword:?} → no genre, searching for the keyword itself"),
    }
}
