use crate::audit::AuditError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct UrlRow {
    url: Option<String>,
}

/// Reads the `url` column of a CSV file. Other columns are ignored and blank
/// cells skipped.
pub fn read_urls(path: &Path) -> Result<Vec<String>, AuditError> {
    let mut reader = csv::Reader::from_path(path)?;
    if !reader.headers()?.iter().any(|header| header == "url") {
        return Err(AuditError::MissingUrlColumn(path.to_path_buf()));
    }

    let mut urls = Vec::new();
    for row in reader.deserialize::<UrlRow>() {
        if let Some(url) = row?.url.map(|url| url.trim().to_owned()) {
            if !url.is_empty() {
                urls.push(url);
            }
        }
    }
    debug!("Read {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}
