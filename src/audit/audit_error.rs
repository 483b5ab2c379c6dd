use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("HTTP Error Status Code = {0}")]
    HttpError(u16),

    #[error("Input file {0} has no `url` column")]
    MissingUrlColumn(PathBuf),

    #[error("Record for {url} is missing field `{field}`")]
    MissingField { url: String, field: String },

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    CsvError(#[from] csv::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
