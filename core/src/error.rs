use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandbookError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Base data unavailable: {0}")]
    MissingBaseData(String),

    #[error("Unparseable arrival date: '{value}'")]
    MalformedDate { value: String },

    #[error("Report export failed: {0}")]
    ExportFailure(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type HandbookResult<T> = Result<T, HandbookError>;
