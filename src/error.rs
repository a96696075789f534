#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed input in {path} at line {line}: {message}")]
    MalformedRow {
        path: String,
        line: usize,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{resource} creation rejected with status {status}: {body}")]
    Rejected {
        resource: &'static str,
        status: u16,
        body: String,
    },

    #[error("{resource} response contains no uuid field")]
    MissingUuid { resource: &'static str },

    #[error("Observation file has no rows to take the encounter datetime from")]
    NoObservations,
}

pub type Result<T> = std::result::Result<T, ImportError>;
