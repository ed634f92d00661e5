use thiserror::Error;

#[derive(Debug, Error)]
pub enum RigError {
    #[error("action must be one of: START, STOP, POWER_MODE (got '{0}')")]
    InvalidAction(String),

    #[error("{what} is required: use the {flag} flag. {hint}")]
    MissingSetting {
        what: &'static str,
        flag: &'static str,
        hint: &'static str,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode {what} response: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RigError>;
