//! Error types for the users client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single exchange with the users API.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered {status}")]
    Status { status: StatusCode, url: String },

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response envelope has no `{field}` field")]
    MissingField { field: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Invalid API location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{input}`: {source}")]
    InvalidBaseUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL `{0}` cannot carry a path")]
    CannotBeABase(String),
}

/// Form input named a field drafts do not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown draft field `{0}`")]
pub struct UnknownField(pub String);
