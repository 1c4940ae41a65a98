//! Domain errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketError {
    #[error("{0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("no user is logged in")]
    NotLoggedIn,
}

impl MarketError {
    pub fn validation(msg: impl Into<String>) -> Self {
        MarketError::Validation(msg.into())
    }

    pub fn bounty_not_found(id: &str) -> Self {
        MarketError::NotFound {
            kind: "bounty",
            id: id.to_string(),
        }
    }

    pub fn submission_not_found(id: &str) -> Self {
        MarketError::NotFound {
            kind: "submission",
            id: id.to_string(),
        }
    }
}

pub type MarketResult<T> = Result<T, MarketError>;
