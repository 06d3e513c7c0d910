use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

// Application-wide errors surfaced by handlers
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Admin login required")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("Storage error")]
    StoreError(StoreError),
    #[error("Session error: {0}")]
    SessionError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Warning,
    Error,
}

/// A one-shot message shown on the next rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}
