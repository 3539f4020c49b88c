//! Core error types for `SteamGlance`.

use thiserror::Error;

/// Core error type for `SteamGlance` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required credential field is empty.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// The account id is not a positive 64-bit Steam id.
    #[error("Invalid Steam ID: {0}")]
    InvalidAccountId(String),
}
