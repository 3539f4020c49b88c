//! Client error types.

use steamglance_fetch::FetchError;
use thiserror::Error;

/// Errors from account-level client operations.
///
/// Poll results never carry errors; only setup checks return this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The transport failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Steam returned no player for the configured account.
    #[error("No player data returned for account {0}")]
    AccountNotFound(String),
}
