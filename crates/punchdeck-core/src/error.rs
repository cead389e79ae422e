//! Error types for Punchdeck

use thiserror::Error;

/// Main error type for Punchdeck operations
///
/// Routine conditions (navigating past either end, punching a full card,
/// a drag below the commit threshold, a wheel event inside the cooldown)
/// are guard checks, not errors.
#[derive(Error, Debug)]
pub enum DeckError {
    /// Either initial load failed; the deck cannot be shown
    #[error("Failed to load clubs: {0}")]
    DataLoad(String),

    /// Saving a punch count failed after all retries
    #[error("Failed to save punches for {card_id}: {reason}")]
    Persistence {
        /// Card whose count was being saved
        card_id: String,
        /// Underlying failure
        reason: String,
    },

    /// Invalid carousel configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON (configuration files)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DeckError
pub type DeckResult<T> = Result<T, DeckError>;
