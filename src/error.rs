//! Error types for color parsing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not a `#RRGGBB` hex triplet.
    #[error("Invalid hex color: {0}")]
    InvalidFormat(String),
}
