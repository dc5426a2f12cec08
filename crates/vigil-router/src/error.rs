//! Router error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("No route matches path: {0}")]
    NoMatch(String),

    #[error("Redirect limit exceeded while resolving: {0}")]
    RedirectLoop(String),
}
