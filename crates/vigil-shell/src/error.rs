//! Shell error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Router error: {0}")]
    Router(#[from] vigil_router::RouterError),

    #[error("No view registered for destination: {0}")]
    UnknownDestination(String),
}
