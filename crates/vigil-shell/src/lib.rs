//! VIGIL Shell
//!
//! State-owning half of the dashboard UI shell. The renderer is
//! stateless: it hands every requested path to [`Shell::navigate`] and
//! gets back the view to draw, the validated params, and the path that
//! actually resolved. The product route table, the view registry, and
//! the back/forward session history all live here to serve that call.

mod config;
mod error;
mod history;
mod routes;
mod shell;
mod views;

pub use config::ShellConfig;
pub use error::ShellError;
pub use history::{HistoryEntry, SessionHistory};
pub use routes::{default_table, destination, FALLBACK_PATH};
pub use shell::{NavigationOutcome, Shell};
pub use views::{View, ViewRegistry};

pub type Result<T> = std::result::Result<T, ShellError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
