//! Shell front door
//!
//! `Shell` is the state container the renderer talks to: it owns the
//! resolver, the view registry, and the session history, and exposes
//! navigate / back / forward. Redirects are transparent to the caller;
//! the outcome always names the view that actually resolved.

use serde::Serialize;

use vigil_router::{Params, Resolver, RouteTable};

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::history::{HistoryEntry, SessionHistory};
use crate::routes::default_table;
use crate::views::{View, ViewRegistry};
use crate::Result;

/// What the renderer gets back from a navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationOutcome {
    /// The view to render
    pub view: View,
    /// Params captured from the final path
    pub params: Params,
    /// The path that resolved
    pub path: String,
    /// The originally requested target, when a redirect replaced it
    pub redirected_from: Option<String>,
}

pub struct Shell {
    config: ShellConfig,
    resolver: Resolver,
    views: ViewRegistry,
    history: SessionHistory,
}

impl Shell {
    /// Shell over the product route table and view registry
    pub fn new(config: ShellConfig) -> Result<Self> {
        let table = default_table()?;
        Ok(Self::with_parts(config, table, ViewRegistry::default()))
    }

    /// Shell over a custom table and registry
    pub fn with_parts(config: ShellConfig, table: RouteTable, views: ViewRegistry) -> Self {
        Self {
            config,
            resolver: Resolver::new(table),
            views,
            history: SessionHistory::new(),
        }
    }

    /// Navigate to the configured homepage
    pub fn start(&mut self) -> Result<NavigationOutcome> {
        let homepage = self.config.homepage.clone();
        self.navigate(&homepage)
    }

    /// Resolve `target` and record the visit
    pub fn navigate(&mut self, target: &str) -> Result<NavigationOutcome> {
        let origin = self.origin();
        let outcome = self.resolve_outcome(&origin, target)?;
        self.history.push(&outcome.path);
        Ok(outcome)
    }

    /// Step back in session history, re-resolving that entry
    ///
    /// Returns `Ok(None)` when there is nothing to go back to.
    pub fn back(&mut self) -> Result<Option<NavigationOutcome>> {
        let origin = self.origin();
        let path = match self.history.back() {
            Some(entry) => entry.path.clone(),
            None => return Ok(None),
        };
        self.resolve_outcome(&origin, &path).map(Some)
    }

    /// Step forward in session history, re-resolving that entry
    pub fn forward(&mut self) -> Result<Option<NavigationOutcome>> {
        let origin = self.origin();
        let path = match self.history.forward() {
            Some(entry) => entry.path.clone(),
            None => return Ok(None),
        };
        self.resolve_outcome(&origin, &path).map(Some)
    }

    /// The active history entry, if any navigation happened yet
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.history.current()
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    fn origin(&self) -> String {
        self.history
            .current()
            .map(|entry| entry.path.clone())
            .unwrap_or_else(|| self.config.homepage.clone())
    }

    fn resolve_outcome(&self, origin: &str, target: &str) -> Result<NavigationOutcome> {
        let resolution = self.resolver.resolve(origin, target)?;

        let view = self
            .views
            .get(&resolution.destination)
            .cloned()
            .ok_or_else(|| ShellError::UnknownDestination(resolution.destination.clone()))?;

        tracing::info!(
            target,
            path = %resolution.path,
            view = %view.name,
            "Navigation resolved"
        );

        Ok(NavigationOutcome {
            view,
            params: resolution.params,
            path: resolution.path,
            redirected_from: resolution.redirected_from,
        })
    }
}
