//! Ordered route table
//!
//! The table holds route entries in declaration order and answers one
//! question: which entry matches a concrete path, and with what
//! captured params. First match wins, so a catch-all entry belongs
//! last. Built once at startup, read-only afterwards.

use crate::error::RouterError;
use crate::guard::{Guard, GuardFn};
use crate::pattern::{Params, RoutePattern};
use crate::Result;

/// What a matched route resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Dispatch to the named view
    View(String),
    /// Abort and resolve this path instead; no guard, no params
    Redirect(String),
}

/// A pattern-to-target binding, optionally guarded
#[derive(Debug, Clone)]
pub struct Route {
    pattern: RoutePattern,
    target: RouteTarget,
    guard: Guard,
}

impl Route {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    /// Name of the view this route dispatches to, if it is not a
    /// redirect entry
    pub fn destination(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::View(name) => Some(name),
            RouteTarget::Redirect(_) => None,
        }
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }
}

/// Result of a successful table lookup
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: Params,
}

/// Immutable, ordered collection of routes
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Find the first route matching `path`
    ///
    /// Deterministic: a fixed table and path always yield the same
    /// entry. Fails with `NoMatch` only when the table carries no
    /// catch-all entry.
    pub fn match_path(&self, path: &str) -> Result<RouteMatch<'_>> {
        for route in &self.routes {
            if let Some(params) = route.pattern.match_path(path) {
                tracing::trace!(
                    path,
                    pattern = %route.pattern,
                    "Route matched"
                );
                return Ok(RouteMatch { route, params });
            }
        }

        Err(RouterError::NoMatch(path.to_string()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Whether a catch-all entry guarantees every path matches
    pub fn has_catch_all(&self) -> bool {
        self.routes.iter().any(|r| r.pattern.is_catch_all())
    }
}

/// Collects routes in declaration order, validating patterns as they
/// are added
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    /// Add an unguarded view route
    pub fn route(self, pattern: &str, destination: &str) -> Result<Self> {
        self.add(
            pattern,
            RouteTarget::View(destination.to_string()),
            Guard::None,
        )
    }

    /// Add a view route whose params are validated before entry
    pub fn guarded_route(self, pattern: &str, destination: &str, guard: GuardFn) -> Result<Self> {
        self.add(
            pattern,
            RouteTarget::View(destination.to_string()),
            Guard::Validate(guard),
        )
    }

    /// Add a redirect entry: any match resolves `to` instead
    pub fn redirect(self, pattern: &str, to: &str) -> Result<Self> {
        self.add(pattern, RouteTarget::Redirect(to.to_string()), Guard::None)
    }

    fn add(mut self, pattern: &str, target: RouteTarget, guard: Guard) -> Result<Self> {
        let pattern = RoutePattern::parse(pattern)?;
        self.routes.push(Route {
            pattern,
            target,
            guard,
        });
        Ok(self)
    }

    pub fn build(self) -> RouteTable {
        RouteTable {
            routes: self.routes,
        }
    }
}
