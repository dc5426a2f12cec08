//! Route pattern parsing and path matching
//!
//! Patterns are absolute paths whose segments are either literals
//! (`/dashboard`), named parameters (`/device/:id`), or a trailing
//! wildcard (`/*`). Parsing and validation happen once when the table
//! is built; matching a concrete path is a plain segment walk.

use std::collections::BTreeMap;

use crate::error::RouterError;
use crate::Result;

/// Captured parameter values, keyed by parameter name
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly
    Literal(String),
    /// Captures exactly one non-empty path segment under this name
    Param(String),
    /// Consumes the entire remaining path, captures nothing
    Wildcard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse and validate a pattern string
    ///
    /// Rules: the pattern must start with `/`, parameter names must be
    /// non-empty, `*` must be its own segment and must come last, and
    /// empty segments are rejected. A single trailing slash is ignored.
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = |reason: &str| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let mut segments = Vec::new();
        let raw_segments: Vec<&str> = match rest {
            "" => Vec::new(),
            _ => rest.split('/').collect(),
        };

        // "/dashboard/" declares the same route as "/dashboard"
        let raw_segments = match raw_segments.split_last() {
            Some((last, init)) if last.is_empty() => init,
            _ => &raw_segments[..],
        };

        for (i, seg) in raw_segments.iter().enumerate() {
            if seg.is_empty() {
                return Err(invalid("empty segment"));
            }

            if *seg == "*" {
                if i != raw_segments.len() - 1 {
                    return Err(invalid("wildcard must be the last segment"));
                }
                segments.push(Segment::Wildcard);
            } else if let Some(name) = seg.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter segment needs a name"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(seg.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern string as declared
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this pattern is a pure catch-all (`/*`)
    pub fn is_catch_all(&self) -> bool {
        self.segments == [Segment::Wildcard]
    }

    /// Match a concrete path, capturing named parameters
    ///
    /// Returns `None` if the path does not fit this pattern. A pure
    /// catch-all matches any input at all, including strings that are
    /// not well-formed paths (empty, missing the leading slash).
    pub fn match_path(&self, path: &str) -> Option<Params> {
        let segments = match split_path(path) {
            Some(segments) => segments,
            // Not an absolute path; only the catch-all accepts it
            None => return self.is_catch_all().then(Params::new),
        };

        let mut params = Params::new();
        let mut remaining = &segments[..];

        for segment in &self.segments {
            match segment {
                Segment::Wildcard => return Some(params),
                Segment::Literal(lit) => {
                    let (head, tail) = remaining.split_first()?;
                    if *head != lit.as_str() {
                        return None;
                    }
                    remaining = tail;
                }
                Segment::Param(name) => {
                    let (head, tail) = remaining.split_first()?;
                    if head.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), head.to_string());
                    remaining = tail;
                }
            }
        }

        remaining.is_empty().then_some(params)
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Split an absolute path into segments, ignoring one trailing slash
///
/// Returns `None` for inputs that are not absolute paths (empty string
/// or missing leading `/`); those only ever match the catch-all.
fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;

    let mut segments: Vec<&str> = match rest {
        "" => Vec::new(),
        _ => rest.split('/').collect(),
    };

    if segments.last() == Some(&"") {
        segments.pop();
    }

    Some(segments)
}
