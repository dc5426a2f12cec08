//! Path resolution
//!
//! `Resolver` drives one navigation to a terminal outcome: the global
//! guard logs the attempt, the table picks an entry, the entry's guard
//! reaches a Decision, and a Redirect re-enters the loop with the new
//! target. Guards run synchronously and in that fixed order.

use serde::{Deserialize, Serialize};

use crate::guard::Decision;
use crate::pattern::Params;
use crate::table::{RouteTable, RouteTarget};
use crate::{Result, RouterError};

/// Redirect depth cap; exceeding it means the table redirects in a
/// cycle, which is a configuration bug, not a runtime condition
pub const MAX_REDIRECTS: usize = 8;

/// Terminal outcome of a navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Name of the view to render
    pub destination: String,
    /// Params captured from the final path
    pub params: Params,
    /// The path that actually resolved (differs from the requested
    /// target after a redirect)
    pub path: String,
    /// The originally requested target, when a redirect replaced it
    pub redirected_from: Option<String>,
}

pub struct Resolver {
    table: RouteTable,
}

impl Resolver {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve a navigation from `origin` to `target`
    ///
    /// Redirects issued by guards re-enter the loop with the redirect
    /// target; the global guard runs again for each hop.
    pub fn resolve(&self, origin: &str, target: &str) -> Result<Resolution> {
        let mut path = target.to_string();
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let matched = self.table.match_path(&path)?;
            self.global_guard(origin, &path, &matched.params);

            let next = match matched.route.target() {
                // Redirect entries skip guard evaluation entirely
                RouteTarget::Redirect(next) => next.clone(),
                RouteTarget::View(name) => match matched.route.guard().evaluate(&matched.params) {
                    Decision::Proceed => {
                        return Ok(Resolution {
                            destination: name.clone(),
                            params: matched.params,
                            path,
                            redirected_from,
                        });
                    }
                    Decision::Redirect(next) => next,
                },
            };

            tracing::debug!(from = %path, to = %next, "Redirecting");
            redirected_from.get_or_insert_with(|| path.clone());
            path = next;
        }

        Err(RouterError::RedirectLoop(target.to_string()))
    }

    /// Advisory logging before any per-route guard; never blocks or
    /// redirects
    fn global_guard(&self, origin: &str, target: &str, params: &Params) {
        tracing::debug!(origin, target, params = ?params, "Navigation requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::validate_device_id;
    use crate::pattern::Params;

    use std::io;
    use std::sync::{Arc, Mutex};

    fn resolver() -> Resolver {
        let table = RouteTable::builder()
            .route("/", "Home")
            .unwrap()
            .route("/dashboard", "Dashboard")
            .unwrap()
            .route("/login", "Login")
            .unwrap()
            .guarded_route("/device/:id", "DeviceDetails", validate_device_id)
            .unwrap()
            .redirect("/*", "/dashboard")
            .unwrap()
            .build();
        Resolver::new(table)
    }

    #[test]
    fn test_literal_path_proceeds() {
        let resolution = resolver().resolve("/", "/login").unwrap();
        assert_eq!(resolution.destination, "Login");
        assert_eq!(resolution.path, "/login");
        assert!(resolution.redirected_from.is_none());
    }

    #[test]
    fn test_valid_device_proceeds() {
        let resolution = resolver().resolve("/dashboard", "/device/5").unwrap();
        assert_eq!(resolution.destination, "DeviceDetails");
        assert_eq!(resolution.params.get("id").map(String::as_str), Some("5"));
        assert!(resolution.redirected_from.is_none());
    }

    #[test]
    fn test_invalid_device_redirects() {
        for target in ["/device/0", "/device/13", "/device/abc", "/device/-1"] {
            let resolution = resolver().resolve("/", target).unwrap();
            assert_eq!(resolution.destination, "Dashboard", "target {}", target);
            assert_eq!(resolution.path, "/dashboard");
            assert_eq!(resolution.redirected_from.as_deref(), Some(target));
        }
    }

    #[test]
    fn test_unmatched_path_falls_back() {
        for target in ["/unknown", "/foo/bar", ""] {
            let resolution = resolver().resolve("/", target).unwrap();
            assert_eq!(resolution.destination, "Dashboard", "target {:?}", target);
            assert_eq!(resolution.path, "/dashboard");
            assert_eq!(resolution.redirected_from.as_deref(), Some(target));
        }
    }

    #[test]
    fn test_redirect_loop_detected() {
        fn bounce(_: &Params) -> Decision {
            Decision::Redirect("/ping".to_string())
        }
        fn bounce_back(_: &Params) -> Decision {
            Decision::Redirect("/pong".to_string())
        }

        let table = RouteTable::builder()
            .guarded_route("/pong", "Pong", bounce)
            .unwrap()
            .guarded_route("/ping", "Ping", bounce_back)
            .unwrap()
            .build();

        let result = Resolver::new(table).resolve("/", "/ping");
        assert!(matches!(result, Err(RouterError::RedirectLoop(_))));
    }

    #[test]
    fn test_redirect_target_re_resolves() {
        // Redirecting to /dashboard terminates: the entry is guard-free
        let resolution = resolver().resolve("/", "/device/99").unwrap();
        assert_eq!(resolution.destination, "Dashboard");
        assert!(resolution.params.is_empty());
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_global_guard_logs_before_route_guard() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(capture.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            resolver().resolve("/", "/device/3").unwrap();
        });

        let log = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        let global = log.find("Navigation requested").expect("global guard log");
        let route = log
            .find("Attempting device-details navigation")
            .expect("route guard log");
        assert!(global < route);
    }
}
