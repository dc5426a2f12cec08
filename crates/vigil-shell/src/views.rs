//! View registry
//!
//! The shell never renders; it only maps a destination name the router
//! produced to a view descriptor the renderer understands. Table and
//! registry are built from the same destination constants, so a failed
//! lookup means they drifted apart, which is a bug rather than user
//! error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::routes::destination;

/// Renderable unit, identified by destination name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// Destination name the router resolves to
    pub name: String,
    /// Human-readable title for the shell chrome
    pub title: String,
}

impl View {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
        }
    }
}

/// Destination name → view descriptor
pub struct ViewRegistry {
    views: HashMap<String, View>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    pub fn register(&mut self, view: View) {
        self.views.insert(view.name.clone(), view);
    }

    pub fn get(&self, name: &str) -> Option<&View> {
        self.views.get(name)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl Default for ViewRegistry {
    /// Registry covering every destination in the product route table
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(View::new(destination::HOME, "Home"));
        registry.register(View::new(destination::DASHBOARD, "Device Dashboard"));
        registry.register(View::new(destination::LOGIN, "Sign In"));
        registry.register(View::new(destination::REPORTS, "Reports"));
        registry.register(View::new(destination::ALERTS, "Alerts"));
        registry.register(View::new(destination::DEVICE_DETAILS, "Device Details"));
        registry.register(View::new(destination::NOTIFICATIONS, "Notifications"));
        registry
    }
}
