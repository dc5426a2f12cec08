//! The VIGIL route table
//!
//! One entry per dashboard view plus the device-details route (guarded
//! by device-id validation) and a catch-all that sends anything else
//! back to the dashboard. Declaration order matters: the catch-all
//! stays last.

use vigil_router::{validate_device_id, Result, RouteTable};

/// Destination names the view registry is keyed by
pub mod destination {
    pub const HOME: &str = "Home";
    pub const DASHBOARD: &str = "Dashboard";
    pub const LOGIN: &str = "Login";
    pub const REPORTS: &str = "Reports";
    pub const ALERTS: &str = "Alerts";
    pub const DEVICE_DETAILS: &str = "DeviceDetails";
    pub const NOTIFICATIONS: &str = "Notifications";
}

/// Where unmatched and rejected paths land
pub const FALLBACK_PATH: &str = "/dashboard";

/// Build the product route table
pub fn default_table() -> Result<RouteTable> {
    Ok(RouteTable::builder()
        .route("/", destination::HOME)?
        .route("/dashboard", destination::DASHBOARD)?
        .route("/login", destination::LOGIN)?
        .route("/reports", destination::REPORTS)?
        .route("/alerts", destination::ALERTS)?
        .guarded_route("/device/:id", destination::DEVICE_DETAILS, validate_device_id)?
        .route("/notifications", destination::NOTIFICATIONS)?
        .redirect("/*", FALLBACK_PATH)?
        .build())
}
