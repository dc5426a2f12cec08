//! VIGIL Route Resolver
//!
//! Maps in-app paths to named view destinations:
//! 1. Global guard logs every navigation attempt
//! 2. Ordered route table, first match wins, wildcard fallback last
//! 3. Per-route guards validate extracted params or redirect
//!
//! The table is built once at startup and never mutated; resolution is
//! synchronous and deterministic.

mod error;
mod guard;
mod pattern;
mod resolver;
mod table;

pub use error::RouterError;
pub use guard::{validate_device_id, Decision, Guard, GuardFn, DEVICE_ID_MAX, DEVICE_ID_MIN};
pub use pattern::{Params, RoutePattern, Segment};
pub use resolver::{Resolution, Resolver, MAX_REDIRECTS};
pub use table::{Route, RouteMatch, RouteTable, RouteTableBuilder, RouteTarget};

pub type Result<T> = std::result::Result<T, RouterError>;
