//! Navigation guards
//!
//! A guard inspects the params captured for a matched route and either
//! lets navigation continue or substitutes a redirect target. Guards
//! are plain `fn` pointers attached to route entries at table build
//! time; there is no dynamic guard registration.

use serde::{Deserialize, Serialize};

use crate::pattern::Params;

/// Outcome of a guard evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path")]
pub enum Decision {
    /// Continue to the matched destination
    Proceed,
    /// Abort and resolve this path instead
    Redirect(String),
}

/// Guard function signature: inspect params, reach a decision
pub type GuardFn = fn(&Params) -> Decision;

/// Optional guard attached to a route entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// No validation, always proceed
    None,
    /// Run the function against the captured params
    Validate(GuardFn),
}

impl Guard {
    pub fn evaluate(&self, params: &Params) -> Decision {
        match self {
            Guard::None => Decision::Proceed,
            Guard::Validate(f) => f(params),
        }
    }
}

/// Smallest valid device identifier
pub const DEVICE_ID_MIN: i64 = 1;
/// Largest valid device identifier (the dashboard monitors 12 devices)
pub const DEVICE_ID_MAX: i64 = 12;

/// Where rejected device navigations land
const FALLBACK_PATH: &str = "/dashboard";

/// Guard for the device-details route
///
/// The `id` param must parse as a base-10 integer in
/// `DEVICE_ID_MIN..=DEVICE_ID_MAX`. Anything else (out of range,
/// non-numeric, missing) redirects to the dashboard rather than
/// surfacing an error to the user.
pub fn validate_device_id(params: &Params) -> Decision {
    let raw = params.get("id").map(String::as_str);
    tracing::debug!(id = ?raw, "Attempting device-details navigation");

    let id = raw.and_then(parse_leading_int);

    match id {
        Some(id) if (DEVICE_ID_MIN..=DEVICE_ID_MAX).contains(&id) => {
            tracing::debug!(id, "Valid device id, proceeding");
            Decision::Proceed
        }
        Some(id) => {
            tracing::debug!(id, "Device id out of range, redirecting to dashboard");
            Decision::Redirect(FALLBACK_PATH.to_string())
        }
        None => {
            tracing::debug!(id = ?raw, "Device id is not a number, redirecting to dashboard");
            Decision::Redirect(FALLBACK_PATH.to_string())
        }
    }
}

/// Parse the leading integer prefix of a string
///
/// Takes an optional sign followed by the longest run of ASCII digits,
/// so `"12abc"` parses to 12. No whitespace is skipped. Returns `None`
/// when no digits lead the string or the value overflows `i64`.
fn parse_leading_int(s: &str) -> Option<i64> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with_id(id: &str) -> Params {
        let mut params = Params::new();
        params.insert("id".to_string(), id.to_string());
        params
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("5"), Some(5));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        // No whitespace skipping
        assert_eq!(parse_leading_int(" 7"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_valid_ids_proceed() {
        for n in DEVICE_ID_MIN..=DEVICE_ID_MAX {
            let params = params_with_id(&n.to_string());
            assert_eq!(validate_device_id(&params), Decision::Proceed, "id {}", n);
        }
    }

    #[test]
    fn test_range_bounds() {
        // Inclusive upper bound, exclusive below 1
        assert_eq!(validate_device_id(&params_with_id("12")), Decision::Proceed);
        assert_eq!(
            validate_device_id(&params_with_id("0")),
            Decision::Redirect("/dashboard".to_string())
        );
        assert_eq!(
            validate_device_id(&params_with_id("13")),
            Decision::Redirect("/dashboard".to_string())
        );
        assert_eq!(
            validate_device_id(&params_with_id("-1")),
            Decision::Redirect("/dashboard".to_string())
        );
    }

    #[test]
    fn test_non_numeric_redirects() {
        assert_eq!(
            validate_device_id(&params_with_id("abc")),
            Decision::Redirect("/dashboard".to_string())
        );
        // Leading digits carry the value
        assert_eq!(
            validate_device_id(&params_with_id("12abc")),
            Decision::Proceed
        );
        assert_eq!(
            validate_device_id(&params_with_id("99bottles")),
            Decision::Redirect("/dashboard".to_string())
        );
    }

    #[test]
    fn test_missing_id_redirects() {
        assert_eq!(
            validate_device_id(&Params::new()),
            Decision::Redirect("/dashboard".to_string())
        );
    }

    #[test]
    fn test_guard_none_always_proceeds() {
        assert_eq!(Guard::None.evaluate(&Params::new()), Decision::Proceed);
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_string(&Decision::Redirect("/dashboard".to_string())).unwrap();
        assert_eq!(json, r#"{"type":"Redirect","path":"/dashboard"}"#);
    }
}
