use geofence::{GeoPoint, geo};
use log::debug;
use serde::Serialize;

use crate::policy::SessionLocationPolicy;

/// Why a check-in was denied beyond an ordinary out-of-range result, so the
/// caller can show the actual cause instead of a generic rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The session has no registered coordinates; the gate fails closed.
    NoLocationConfigured,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationCheck {
    pub within_range: bool,
    /// Measured distance rounded to two decimals for display.
    pub distance_m: f64,
    /// The radius actually compared against, after accuracy widening.
    pub effective_threshold_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenyReason>,
}

/// Decides whether a student's reported position is close enough to the
/// session's registered location.
///
/// A reported GPS accuracy radius widens the allowed distance rather than
/// penalising the student for an imprecise fix; zero or negative accuracy is
/// treated as absent. The threshold comparison happens on the unrounded
/// distance so a boundary case cannot flip on display rounding.
pub fn check_location(
    student: GeoPoint,
    policy: &SessionLocationPolicy,
    accuracy_m: Option<f64>,
) -> LocationCheck {
    let Some(session) = policy.location() else {
        debug!("location gate: session has no registered coordinates, denying");
        return LocationCheck {
            within_range: false,
            distance_m: 0.0,
            effective_threshold_m: policy.allowed_distance_m,
            reason: Some(DenyReason::NoLocationConfigured),
        };
    };

    let distance = geo::haversine_distance_m(student, session);

    let mut threshold = policy.allowed_distance_m;
    if let Some(acc) = accuracy_m {
        if acc > 0.0 {
            threshold += acc;
        }
    }

    let within_range = distance <= threshold;
    debug!(
        "location gate: {:.2}m from session against a {:.2}m threshold => {}",
        distance, threshold, within_range
    );

    LocationCheck {
        within_range,
        distance_m: geo::round_for_display(distance),
        effective_threshold_m: threshold,
        reason: None,
    }
}
