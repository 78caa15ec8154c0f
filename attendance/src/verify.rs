use geofence::GeoPoint;
use serde::Serialize;

use crate::location::{self, DenyReason};
use crate::network;
use crate::policy::SessionLocationPolicy;

/// One student's claimed position and network at the moment of check-in.
///
/// Values arrive from the browser as reported; there is no attestation of the
/// coordinates or the accuracy figure.
#[derive(Debug, Clone, Copy)]
pub struct CheckInAttempt<'a> {
    pub location: GeoPoint,
    /// Reported GPS accuracy radius in meters, if the client supplied one.
    pub accuracy_m: Option<f64>,
    pub client_ip: Option<&'a str>,
}

/// Everything the caller needs to admit, deny and explain one check-in.
///
/// Both gate results are surfaced separately so "too far away" and "wrong
/// network" stay distinguishable in the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckInVerification {
    pub within_range: bool,
    /// Measured distance rounded to two decimals for display.
    pub distance_m: f64,
    pub network_valid: bool,
    /// The radius the distance was actually compared against.
    pub effective_threshold_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenyReason>,
}

impl CheckInVerification {
    /// Final admission: both gates must pass.
    pub fn permitted(&self) -> bool {
        self.within_range && self.network_valid
    }
}

/// Decides one check-in attempt against one session's policy.
///
/// Pure and synchronous: no I/O, no shared state, safe to call from any number
/// of concurrent requests. Persisting the attendance record, and the rule that
/// a student marks a session at most once, stay with the caller.
pub fn verify_check_in(
    attempt: &CheckInAttempt,
    policy: &SessionLocationPolicy,
) -> CheckInVerification {
    let loc = location::check_location(attempt.location, policy, attempt.accuracy_m);
    let network_valid =
        network::network_permitted(attempt.client_ip, policy.allowed_network_range.as_deref());

    CheckInVerification {
        within_range: loc.within_range,
        distance_m: loc.distance_m,
        network_valid,
        effective_threshold_m: loc.effective_threshold_m,
        reason: loc.reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_gates_must_pass() {
        let mut policy = SessionLocationPolicy::at(GeoPoint::new(18.0060, -76.7468));
        policy.allowed_distance_m = 100.0;
        policy.allowed_network_range = Some("10.0.0.0/24".to_string());

        let attempt = CheckInAttempt {
            location: GeoPoint::new(18.0060, -76.7468),
            accuracy_m: None,
            client_ip: Some("10.0.1.42"),
        };

        let res = verify_check_in(&attempt, &policy);
        assert!(res.within_range, "location gate should pass");
        assert!(!res.network_valid, "network gate should fail");
        assert!(!res.permitted());
    }
}
