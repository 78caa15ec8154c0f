use geofence::net;
use log::{debug, warn};

/// Network gate for a check-in attempt.
///
/// A session with no configured range places no restriction. Once a range is
/// configured everything ambiguous fails closed: a missing caller address, a
/// malformed address, or a range that is not valid CIDR all deny, and no parse
/// error escapes this function.
pub fn network_permitted(client_ip: Option<&str>, allowed_range: Option<&str>) -> bool {
    let Some(range) = allowed_range else {
        return true;
    };
    let Some(ip) = client_ip else {
        debug!("network gate: range configured but caller supplied no address, denying");
        return false;
    };

    match net::address_in_range(ip, range) {
        Ok(inside) => inside,
        Err(err) => {
            warn!("network gate: {err}, denying");
            false
        }
    }
}
