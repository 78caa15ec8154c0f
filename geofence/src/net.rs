use ipnet::IpNet;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkRuleError {
    #[error("malformed network range '{0}': expected CIDR notation")]
    MalformedRange(String),
    #[error("malformed network address '{0}'")]
    MalformedAddress(String),
}

/// Tests whether `address` falls inside the CIDR `range`.
///
/// IPv4 and IPv6 literals are both accepted, but no family reconciliation is
/// attempted: a v4-mapped v6 literal is treated as v6 and never matches a v4
/// range. The range must carry a prefix length; a bare address does not parse.
pub fn address_in_range(address: &str, range: &str) -> Result<bool, NetworkRuleError> {
    let net: IpNet = range
        .trim()
        .parse()
        .map_err(|_| NetworkRuleError::MalformedRange(range.to_string()))?;
    let addr: IpAddr = address
        .trim()
        .parse()
        .map_err(|_| NetworkRuleError::MalformedAddress(address.to_string()))?;

    Ok(net.contains(&addr))
}
