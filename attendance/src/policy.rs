use geofence::GeoPoint;
use serde::{Deserialize, Serialize};

/// Where a session expects its students to be, and on which network.
///
/// Set once when the lecturer creates the session and handed to the validator
/// as plain data. The validator never reaches into storage for it, and never
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLocationPolicy {
    /// Registered session latitude. `None` means no location was configured
    /// and the location gate fails closed.
    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    /// Radius around the session location a student may check in from, meters.
    #[serde(default = "default_allowed_distance_m")]
    pub allowed_distance_m: f64,

    /// Optional CIDR allowlist, e.g. "10.0.0.0/24". `None` => no restriction.
    #[serde(default)]
    pub allowed_network_range: Option<String>,
}

impl Default for SessionLocationPolicy {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            allowed_distance_m: default_allowed_distance_m(),
            allowed_network_range: None,
        }
    }
}

impl SessionLocationPolicy {
    pub fn at(location: GeoPoint) -> Self {
        Self {
            latitude: Some(location.lat),
            longitude: Some(location.lon),
            ..Self::default()
        }
    }

    /// The registered session location, if both coordinates are present.
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn default_allowed_distance_m() -> f64 {
    50.0
}
