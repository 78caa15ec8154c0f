pub mod geo;
pub mod net;

pub use geo::{GeoPoint, haversine_distance_m};
pub use net::address_in_range;
