pub mod analytics;
pub mod location;
pub mod network;
pub mod policy;
pub mod schedule;
pub mod verify;

pub use location::DenyReason;
pub use policy::SessionLocationPolicy;
pub use verify::{CheckInAttempt, CheckInVerification, verify_check_in};
