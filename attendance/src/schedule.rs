use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Upcoming,
    Active,
    Past,
}

/// When a session runs. Students may only check in while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionWindow {
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl SessionWindow {
    pub fn new(starts_at: DateTime<Utc>, duration_minutes: i64) -> Self {
        Self {
            starts_at,
            duration_minutes,
        }
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.starts_at + Duration::minutes(self.duration_minutes)
    }

    /// Status at `now`. Both boundaries count as in-session.
    pub fn status(&self, now: DateTime<Utc>) -> SessionStatus {
        if now < self.starts_at {
            SessionStatus::Upcoming
        } else if now <= self.ends_at() {
            SessionStatus::Active
        } else {
            SessionStatus::Past
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn lecture() -> SessionWindow {
        let start = Utc.with_ymd_and_hms(2025, 9, 8, 10, 0, 0).unwrap();
        SessionWindow::new(start, 50)
    }

    #[test]
    fn before_start_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2025, 9, 8, 9, 59, 59).unwrap();
        assert_eq!(lecture().status(now), SessionStatus::Upcoming);
    }

    #[test]
    fn boundaries_are_active() {
        let s = lecture();
        assert_eq!(s.status(s.starts_at), SessionStatus::Active);
        assert_eq!(s.status(s.ends_at()), SessionStatus::Active);
    }

    #[test]
    fn after_end_is_past() {
        let now = Utc.with_ymd_and_hms(2025, 9, 8, 10, 50, 1).unwrap();
        assert_eq!(lecture().status(now), SessionStatus::Past);
    }
}
