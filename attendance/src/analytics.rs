use serde::Serialize;

/// Attendance summary for one course, as rendered on the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseAttendance {
    pub course_name: String,
    /// Past sessions only; upcoming and active sessions don't count yet.
    pub total_sessions: u32,
    pub attended_sessions: u32,
    /// Percentage of past sessions attended, rounded to one decimal.
    pub percentage: f64,
}

impl CourseAttendance {
    pub fn new(course_name: impl Into<String>, total_sessions: u32, attended_sessions: u32) -> Self {
        Self {
            course_name: course_name.into(),
            total_sessions,
            attended_sessions,
            percentage: attendance_rate(attended_sessions, total_sessions),
        }
    }
}

/// Attended-over-total as a percentage. A course with no past sessions
/// reports 0.0 rather than dividing by zero.
pub fn attendance_rate(attended: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = f64::from(attended) / f64::from(total) * 100.0;
    (pct * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_past_sessions_is_zero_percent() {
        assert_eq!(attendance_rate(0, 0), 0.0);
    }

    #[test]
    fn rate_rounds_to_one_decimal() {
        assert_eq!(attendance_rate(2, 3), 66.7);
        assert_eq!(attendance_rate(1, 8), 12.5);
        assert_eq!(attendance_rate(8, 8), 100.0);
    }

    #[test]
    fn summary_carries_the_rate() {
        let summary = CourseAttendance::new("COS101", 10, 9);
        assert_eq!(summary.percentage, 90.0);
        assert_eq!(summary.course_name, "COS101");
    }
}
