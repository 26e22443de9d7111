use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Renders a countdown as `m:ss`, e.g. `9:05`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_seconds_but_not_minutes() {
        assert_eq!(format_countdown(600), "10:00");
        assert_eq!(format_countdown(545), "9:05");
        assert_eq!(format_countdown(59), "0:59");
        assert_eq!(format_countdown(0), "0:00");
    }
}
