use chrono::NaiveTime;

/// Time-of-day format shared by intake, config, and the schedule output.
pub const TIME_FORMAT: &str = "%H:%M:%S";

pub fn default_initial_departure() -> NaiveTime {
    NaiveTime::from_hms_opt(6, 0, 0).expect("valid static default departure")
}
