//! Digital clock formatting

use chrono::{Local, NaiveTime, Timelike};

/// Render a wall-clock time as `HH:MM`
pub fn format_clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Current local time as `HH:MM`
pub fn local_clock() -> String {
    format_clock(Local::now().time())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_hours_and_minutes() {
        let time = NaiveTime::from_hms_opt(7, 4, 59).unwrap();
        assert_eq!(format_clock(time), "07:04");
        let time = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        assert_eq!(format_clock(time), "23:59");
    }

    #[test]
    fn local_clock_is_five_chars() {
        let now = local_clock();
        assert_eq!(now.len(), 5);
        assert_eq!(&now[2..3], ":");
    }
}
