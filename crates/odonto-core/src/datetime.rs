use chrono::{Local, NaiveTime};

/// Today's date in the `yyyy-mm-dd` form the case forms use.
pub fn today_ymd() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Short clock label for message timestamps, e.g. `9:30 AM`.
pub fn clock_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

pub fn now_clock_label() -> String {
    clock_label(Local::now().time())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_label_drops_the_leading_zero() {
        let morning = NaiveTime::from_hms_opt(9, 30, 0).expect("time");
        assert_eq!(clock_label(morning), "9:30 AM");

        let afternoon = NaiveTime::from_hms_opt(14, 5, 0).expect("time");
        assert_eq!(clock_label(afternoon), "2:05 PM");
    }

    #[test]
    fn today_is_ymd_shaped() {
        let today = today_ymd();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}
