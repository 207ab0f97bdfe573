use chrono::{Local, NaiveDateTime};

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Local wall-clock time without an offset, e.g. `2024-05-01T09:30:00.123456`.
pub fn to_iso8601(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

pub fn now_iso8601() -> String {
    to_iso8601(now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_with_microseconds_and_no_offset() {
        let dt = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_micro_opt(8, 5, 3, 42)
            .unwrap();
        assert_eq!(to_iso8601(dt), "2030-01-01T08:05:03.000042");
    }

    #[test]
    fn now_parses_back() {
        let stamp = now_iso8601();
        assert!(NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}
