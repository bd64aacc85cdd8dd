use chrono::{DateTime, Utc};

/// Human-readable date for display next to an upcoming product,
/// e.g. "Aug 20, 2025".
pub fn short_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_like_the_catalog_display() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 20, 0, 0, 0).unwrap();
        assert_eq!(short_date(ts), "Aug 20, 2025");

        let single_digit = Utc.with_ymd_and_hms(2025, 9, 1, 12, 30, 0).unwrap();
        assert_eq!(short_date(single_digit), "Sep 1, 2025");
    }
}
