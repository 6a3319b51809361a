use chrono::{Datelike, Months, NaiveDate};

/// Get current date in YYYY-MM-DD format
pub fn today_iso() -> String {
    today_naive().format("%Y-%m-%d").to_string()
}

/// Current date from the browser clock
pub fn today_naive() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    // JavaScript months are 0-indexed
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// First day of a "YYYY-MM" month tag, None when the tag is malformed
pub fn parse_month_start(month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").ok()
}

/// Format a "YYYY-MM" month tag for display (e.g., "Mar 2024")
pub fn format_month_short(month: &str) -> String {
    match parse_month_start(month) {
        Some(date) => date.format("%b %Y").to_string(),
        None => month.to_string(),
    }
}

/// Format a full "YYYY-MM-DD" date as a compact axis label (e.g., "Mar 24")
pub fn format_date_compact(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Walk a date back by whole months, clamping to the end of shorter months
pub fn months_back(from: NaiveDate, months: u32) -> NaiveDate {
    from.checked_sub_months(Months::new(months)).unwrap_or(from)
}

/// January 1st of the given date's year
pub fn start_of_year(of: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(of.year(), 1, 1).unwrap_or(of)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_tags_parse_to_their_first_day() {
        assert_eq!(parse_month_start("2024-03"), Some(date(2024, 3, 1)));
        assert_eq!(parse_month_start("2024"), None);
        assert_eq!(parse_month_start("garbage"), None);
        assert_eq!(parse_month_start(""), None);
    }

    #[test]
    fn display_format_is_short_month_and_year() {
        assert_eq!(format_month_short("2024-03"), "Mar 2024");
        assert_eq!(format_month_short("2023-12"), "Dec 2023");
    }

    #[test]
    fn malformed_month_tags_fall_through_unchanged() {
        assert_eq!(format_month_short("garbage"), "garbage");
    }

    #[test]
    fn compact_labels_use_two_digit_years() {
        assert_eq!(format_date_compact("2024-03-01"), "Mar 24");
        assert_eq!(format_date_compact("nonsense"), "nonsense");
    }

    #[test]
    fn months_back_clamps_to_shorter_months() {
        assert_eq!(months_back(date(2024, 3, 31), 1), date(2024, 2, 29));
        assert_eq!(months_back(date(2024, 8, 15), 12), date(2023, 8, 15));
    }

    #[test]
    fn start_of_year_is_january_first() {
        assert_eq!(start_of_year(date(2024, 8, 15)), date(2024, 1, 1));
    }
}
