/// Utilities for date formatting
///
/// Dates come from `<input type="date">` as "YYYY-MM-DD" (or empty) and are
/// shown day-first, the way the Vietnamese locale prints them.
use chrono::NaiveDate;

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-02-15" -> "15/02/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format a start/end pair: "15/02/2024 - 15/03/2024"
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-02-15"), "15/02/2024");
        assert_eq!(format_date("2024-03-01T08:00:00Z"), "01/03/2024");
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(
            format_date_range("2024-03-01", "2024-04-01"),
            "01/03/2024 - 01/04/2024"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2024-02-30"), "2024-02-30");
    }
}
