use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Month names in the genitive case, as ru-RU long dates use them
fn month_name_genitive(month: u32) -> &'static str {
    match month {
        1 => "января", 2 => "февраля", 3 => "марта", 4 => "апреля",
        5 => "мая", 6 => "июня", 7 => "июля", 8 => "августа",
        9 => "сентября", 10 => "октября", 11 => "ноября", 12 => "декабря",
        _ => "января",
    }
}

/// Parse a server timestamp into wall-clock time.
///
/// Timestamps carrying an offset keep the time as written.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Format a transaction timestamp as "10 марта 2019 г. в 03:20".
///
/// Unparseable input is returned unchanged.
pub fn format_transaction_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(moment) => format!(
            "{} {} {} г. в {:02}:{:02}",
            moment.day(),
            month_name_genitive(moment.month()),
            moment.year(),
            moment.hour(),
            moment.minute()
        ),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_reference_timestamp() {
        assert_eq!(format_transaction_date("2019-03-10T03:20:41"), "10 марта 2019 г. в 03:20");
    }

    #[test]
    fn test_accepts_space_separator_and_fractions() {
        assert_eq!(format_transaction_date("2019-03-10 03:20:41"), "10 марта 2019 г. в 03:20");
        assert_eq!(format_transaction_date("2021-12-01T23:05:00.250"), "1 декабря 2021 г. в 23:05");
    }

    #[test]
    fn test_offset_timestamp_keeps_wall_clock_time() {
        assert_eq!(format_transaction_date("2025-06-12T23:08:42-04:00"), "12 июня 2025 г. в 23:08");
    }

    #[test]
    fn test_is_pure() {
        let first = format_transaction_date("2020-01-31T00:00:00");
        let second = format_transaction_date("2020-01-31T00:00:00");
        assert_eq!(first, second);
        assert_eq!(first, "31 января 2020 г. в 00:00");
    }

    #[test]
    fn test_unparseable_input_is_returned_unchanged() {
        assert_eq!(format_transaction_date("yesterday"), "yesterday");
        assert_eq!(format_transaction_date(""), "");
    }
}
