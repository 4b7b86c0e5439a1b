// Timestamp validation for chapter start/end times.
use crate::error::{ChapterizeError, Result};
use regex::Regex;

/// Returns true if `s` is a `MM:SS` or `HH:MM:SS` timestamp. The leading
/// field may be one or two digits, later fields are exactly two; minutes and
/// seconds run 0-59, hours 0-23.
pub fn is_time_string(s: &str) -> bool {
    let re = Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?$").expect("Invalid regex");
    let Some(caps) = re.captures(s) else {
        return false;
    };
    match caps.get(3) {
        Some(seconds) => {
            field_in_range(&caps[1], 23)
                && field_in_range(&caps[2], 59)
                && field_in_range(seconds.as_str(), 59)
        }
        None => field_in_range(&caps[1], 59) && field_in_range(&caps[2], 59),
    }
}

/// Accept `token` as a timestamp or fail with the offending value.
pub fn validate(token: &str) -> Result<()> {
    if is_time_string(token) {
        Ok(())
    } else {
        Err(ChapterizeError::UnrecognizedTime(token.to_string()))
    }
}

fn field_in_range(field: &str, max: u32) -> bool {
    field.parse::<u32>().map_or(false, |v| v <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_seconds_form() {
        assert!(is_time_string("0:00"));
        assert!(is_time_string("12:34"));
        assert!(is_time_string("59:59"));
        assert!(!is_time_string("60:00"));
        assert!(!is_time_string("12:60"));
    }

    #[test]
    fn test_hours_form() {
        assert!(is_time_string("1:02:03"));
        assert!(is_time_string("02:15:24"));
        assert!(is_time_string("23:59:59"));
        assert!(!is_time_string("24:00:00"));
    }

    #[test]
    fn test_rejects_non_times() {
        assert!(!is_time_string("Supernatural"));
        assert!(!is_time_string("0:0"));
        assert!(!is_time_string("1:23:45:67"));
        assert!(!is_time_string("-1:00"));
        assert!(!is_time_string(""));
        assert!(!is_time_string("1:23 "));
    }

    #[test]
    fn test_validate_reports_token() {
        assert!(validate("0:04").is_ok());
        let err = validate("2:32.").unwrap_err();
        assert!(err.to_string().contains("2:32."));
    }
}
