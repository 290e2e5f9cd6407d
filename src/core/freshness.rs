//! Freshness filter validation.
//!
//! A freshness value is either one of the Brave shortcut codes (`pd`, `pw`,
//! `pm`, `py`) or an explicit range `YYYY-MM-DDtoYYYY-MM-DD`. Parsing happens
//! once into [`FreshnessToken`]; only date ranges are then checked against the
//! calendar.

use std::fmt;

use crate::provider::constants::brave::FRESHNESS_SHORTCUTS;

const RANGE_SEPARATOR: &str = "to";
const DATE_LEN: usize = "YYYY-MM-DD".len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    PastDay,
    PastWeek,
    PastMonth,
    PastYear,
}

impl Shortcut {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shortcut::PastDay => "pd",
            Shortcut::PastWeek => "pw",
            Shortcut::PastMonth => "pm",
            Shortcut::PastYear => "py",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "pd" => Some(Shortcut::PastDay),
            "pw" => Some(Shortcut::PastWeek),
            "pm" => Some(Shortcut::PastMonth),
            "py" => Some(Shortcut::PastYear),
            _ => None,
        }
    }
}

/// Calendar date as written in a range. Field order gives chronological `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    /// Strict `YYYY-MM-DD`: ASCII digits at fixed positions, `-` separators.
    fn parse_fields(raw: &str) -> Option<Self> {
        let bytes = raw.as_bytes();
        if bytes.len() != DATE_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        Some(Self {
            year: parse_digits(&raw[0..4])?,
            month: parse_digits(&raw[5..7])?,
            day: parse_digits(&raw[8..10])?,
        })
    }

    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Result of the single parse step over a raw freshness value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreshnessToken {
    Shortcut(Shortcut),
    DateRange {
        start: CalendarDate,
        end: CalendarDate,
    },
    Invalid,
}

impl FreshnessToken {
    /// Classifies by shape only. Calendar validity is checked by
    /// [`FreshnessToken::validate`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Some(shortcut) = Shortcut::from_code(trimmed) {
            return FreshnessToken::Shortcut(shortcut);
        }

        if trimmed.len() != DATE_LEN * 2 + RANGE_SEPARATOR.len()
            || !trimmed.is_char_boundary(DATE_LEN)
            || !trimmed.is_char_boundary(DATE_LEN + RANGE_SEPARATOR.len())
        {
            return FreshnessToken::Invalid;
        }

        let (start, rest) = trimmed.split_at(DATE_LEN);
        let Some(end) = rest.strip_prefix(RANGE_SEPARATOR) else {
            return FreshnessToken::Invalid;
        };

        match (CalendarDate::parse_fields(start), CalendarDate::parse_fields(end)) {
            (Some(start), Some(end)) => FreshnessToken::DateRange { start, end },
            _ => FreshnessToken::Invalid,
        }
    }

    /// Canonical value to forward upstream, `None` when the token is invalid.
    ///
    /// A range whose start equals its end is a valid single-day range.
    pub fn validate(&self) -> Option<String> {
        match self {
            FreshnessToken::Shortcut(shortcut) => Some(shortcut.as_str().to_string()),
            FreshnessToken::DateRange { start, end } => {
                if !start.is_valid() || !end.is_valid() || start > end {
                    return None;
                }
                Some(format!("{start}{RANGE_SEPARATOR}{end}"))
            }
            FreshnessToken::Invalid => None,
        }
    }
}

/// Normalizes a caller-supplied freshness filter.
///
/// Shortcut codes are lowercased; date ranges are returned as written. Any
/// other input yields `None`, which means the filter must be omitted.
pub fn normalize_freshness(value: Option<&str>) -> Option<String> {
    let value = value?;
    let normalized = FreshnessToken::parse(value).validate();
    if normalized.is_none() && !value.trim().is_empty() {
        tracing::debug!(freshness = value, "Rejected freshness filter");
    }
    normalized
}

/// Shortcut codes accepted by [`normalize_freshness`].
pub fn shortcut_codes() -> &'static [&'static str] {
    &FRESHNESS_SHORTCUTS
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn parse_digits<T: std::str::FromStr>(raw: &str) -> Option<T> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shortcut_is_case_insensitive() {
        assert_eq!(
            FreshnessToken::parse("Pm"),
            FreshnessToken::Shortcut(Shortcut::PastMonth)
        );
        assert_eq!(FreshnessToken::parse("pq"), FreshnessToken::Invalid);
    }

    #[test]
    fn test_parse_range_fields() {
        let token = FreshnessToken::parse("2023-11-05to2024-01-31");
        assert_eq!(
            token,
            FreshnessToken::DateRange {
                start: CalendarDate {
                    year: 2023,
                    month: 11,
                    day: 5
                },
                end: CalendarDate {
                    year: 2024,
                    month: 1,
                    day: 31
                },
            }
        );
    }

    #[test]
    fn test_parse_keeps_out_of_range_fields_for_validation() {
        // Shape is fine, so the month is only rejected by validate().
        let token = FreshnessToken::parse("2024-13-01to2024-01-31");
        assert!(matches!(token, FreshnessToken::DateRange { .. }));
        assert_eq!(token.validate(), None);
    }

    #[test]
    fn test_parse_rejects_malformed_shapes() {
        for raw in [
            "",
            "2024-1-01to2024-01-31",
            "2024-01-01TO2024-01-31",
            "2024-01-01 to 2024-01-31",
            "2024/01/01to2024/01/31",
            "2024-01-01to2024-01-3a",
            "+024-01-01to2024-01-31",
            "2024-01-01",
            "2024-01-01to",
            "2024-01-01é2024-01-31",
        ] {
            assert_eq!(FreshnessToken::parse(raw), FreshnessToken::Invalid, "{raw}");
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn test_calendar_date_display_round_trips_fields() {
        let date = CalendarDate {
            year: 2024,
            month: 3,
            day: 9,
        };
        assert_eq!(date.to_string(), "2024-03-09");
    }

    #[test]
    fn test_shortcut_codes() {
        assert_eq!(shortcut_codes(), &["pd", "pw", "pm", "py"]);
    }
}
