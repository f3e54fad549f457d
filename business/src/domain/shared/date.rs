use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Timestamp formats accepted without an explicit offset. They are read as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date read from an external string representation.
///
/// Parsing never fails: a malformed input yields an invalid date, which
/// callers can detect with [`ParsedDate::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate(Option<DateTime<Utc>>);

impl ParsedDate {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
            return Self(Some(date_time.with_timezone(&Utc)));
        }

        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Self(Some(naive.and_utc()));
            }
        }

        let date_only = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());

        Self(date_only)
    }

    pub fn invalid() -> Self {
        Self(None)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn value(&self) -> Option<DateTime<Utc>> {
        self.0
    }
}

impl From<DateTime<Utc>> for ParsedDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(Some(value))
    }
}

impl std::fmt::Display for ParsedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(date_time) => write!(
                f,
                "{}",
                date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            None => write!(f, "Invalid Date"),
        }
    }
}

/// Valid dates serialize as ISO-8601 strings, invalid ones as `null`.
impl Serialize for ParsedDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(date_time) => serializer
                .serialize_str(&date_time.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_parse_rfc3339_timestamp() {
        let date = ParsedDate::parse("2024-01-15T10:00:00Z");

        assert!(date.is_valid());
        assert_eq!(
            date.value(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn should_normalize_offsets_to_utc() {
        let date = ParsedDate::parse("2024-01-15T12:00:00+02:00");

        assert_eq!(
            date.value(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn should_parse_naive_timestamp_with_fraction_as_utc() {
        let date = ParsedDate::parse("2024-03-02T08:30:15.250");

        let expected = Utc.with_ymd_and_hms(2024, 3, 2, 8, 30, 15).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(date.value(), Some(expected));
    }

    #[test]
    fn should_parse_date_only_as_utc_midnight() {
        let date = ParsedDate::parse("2024-01-15");

        assert_eq!(
            date.value(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn should_yield_invalid_date_when_malformed() {
        let date = ParsedDate::parse("not a date");

        assert!(!date.is_valid());
        assert_eq!(date, ParsedDate::invalid());
    }

    #[test]
    fn should_yield_invalid_date_when_empty() {
        assert!(!ParsedDate::parse("").is_valid());
    }

    #[test]
    fn should_serialize_valid_date_as_iso_string() {
        let date = ParsedDate::parse("2024-01-15T10:00:00Z");

        assert_eq!(
            serde_json::to_string(&date).unwrap(),
            "\"2024-01-15T10:00:00.000Z\""
        );
    }

    #[test]
    fn should_serialize_invalid_date_as_null() {
        assert_eq!(serde_json::to_string(&ParsedDate::invalid()).unwrap(), "null");
        assert_eq!(ParsedDate::invalid().to_string(), "Invalid Date");
    }
}
