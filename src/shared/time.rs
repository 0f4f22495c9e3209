//! Operator-facing time formats
//!
//! Instants and dates are kept as chrono types everywhere and only turned
//! into `DD.MM.YYYY HH:MM:SS` / `DD.MM.YYYY` text at the JSON boundary.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub fn format_wall_clock(dt: &NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

/// Formats an instant in the server's local time zone.
pub fn format_instant(dt: &DateTime<Utc>) -> String {
    format_wall_clock(&dt.with_timezone(&Local).naive_local())
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Accepts `DD.MM.YYYY[,] HH:MM[:SS]`, ISO `YYYY-MM-DDTHH:MM:SS` and RFC 3339.
pub fn parse_wall_clock(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    [
        "%d.%m.%Y %H:%M:%S",
        "%d.%m.%Y, %H:%M:%S",
        "%d.%m.%Y %H:%M",
        "%d.%m.%Y, %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
}

/// Accepts `DD.MM.YYYY` and ISO `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    [DATE_FORMAT, "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// `Option<DateTime<Utc>>` rendered as local `DD.MM.YYYY HH:MM:SS`.
pub mod instant_opt {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_some(&super::format_instant(dt)),
            None => serializer.serialize_none(),
        }
    }
}

/// `NaiveDateTime` rendered as `DD.MM.YYYY HH:MM:SS`.
pub mod wall_clock {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_wall_clock(value))
    }
}

/// Optional inbound `NaiveDateTime`; missing, null and blank are `None`.
pub mod wall_clock_opt {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_wall_clock(&raw).map(Some).ok_or_else(|| {
                de::Error::custom(format!("invalid timestamp '{}', expected DD.MM.YYYY HH:MM:SS", raw))
            }),
        }
    }
}

/// `Option<NaiveDate>` as `DD.MM.YYYY`, lenient on input.
pub mod date_opt {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_some(&super::format_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_date(&raw).map(Some).ok_or_else(|| {
                de::Error::custom(format!("invalid date '{}', expected DD.MM.YYYY", raw))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn formats_day_first() {
        assert_eq!(format_wall_clock(&at(2024, 3, 7, 9, 5, 1)), "07.03.2024 09:05:01");
        assert_eq!(
            format_date(&NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
            "31.12.2024"
        );
    }

    #[test]
    fn parses_operator_and_iso_forms() {
        let expected = at(2024, 3, 7, 9, 5, 1);
        assert_eq!(parse_wall_clock("07.03.2024 09:05:01"), Some(expected));
        assert_eq!(parse_wall_clock("2024-03-07T09:05:01"), Some(expected));
        assert_eq!(parse_wall_clock("2024-03-07T09:05:01+05:00"), Some(expected));
        assert_eq!(parse_wall_clock("07.03.2024 09:05"), Some(at(2024, 3, 7, 9, 5, 0)));
        assert_eq!(parse_wall_clock("07.03.2024, 09:05:01"), Some(expected));
        assert_eq!(parse_wall_clock("yesterday"), None);
    }

    #[test]
    fn parses_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(parse_date("15.01.2025"), Some(expected));
        assert_eq!(parse_date("2025-01-15"), Some(expected));
        assert_eq!(parse_date("15/01/2025"), None);
    }

    #[test]
    fn instant_is_rendered_in_operator_format() {
        let rendered = format_instant(&Utc::now());
        // DD.MM.YYYY HH:MM:SS
        assert_eq!(rendered.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&rendered, DATE_TIME_FORMAT).is_ok());
    }
}
