use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// All user-facing timestamps and the registration-code clock use this zone.
pub const DISPLAY_TZ: Tz = chrono_tz::America::Sao_Paulo;

const BR_DATE_FORMAT: &str = "%d/%m/%Y";

/// Current wall-clock time in the display zone.
pub fn now_display() -> DateTime<Tz> {
    Utc::now().with_timezone(&DISPLAY_TZ)
}

pub fn parse_br_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), BR_DATE_FORMAT).ok()
}

pub fn format_br_date(date: NaiveDate) -> String {
    date.format(BR_DATE_FORMAT).to_string()
}

pub fn format_br_datetime(at: DateTime<Utc>) -> String {
    at.with_timezone(&DISPLAY_TZ)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// Serde adapter rendering date fields as DD/MM/YYYY at the boundary.
pub mod br_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_br_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_br_date(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid date '{s}', expected DD/MM/YYYY"))
        })
    }
}
