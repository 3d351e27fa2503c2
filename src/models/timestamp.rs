//! Second-precision local timestamps stored as `YYYY-MM-DD HH:MM:SS`

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

/// Format used for every timestamp in the journal file
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, truncated to whole seconds
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
}

/// Nullable variant, written as `null` when absent
pub mod option {
    use super::FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.collect_str(&dt.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => NaiveDateTime::parse_from_str(&raw, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_has_no_subsecond_part() {
        assert_eq!(now().nanosecond(), 0);
    }

    #[test]
    fn test_format_matches_journal_layout() {
        let dt = NaiveDateTime::parse_from_str("2024-03-05 07:08:09", FORMAT).unwrap();
        assert_eq!(dt.format(FORMAT).to_string(), "2024-03-05 07:08:09");
    }
}
