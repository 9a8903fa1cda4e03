use crate::domain::values::action::Action;
use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Layout of timestamps in the interaction log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub user_id: String,
    #[serde(serialize_with = "write_timestamp", deserialize_with = "read_timestamp")]
    pub timestamp: NaiveDateTime,
    pub action: Action,
    pub book_title: String,
}

impl InteractionEvent {
    /// New event stamped with the current local time, truncated to whole seconds.
    pub fn new(user_id: impl Into<String>, action: Action, book_title: impl Into<String>) -> Self {
        let now = Local::now().naive_local();
        Self {
            user_id: user_id.into(),
            timestamp: now.with_nanosecond(0).unwrap_or(now),
            action,
            book_title: book_title.into(),
        }
    }
}

fn write_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
}

fn read_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(d)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp '{raw}'")))
}

/// Accepts the log layout as well as ISO-8601 `T`-separated values, with or
/// without fractional seconds or a UTC offset. Offsets are dropped.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    [TIMESTAMP_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
