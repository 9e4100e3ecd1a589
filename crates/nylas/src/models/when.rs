//! The temporal union used by event `when` fields.
//!
//! The wire shape is one of four objects selected by the `"object"`
//! discriminator:
//!
//! - `"time"` - a point in time (epoch seconds)
//! - `"timespan"` - a start/end interval (epoch seconds)
//! - `"date"` - a single all-day date
//! - `"datespan"` - an all-day date range

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::object_discriminator;

/// A point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    /// Unix timestamp, in seconds.
    pub time: i64,
    /// IANA timezone identifier, if the provider reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// A time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timespan {
    /// Start of the interval, Unix seconds.
    pub start_time: i64,
    /// End of the interval, Unix seconds.
    pub end_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_timezone: Option<String>,
}

/// A single all-day date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    /// The date, `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
}

/// An all-day date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datespan {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// An event's time specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum When {
    Time(Time),
    Timespan(Timespan),
    Date(Date),
    Datespan(Datespan),
}

impl When {
    /// The discriminator tag this shape carries on the wire.
    pub fn object(&self) -> &'static str {
        match self {
            Self::Time(_) => "time",
            Self::Timespan(_) => "timespan",
            Self::Date(_) => "date",
            Self::Datespan(_) => "datespan",
        }
    }

    /// Returns true for the two all-day shapes.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::Date(_) | Self::Datespan(_))
    }
}

impl<'de> Deserialize<'de> for When {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let tag = object_discriminator(&value).map_err(D::Error::custom)?;
        match tag {
            "time" => serde_json::from_value(value).map(Self::Time),
            "timespan" => serde_json::from_value(value).map(Self::Timespan),
            "date" => serde_json::from_value(value).map(Self::Date),
            "datespan" => serde_json::from_value(value).map(Self::Datespan),
            other => {
                return Err(D::Error::custom(format!(
                    "unknown `object` discriminator for when: {other:?}"
                )));
            }
        }
        .map_err(D::Error::custom)
    }
}

impl Serialize for When {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let inner = match self {
            Self::Time(v) => serde_json::to_value(v),
            Self::Timespan(v) => serde_json::to_value(v),
            Self::Date(v) => serde_json::to_value(v),
            Self::Datespan(v) => serde_json::to_value(v),
        }
        .map_err(serde::ser::Error::custom)?;

        let Value::Object(fields) = inner else {
            return Err(serde::ser::Error::custom("when shape is not an object"));
        };

        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        map.serialize_entry("object", self.object())?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
