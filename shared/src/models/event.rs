use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Server-assigned event identifier. The feed uses numbers, but strings are accepted too.
///
/// Any JSON number is kept as sent, so `7.0` and ids past `i64::MAX` still
/// identify an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(Number),
    Text(String),
}

impl EventId {
    /// A zero id or a blank string id does not identify anything.
    pub fn is_present(&self) -> bool {
        match self {
            EventId::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
            EventId::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

/// A bookable sports event that passed admission.
///
/// `date` is local wall-clock time; the date filters compare calendar days
/// in the viewer's timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub sport: String,
    pub venue: String,
    pub date: NaiveDateTime,
    pub price: f64,
    pub image: String,
}

impl Event {
    /// Card-level recheck: a present id, non-blank title, sport, venue and
    /// image, and a valid price. `date` is not rechecked since it is always
    /// set on an `Event`.
    pub fn is_complete(&self) -> bool {
        self.id.is_present()
            && !self.title.trim().is_empty()
            && !self.sport.trim().is_empty()
            && !self.venue.trim().is_empty()
            && !self.image.trim().is_empty()
            && is_valid_price(self.price)
    }
}

/// Zero is rejected along with negatives and non-finite values.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Parses the feed's date strings into local wall-clock time.
///
/// Accepts RFC 3339 (converted to local time), naive ISO date-times
/// (taken as local) and bare dates (local midnight).
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
