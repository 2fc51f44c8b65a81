use crate::error::SharedError;
use crate::models::event::{is_valid_price, parse_event_date, Event, EventId};
use serde::{Deserialize, Serialize};

/// Wire shape of one `/api/events` element.
///
/// Every field is optional here; admission into [`Event`] is where
/// completeness is enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// ISO date or date-time string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn required_text(value: Option<String>, field: &str) -> Result<String, SharedError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(SharedError::MissingField(field.to_string())),
    }
}

impl TryFrom<EventDto> for Event {
    type Error = SharedError;

    /// The admission predicate: all seven fields present and non-empty,
    /// a parseable date, and a price greater than zero.
    fn try_from(dto: EventDto) -> Result<Self, Self::Error> {
        let id = dto
            .id
            .filter(EventId::is_present)
            .ok_or_else(|| SharedError::MissingField("id".to_string()))?;
        let title = required_text(dto.title, "title")?;
        let sport = required_text(dto.sport, "sport")?;
        let venue = required_text(dto.venue, "venue")?;
        let raw_date = required_text(dto.date, "date")?;
        let date = parse_event_date(&raw_date).ok_or_else(|| SharedError::InvalidField {
            field: "date".to_string(),
            reason: format!("'{}' is not an ISO date", raw_date),
        })?;
        let price = dto
            .price
            .ok_or_else(|| SharedError::MissingField("price".to_string()))?;
        if !is_valid_price(price) {
            return Err(SharedError::InvalidField {
                field: "price".to_string(),
                reason: format!("{} is not a positive amount", price),
            });
        }
        let image = required_text(dto.image, "image")?;

        Ok(Event {
            id,
            title,
            sport,
            venue,
            date,
            price,
            image,
        })
    }
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id: Some(event.id.clone()),
            title: Some(event.title.clone()),
            sport: Some(event.sport.clone()),
            venue: Some(event.venue.clone()),
            date: Some(event.date.format("%Y-%m-%dT%H:%M:%S").to_string()),
            price: Some(event.price),
            image: Some(event.image.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn complete() -> EventDto {
        EventDto {
            id: Some(EventId::Number(3.into())),
            title: Some("Yankees vs Red Sox".to_string()),
            sport: Some("baseball".to_string()),
            venue: Some("Yankee Stadium".to_string()),
            date: Some("2026-10-21T19:05:00".to_string()),
            price: Some(65.0),
            image: Some("https://img.example.com/yankees.jpg".to_string()),
        }
    }

    #[test]
    fn test_complete_dto_is_admitted() {
        let event = Event::try_from(complete()).expect("complete dto should be admitted");
        assert_eq!(event.id, EventId::Number(3.into()));
        assert_eq!(event.sport, "baseball");
        assert_eq!(event.price, 65.0);
        assert_eq!(event.date.format("%Y-%m-%d %H:%M").to_string(), "2026-10-21 19:05");
    }

    #[rstest]
    #[case::no_id(EventDto { id: None, ..complete() }, "id")]
    #[case::zero_id(EventDto { id: Some(EventId::Number(0.into())), ..complete() }, "id")]
    #[case::blank_title(EventDto { title: Some("   ".to_string()), ..complete() }, "title")]
    #[case::no_sport(EventDto { sport: None, ..complete() }, "sport")]
    #[case::no_venue(EventDto { venue: Some(String::new()), ..complete() }, "venue")]
    #[case::no_date(EventDto { date: None, ..complete() }, "date")]
    #[case::no_price(EventDto { price: None, ..complete() }, "price")]
    #[case::no_image(EventDto { image: None, ..complete() }, "image")]
    fn test_missing_fields_are_rejected(#[case] dto: EventDto, #[case] field: &str) {
        assert_eq!(Event::try_from(dto), Err(SharedError::MissingField(field.to_string())));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    fn test_non_positive_price_is_rejected(#[case] price: f64) {
        let err = Event::try_from(EventDto { price: Some(price), ..complete() }).unwrap_err();
        assert!(matches!(err, SharedError::InvalidField { ref field, .. } if field == "price"));
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let err = Event::try_from(EventDto { date: Some("soon".to_string()), ..complete() }).unwrap_err();
        assert!(matches!(err, SharedError::InvalidField { ref field, .. } if field == "date"));
    }

    #[test]
    fn test_deserializes_string_and_numeric_ids() {
        let numeric: EventDto = serde_json::from_value(json!({ "id": 12 })).unwrap();
        let text: EventDto = serde_json::from_value(json!({ "id": "evt-12" })).unwrap();
        assert_eq!(numeric.id, Some(EventId::Number(12.into())));
        assert_eq!(text.id, Some(EventId::Text("evt-12".to_string())));
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let dto = EventDto { title: Some("Final".to_string()), ..Default::default() };
        assert_eq!(serde_json::to_value(&dto).unwrap(), json!({ "title": "Final" }));
    }

    #[test]
    fn test_event_round_trips_through_dto() {
        let event = Event::try_from(complete()).unwrap();
        let back = Event::try_from(EventDto::from(&event)).unwrap();
        assert_eq!(back, event);
    }
}
