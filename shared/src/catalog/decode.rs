use crate::dto::common::ErrorResponse;
use crate::dto::event::EventDto;
use crate::error::FetchError;
use crate::models::event::Event;
use log::{debug, warn};
use serde_json::Value;

/// Turns an `/api/events` response into admitted events.
///
/// Failure statuses win over body shape; a 2xx body must be a JSON array
/// with at least one admissible element.
pub fn decode_events(status: u16, body: &str) -> Result<Vec<Event>, FetchError> {
    if !(200..300).contains(&status) {
        let server_message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.server_message());
        return Err(FetchError::http_status(status, server_message));
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidJson(e.to_string()))?;
    decode_value(value)
}

/// Shape check and admission on an already-parsed body.
pub fn decode_value(value: Value) -> Result<Vec<Event>, FetchError> {
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            warn!("Expected an array of events, got {}", json_kind(&other));
            return Err(FetchError::MalformedShape);
        }
    };

    let received = elements.len();
    let admitted = admit_all(elements);
    debug!("Admitted {} of {} events", admitted.len(), received);

    if admitted.is_empty() {
        return Err(FetchError::NoValidEvents);
    }
    Ok(admitted)
}

/// Keeps the elements that pass admission, in response order.
pub fn admit_all(elements: Vec<Value>) -> Vec<Event> {
    elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| {
            let admitted = serde_json::from_value::<EventDto>(element)
                .map_err(|e| e.to_string())
                .and_then(|dto| Event::try_from(dto).map_err(|e| e.to_string()));
            match admitted {
                Ok(event) => Some(event),
                Err(reason) => {
                    debug!("Skipping event #{}: {}", index, reason);
                    None
                }
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
