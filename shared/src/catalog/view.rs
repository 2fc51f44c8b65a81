use crate::models::event::{Event, EventId};
use chrono::NaiveDateTime;
use log::warn;

pub const NO_RESULTS_TITLE: &str = "No events found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your search criteria";

/// Display-ready projection of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: EventId,
    pub title: String,
    pub venue: String,
    pub image: String,
    pub date_label: String,
    pub price_label: String,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            venue: event.venue.clone(),
            image: event.image.clone(),
            date_label: format_short_date(event.date),
            price_label: format_price(event.price),
        }
    }
}

/// What the catalog container shows for a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    NoResults,
    Cards(Vec<EventCard>),
}

impl CatalogView {
    pub fn card_count(&self) -> usize {
        match self {
            CatalogView::NoResults => 0,
            CatalogView::Cards(cards) => cards.len(),
        }
    }
}

/// Projects the filtered view into cards, skipping events that fail
/// [`Event::is_complete`].
///
/// Never yields an empty card list: if nothing survives, the result is
/// the single no-results placeholder.
pub fn project(filtered: &[Event]) -> CatalogView {
    let cards: Vec<EventCard> = filtered
        .iter()
        .filter(|event| {
            let complete = event.is_complete();
            if !complete {
                warn!("Invalid event data, not rendering card: {:?}", event);
            }
            complete
        })
        .map(EventCard::from)
        .collect();

    if cards.is_empty() {
        CatalogView::NoResults
    } else {
        CatalogView::Cards(cards)
    }
}

/// Weekday, month and day, e.g. "Tue, Oct 20".
pub fn format_short_date(date: NaiveDateTime) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Dollar amount; whole amounts print without cents.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}
