use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use log::debug;
use shared::{apply_filters, DateBucket, Event, EventFilter, EventId};
use yew::prelude::*;

use crate::pipeline::CatalogLoader;

/// What the catalog section is showing. Loading and a list are never
/// on screen together.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogPhase {
    #[default]
    Loading,
    Failed(String),
    Ready,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventStore {
    /// Every admitted event, in response order.
    pub all: Vec<Event>,
    /// `all` narrowed by `filter`, order preserved.
    pub filtered: Vec<Event>,
    pub filter: EventFilter,
    pub phase: CatalogPhase,
    /// Number of the load whose result the store will accept.
    pub request: u64,
}

impl EventStore {
    pub fn find(&self, id: &EventId) -> Option<&Event> {
        self.all.iter().find(|e| &e.id == id)
    }

    fn refiltered(&self, filter: EventFilter, now: NaiveDateTime) -> Self {
        let filtered = apply_filters(&self.all, &filter, now);
        debug!("Filter {:?} kept {} of {} events", filter, filtered.len(), self.all.len());
        Self {
            filtered,
            filter,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    LoadStarted(u64),
    /// Replaces `all`; `filtered` starts over as `all` with cleared criteria.
    Loaded {
        request: u64,
        events: Vec<Event>,
    },
    LoadFailed {
        request: u64,
        message: String,
    },
    Search {
        query: String,
        now: NaiveDateTime,
    },
    SelectSport {
        sport: String,
        now: NaiveDateTime,
    },
    SelectDate {
        date: DateBucket,
        now: NaiveDateTime,
    },
    ApplyFilter {
        filter: EventFilter,
        now: NaiveDateTime,
    },
}

impl Reducible for EventStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StoreAction::LoadStarted(request) => Rc::new(Self {
                phase: CatalogPhase::Loading,
                request,
                ..(*self).clone()
            }),
            StoreAction::Loaded { request, .. } | StoreAction::LoadFailed { request, .. }
                if request != self.request =>
            {
                debug!("Discarding stale load #{} (current #{})", request, self.request);
                self
            }
            StoreAction::Loaded { events, .. } => Rc::new(Self {
                filtered: events.clone(),
                all: events,
                filter: EventFilter::default(),
                phase: CatalogPhase::Ready,
                request: self.request,
            }),
            StoreAction::LoadFailed { message, .. } => Rc::new(Self {
                phase: CatalogPhase::Failed(message),
                ..(*self).clone()
            }),
            StoreAction::Search { query, now } => {
                let filter = self.filter.clone().with_query(query);
                Rc::new(self.refiltered(filter, now))
            }
            StoreAction::SelectSport { sport, now } => {
                let filter = EventFilter::new(self.filter.query.clone(), &sport, self.filter.date);
                Rc::new(self.refiltered(filter, now))
            }
            StoreAction::SelectDate { date, now } => {
                let filter = EventFilter {
                    date,
                    ..self.filter.clone()
                };
                Rc::new(self.refiltered(filter, now))
            }
            StoreAction::ApplyFilter { filter, now } => Rc::new(self.refiltered(filter, now)),
        }
    }
}

/// The viewer's local wall clock.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Store handle plus the loader, handed down through context.
#[derive(Clone)]
pub struct CatalogContext {
    pub store: UseReducerHandle<EventStore>,
    pub loader: Rc<CatalogLoader>,
}

impl PartialEq for CatalogContext {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store && Rc::ptr_eq(&self.loader, &other.loader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn event(id: i64, title: &str, sport: &str, date: &str) -> Event {
        Event {
            id: EventId::Number(id.into()),
            title: title.to_string(),
            sport: sport.to_string(),
            venue: "Riverside Stadium".to_string(),
            date: at(date),
            price: 40.0,
            image: "https://img.example.com/e.jpg".to_string(),
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event(1, "City Derby", "soccer", "2026-10-16 19:00"),
            event(2, "Open Final", "tennis", "2026-10-17 14:00"),
            event(3, "Night Game", "basketball", "2026-11-30 20:00"),
        ]
    }

    fn now() -> NaiveDateTime {
        at("2026-10-16 09:00")
    }

    fn loaded() -> Rc<EventStore> {
        Rc::new(EventStore::default())
            .reduce(StoreAction::LoadStarted(1))
            .reduce(StoreAction::Loaded {
                request: 1,
                events: sample(),
            })
    }

    fn ids(events: &[Event]) -> Vec<i64> {
        events
            .iter()
            .map(|e| match &e.id {
                EventId::Number(n) => n.as_i64().unwrap_or(-1),
                EventId::Text(_) => -1,
            })
            .collect()
    }

    #[test]
    fn test_store_starts_loading_and_empty() {
        let store = EventStore::default();
        assert_eq!(store.phase, CatalogPhase::Loading);
        assert!(store.all.is_empty());
        assert!(store.filtered.is_empty());
    }

    #[test]
    fn test_loaded_resets_filtered_to_all() {
        let store = loaded();
        assert_eq!(store.phase, CatalogPhase::Ready);
        assert_eq!(store.all, sample());
        assert_eq!(store.filtered, store.all);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let store = Rc::new(EventStore::default())
            .reduce(StoreAction::LoadStarted(1))
            .reduce(StoreAction::LoadStarted(2))
            .reduce(StoreAction::Loaded {
                request: 1,
                events: sample(),
            });
        assert_eq!(store.phase, CatalogPhase::Loading);
        assert!(store.all.is_empty());

        let store = store.reduce(StoreAction::LoadFailed {
            request: 1,
            message: "late failure".to_string(),
        });
        assert_eq!(store.phase, CatalogPhase::Loading);
    }

    #[test]
    fn test_failure_keeps_store_unpopulated() {
        let store = Rc::new(EventStore::default())
            .reduce(StoreAction::LoadStarted(1))
            .reduce(StoreAction::LoadFailed {
                request: 1,
                message: "Invalid data format received from API".to_string(),
            });
        assert_eq!(
            store.phase,
            CatalogPhase::Failed("Invalid data format received from API".to_string())
        );
        assert!(store.all.is_empty());
        assert!(store.filtered.is_empty());
    }

    #[test]
    fn test_search_then_sport_combine() {
        let store = loaded().reduce(StoreAction::Search {
            query: "final".to_string(),
            now: now(),
        });
        assert_eq!(ids(&store.filtered), vec![2]);

        let store = store.reduce(StoreAction::SelectSport {
            sport: "soccer".to_string(),
            now: now(),
        });
        assert!(store.filtered.is_empty());
        assert_eq!(store.filter.query, "final");
        assert_eq!(store.filter.sport.as_deref(), Some("soccer"));
    }

    #[test]
    fn test_select_date_today() {
        let store = loaded().reduce(StoreAction::SelectDate {
            date: DateBucket::Today,
            now: now(),
        });
        assert_eq!(ids(&store.filtered), vec![1]);
    }

    #[test]
    fn test_category_shortcut_clears_query_and_date() {
        let store = loaded()
            .reduce(StoreAction::Search {
                query: "derby".to_string(),
                now: now(),
            })
            .reduce(StoreAction::ApplyFilter {
                filter: EventFilter::for_sport("tennis"),
                now: now(),
            });
        assert_eq!(ids(&store.filtered), vec![2]);
        assert_eq!(store.filter.query, "");
        assert_eq!(store.filter.date, DateBucket::Any);
    }

    #[test]
    fn test_reload_shows_everything_again() {
        let filtered = loaded()
            .reduce(StoreAction::SelectSport {
                sport: "basketball".to_string(),
                now: now(),
            })
            .reduce(StoreAction::Search {
                query: "night".to_string(),
                now: now(),
            });
        assert_eq!(ids(&filtered.filtered), vec![3]);

        let store = filtered
            .reduce(StoreAction::LoadStarted(2))
            .reduce(StoreAction::Loaded {
                request: 2,
                events: sample(),
            });
        assert_eq!(store.filtered, store.all);
        assert_eq!(ids(&store.filtered), vec![1, 2, 3]);
        assert_eq!(store.filter, EventFilter::default());
        assert_eq!(store.request, 2);
    }

    #[test]
    fn test_find_looks_in_all() {
        let store = loaded().reduce(StoreAction::SelectSport {
            sport: "tennis".to_string(),
            now: now(),
        });
        let found = store.find(&EventId::Number(3.into())).map(|e| e.title.clone());
        assert_eq!(found.as_deref(), Some("Night Game"));
        assert!(store.find(&EventId::Number(9.into())).is_none());
    }
}
