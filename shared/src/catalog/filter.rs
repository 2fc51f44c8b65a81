use crate::models::event::Event;
use chrono::{Duration, Months, NaiveDateTime};
use std::fmt;

/// Relative-time category offered by the date select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateBucket {
    #[default]
    Any,
    Today,
    Tomorrow,
    Week,
    Month,
}

impl DateBucket {
    pub const ALL: [DateBucket; 5] = [
        DateBucket::Any,
        DateBucket::Today,
        DateBucket::Tomorrow,
        DateBucket::Week,
        DateBucket::Month,
    ];

    /// Value used by the `<select>` option. `Any` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateBucket::Any => "",
            DateBucket::Today => "today",
            DateBucket::Tomorrow => "tomorrow",
            DateBucket::Week => "week",
            DateBucket::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateBucket::Any => "Any Date",
            DateBucket::Today => "Today",
            DateBucket::Tomorrow => "Tomorrow",
            DateBucket::Week => "This Week",
            DateBucket::Month => "This Month",
        }
    }

    /// Unknown values are treated as no date filter.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "today" => DateBucket::Today,
            "tomorrow" => DateBucket::Tomorrow,
            "week" => DateBucket::Week,
            "month" => DateBucket::Month,
            _ => DateBucket::Any,
        }
    }

    pub fn matches(&self, date: NaiveDateTime, now: NaiveDateTime) -> bool {
        match self {
            DateBucket::Any => true,
            DateBucket::Today => date.date() == now.date(),
            DateBucket::Tomorrow => now.date().succ_opt() == Some(date.date()),
            DateBucket::Week => date >= now && date <= now + Duration::days(7),
            // Month-end clamps: Jan 31 + 1 month is the last day of February.
            DateBucket::Month => match now.checked_add_months(Months::new(1)) {
                Some(limit) => date >= now && date <= limit,
                None => false,
            },
        }
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three filter inputs: search text, sport and date bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub query: String,
    pub sport: Option<String>,
    pub date: DateBucket,
}

impl EventFilter {
    /// Builds a filter from raw control values; an empty sport means any sport.
    pub fn new(query: impl Into<String>, sport: &str, date: DateBucket) -> Self {
        let sport = Some(sport.to_string()).filter(|s| !s.is_empty());
        Self {
            query: query.into(),
            sport,
            date,
        }
    }

    /// Category shortcut: only the sport is set.
    pub fn for_sport(sport: &str) -> Self {
        Self::new(String::new(), sport, DateBucket::Any)
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.sport.is_none() && self.date == DateBucket::Any
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn matches(&self, event: &Event, now: NaiveDateTime) -> bool {
        self.matches_query(event)
            && self.sport.as_deref().map_or(true, |sport| event.sport == sport)
            && self.date.matches(event.date, now)
    }

    fn matches_query(&self, event: &Event) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        event.title.to_lowercase().contains(&needle) || event.venue.to_lowercase().contains(&needle)
    }
}

/// Returns the events of `all` that satisfy every predicate of `filter`,
/// keeping their relative order.
pub fn apply_filters(all: &[Event], filter: &EventFilter, now: NaiveDateTime) -> Vec<Event> {
    all.iter()
        .filter(|event| filter.matches(event, now))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventId;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn event(id: i64, title: &str, sport: &str, venue: &str, date: &str) -> Event {
        Event {
            id: EventId::Number(id.into()),
            title: title.to_string(),
            sport: sport.to_string(),
            venue: venue.to_string(),
            date: at(date),
            price: 50.0,
            image: format!("https://img.example.com/{}.jpg", id),
        }
    }

    fn catalog() -> Vec<Event> {
        vec![
            event(1, "US Open Final", "tennis", "Arthur Ashe Stadium", "2026-10-16 18:00"),
            event(2, "Lakers vs Celtics", "basketball", "Crypto.com Arena", "2026-10-17 19:30"),
            event(3, "Wimbledon Exhibition", "tennis", "Centre Court", "2026-10-22 13:00"),
            event(4, "Super Bowl Watch Party", "football", "Madison Square Garden", "2026-11-10 20:00"),
            event(5, "Yankees vs Red Sox", "baseball", "Yankee Stadium", "2026-12-01 19:05"),
        ]
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

    const NOW: &str = "2026-10-16 09:00";

    #[test]
    fn test_empty_filter_is_identity() {
        let all = catalog();
        assert_eq!(apply_filters(&all, &EventFilter::default(), at(NOW)), all);
    }

    #[test]
    fn test_sport_filter_keeps_matching_events_in_order() {
        let filtered = apply_filters(&catalog(), &EventFilter::for_sport("tennis"), at(NOW));
        assert_eq!(ids(&filtered), vec![1, 3]);
    }

    #[test]
    fn test_sport_match_is_exact() {
        let filtered = apply_filters(&catalog(), &EventFilter::for_sport("Tennis"), at(NOW));
        assert!(filtered.is_empty());
    }

    #[rstest]
    #[case("lakers", vec![2])]
    #[case("STADIUM", vec![1, 5])]
    #[case("garden", vec![4])]
    #[case("cricket", vec![])]
    fn test_query_matches_title_or_venue(#[case] query: &str, #[case] expected: Vec<i64>) {
        let filter = EventFilter::default().with_query(query);
        assert_eq!(ids(&apply_filters(&catalog(), &filter, at(NOW))), expected);
    }

    #[rstest]
    #[case(DateBucket::Today, vec![1])]
    #[case(DateBucket::Tomorrow, vec![2])]
    #[case(DateBucket::Week, vec![1, 2, 3])]
    #[case(DateBucket::Month, vec![1, 2, 3, 4])]
    #[case(DateBucket::Any, vec![1, 2, 3, 4, 5])]
    fn test_date_buckets(#[case] bucket: DateBucket, #[case] expected: Vec<i64>) {
        let filter = EventFilter::new("", "", bucket);
        assert_eq!(ids(&apply_filters(&catalog(), &filter, at(NOW))), expected);
    }

    #[test]
    fn test_week_and_month_exclude_past_events() {
        let earlier_today = vec![event(9, "Morning Skate", "hockey", "Rink", "2026-10-16 07:00")];
        assert_eq!(ids(&apply_filters(&earlier_today, &EventFilter::new("", "", DateBucket::Today), at(NOW))), vec![9]);
        assert!(apply_filters(&earlier_today, &EventFilter::new("", "", DateBucket::Week), at(NOW)).is_empty());
        assert!(apply_filters(&earlier_today, &EventFilter::new("", "", DateBucket::Month), at(NOW)).is_empty());
    }

    #[test]
    fn test_week_bound_is_inclusive() {
        let edge = vec![event(8, "Edge", "golf", "Augusta", "2026-10-23 09:00")];
        assert_eq!(ids(&apply_filters(&edge, &EventFilter::new("", "", DateBucket::Week), at(NOW))), vec![8]);
    }

    #[test]
    fn test_month_clamps_at_month_end() {
        let now = at("2027-01-31 12:00");
        assert!(DateBucket::Month.matches(at("2027-02-28 12:00"), now));
        assert!(!DateBucket::Month.matches(at("2027-03-01 00:00"), now));
    }

    #[test]
    fn test_predicates_are_combined_with_and() {
        let filter = EventFilter::new("centre", "tennis", DateBucket::Month);
        assert_eq!(ids(&apply_filters(&catalog(), &filter, at(NOW))), vec![3]);
        let filter = EventFilter::new("centre", "basketball", DateBucket::Month);
        assert!(apply_filters(&catalog(), &filter, at(NOW)).is_empty());
    }

    #[rstest]
    #[case("today", DateBucket::Today)]
    #[case("Tomorrow", DateBucket::Tomorrow)]
    #[case("week", DateBucket::Week)]
    #[case("month", DateBucket::Month)]
    #[case("", DateBucket::Any)]
    #[case("yesterday", DateBucket::Any)]
    fn test_bucket_parse(#[case] raw: &str, #[case] expected: DateBucket) {
        assert_eq!(DateBucket::parse(raw), expected);
    }

    #[test]
    fn test_bucket_values_round_trip() {
        for bucket in DateBucket::ALL {
            assert_eq!(DateBucket::parse(bucket.as_str()), bucket);
        }
    }

    #[test]
    fn test_empty_sport_is_wildcard() {
        assert_eq!(EventFilter::new("", "", DateBucket::Any).sport, None);
        assert!(EventFilter::new("", "", DateBucket::Any).is_empty());
        assert!(!EventFilter::for_sport("tennis").is_empty());
    }

    fn arb_event() -> impl Strategy<Value = Event> {
        (
            1i64..1000,
            "[a-zA-Z ]{1,16}",
            prop::sample::select(vec!["tennis", "football", "basketball", "baseball"]),
            "[a-zA-Z ]{1,16}",
            0i64..90 * 24 * 60,
        )
            .prop_map(|(id, title, sport, venue, minutes)| Event {
                id: EventId::Number(id.into()),
                title,
                sport: sport.to_string(),
                venue,
                date: at("2026-09-01 00:00") + Duration::minutes(minutes),
                price: 10.0,
                image: "https://img.example.com/x.jpg".to_string(),
            })
    }

    fn arb_bucket() -> impl Strategy<Value = DateBucket> {
        prop::sample::select(DateBucket::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_empty_filter_is_identity(all in prop::collection::vec(arb_event(), 0..20)) {
            prop_assert_eq!(apply_filters(&all, &EventFilter::default(), at(NOW)), all);
        }

        #[test]
        fn prop_filtering_is_deterministic_and_order_preserving(
            all in prop::collection::vec(arb_event(), 0..20),
            query in "[a-z]{0,3}",
            sport in prop::sample::select(vec!["", "tennis", "football"]),
            bucket in arb_bucket(),
        ) {
            let filter = EventFilter::new(query, sport, bucket);
            let first = apply_filters(&all, &filter, at(NOW));
            let second = apply_filters(&all, &filter, at(NOW));
            prop_assert_eq!(&first, &second);

            // Every kept event appears in `all`, in the same relative order.
            let mut cursor = all.iter();
            for kept in &first {
                prop_assert!(cursor.any(|candidate| candidate == kept));
            }
        }
    }
}
