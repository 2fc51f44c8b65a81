//! The event catalog pipeline: decode and admit, filter, project for display.

pub mod decode;
pub mod filter;
pub mod view;

pub use decode::{admit_all, decode_events, decode_value};
pub use filter::{apply_filters, DateBucket, EventFilter};
pub use view::{format_price, format_short_date, project, CatalogView, EventCard};
