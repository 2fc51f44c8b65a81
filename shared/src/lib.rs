pub mod models {
    pub mod event;
    pub mod auth;
}

pub mod dto {
    pub mod event;
    pub mod common;
}

pub mod catalog;
pub mod error;

// Re-export commonly used items
pub use error::{FetchError, SharedError, Result};

// Re-export models
pub use models::{
    event::{Event, EventId},
    auth::{LoginRequest, NewsletterRequest, RegisterRequest},
};

// Re-export DTOs
pub use dto::{
    event::EventDto,
    common::ErrorResponse,
};

pub use catalog::{apply_filters, decode_events, project, CatalogView, DateBucket, EventCard, EventFilter};
