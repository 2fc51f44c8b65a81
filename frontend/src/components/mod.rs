pub mod nav;
pub mod auth {
    pub mod login_modal;
    pub mod register_modal;
}
pub mod categories;
pub mod common_modal;
pub mod common_toast;
pub mod event_card;
pub mod event_catalog;
pub mod footer;
pub mod search_bar;
