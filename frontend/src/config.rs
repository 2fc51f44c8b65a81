pub struct Config;

impl Config {
    /// Path of the event catalog endpoint.
    pub const EVENTS_PATH: &'static str = "/api/events";

    /// Quiet period before a search keystroke is applied.
    pub const SEARCH_DEBOUNCE_MS: u32 = 300;

    /// Default lifetime of a toast banner.
    pub const TOAST_DURATION_MS: u32 = 5000;

    /// Banners kept on screen at once; the oldest is dropped first.
    pub const MAX_TOASTS: usize = 5;

    /// Pause between closing one modal and opening the next.
    pub const MODAL_SWITCH_DELAY_MS: u32 = 150;

    /// Scroll offset past which the navbar switches to its solid style.
    pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;

    pub const PLACEHOLDER_IMAGE: &'static str =
        "https://via.placeholder.com/400x200/4F46E5/FFFFFF?text=Sports+Event";

    pub fn api_base_url() -> String {
        // In development, Trunk serves the frontend and proxies /api/ to the backend.
        // In production the backend serves both, so relative URLs work everywhere.
        "".to_string()
    }
}
