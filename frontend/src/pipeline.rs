use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use log::{debug, error};
use yew::Callback;

use crate::api::events::EventSource;
use crate::components::common_toast::Toast;
use crate::store::StoreAction;

pub const LOADED_MESSAGE: &str = "Events loaded successfully!";
pub const LOAD_MORE_MESSAGE: &str = "Loading more events...";

/// Runs a detached local future.
pub type Spawner = Rc<dyn Fn(Pin<Box<dyn Future<Output = ()>>>)>;

pub fn browser_spawner() -> Spawner {
    Rc::new(|fut: Pin<Box<dyn Future<Output = ()>>>| wasm_bindgen_futures::spawn_local(fut))
}

/// Drives fetch → admit → store for the catalog, and turns failures into
/// a toast with a retry plus the inline error state.
pub struct CatalogLoader {
    source: Rc<dyn EventSource>,
    store: Callback<StoreAction>,
    toasts: Callback<Toast>,
    spawn: Spawner,
    next_request: Cell<u64>,
}

impl CatalogLoader {
    pub fn new(source: Rc<dyn EventSource>, store: Callback<StoreAction>, toasts: Callback<Toast>) -> Self {
        Self {
            source,
            store,
            toasts,
            spawn: browser_spawner(),
            next_request: Cell::new(0),
        }
    }

    pub fn with_spawner(mut self, spawn: Spawner) -> Self {
        self.spawn = spawn;
        self
    }

    /// Starts a new load. The loading state is dispatched before the
    /// request goes out; any load still in flight becomes stale.
    pub fn reload(self: &Rc<Self>) {
        let request = self.next_request.get() + 1;
        self.next_request.set(request);
        self.store.emit(StoreAction::LoadStarted(request));

        let loader = Rc::clone(self);
        (self.spawn)(Box::pin(async move { loader.load(request).await }));
    }

    async fn load(self: Rc<Self>, request: u64) {
        let result = self.source.fetch_events().await;

        if request != self.next_request.get() {
            debug!("Load #{} superseded by #{}", request, self.next_request.get());
            return;
        }

        match result {
            Ok(events) => {
                debug!("Load #{} admitted {} events", request, events.len());
                self.store.emit(StoreAction::Loaded { request, events });
                self.toasts
                    .emit(Toast::success(LOADED_MESSAGE));
            }
            Err(e) => {
                error!("Failed to fetch live events: {}", e);
                let message = e.user_message().to_string();
                self.store.emit(StoreAction::LoadFailed {
                    request,
                    message: message.clone(),
                });
                self.toasts
                    .emit(Toast::error(message).with_retry(self.retry_callback()));
            }
        }
    }

    pub fn retry_callback(self: &Rc<Self>) -> Callback<()> {
        let loader = Rc::clone(self);
        Callback::from(move |_| loader.reload())
    }

    /// There is no paging; this only offers another full reload.
    pub fn load_more(self: &Rc<Self>) {
        self.toasts.emit(
            Toast::info(LOAD_MORE_MESSAGE).with_retry(self.retry_callback()),
        );
    }
}
