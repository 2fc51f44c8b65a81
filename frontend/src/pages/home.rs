use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::api::events::HttpEventSource;
use crate::components::categories::Categories;
use crate::components::common_toast::ToastContext;
use crate::components::event_catalog::EventCatalog;
use crate::components::search_bar::SearchBar;
use crate::dom::{log_ui_error, RevealObserver};
use crate::pipeline::CatalogLoader;
use crate::store::{CatalogContext, EventStore, StoreAction};

const FEATURES: [(&str, &str, &str); 3] = [
    ("🎟", "Instant Booking", "Pick your seats and check out in under a minute."),
    ("🔒", "Secure Payments", "Every purchase is protected from checkout to kickoff."),
    ("📱", "Mobile Tickets", "Your tickets live on your phone, ready at the gate."),
];

/// Owns the event store for the page and starts the first load on mount.
#[function_component(Home)]
pub fn home() -> Html {
    let store = use_reducer_eq(EventStore::default);
    let toasts = use_context::<ToastContext>();

    let loader = {
        let dispatcher = store.dispatcher();
        let add_toast = toasts.map(|t| t.add_toast).unwrap_or_else(Callback::noop);
        use_memo((), move |_| {
            let on_action = Callback::from(move |action: StoreAction| dispatcher.dispatch(action));
            CatalogLoader::new(Rc::new(HttpEventSource), on_action, add_toast)
        })
    };

    {
        let loader = loader.clone();
        use_effect_with((), move |_| {
            debug!("Loading event catalog");
            loader.reload();
            || ()
        });
    }

    let reveal = use_memo((), |_| match RevealObserver::new() {
        Ok(observer) => Some(observer),
        Err(e) => {
            log_ui_error("Scroll reveal disabled", Err(e));
            None
        }
    });

    {
        let reveal = reveal.clone();
        // New cards need observing after every re-render of the list.
        use_effect_with(store.filtered.clone(), move |_| {
            if let Some(observer) = &*reveal {
                log_ui_error("Scroll reveal", observer.observe_page());
            }
            || ()
        });
    }

    let context = CatalogContext {
        store,
        loader,
    };

    html! {
        <ContextProvider<CatalogContext> context={context}>
            <div class="home-page">
                <SearchBar />
                <EventCatalog />
                <Categories />
                <section id="features" class="py-16">
                    <div class="max-w-7xl mx-auto px-4 grid grid-cols-1 md:grid-cols-3 gap-8">
                        { for FEATURES.iter().map(|(icon, title, text)| html! {
                            <div class="feature-item text-center p-6">
                                <div class="text-4xl mb-3">{*icon}</div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">{*title}</h3>
                                <p class="text-gray-600">{*text}</p>
                            </div>
                        }) }
                    </div>
                </section>
            </div>
        </ContextProvider<CatalogContext>>
    }
}
