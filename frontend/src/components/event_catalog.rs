use log::debug;
use shared::catalog::view::{NO_RESULTS_HINT, NO_RESULTS_TITLE};
use shared::{project, CatalogView, EventCard, EventId};
use yew::prelude::*;

use crate::components::common_toast::{ToastContext, ToastType};
use crate::components::event_card::EventCardView;
use crate::store::{CatalogContext, CatalogPhase, EventStore};

pub fn viewing_message(title: &str) -> String {
    format!("Viewing {} details...", title)
}

pub fn booking_message(title: &str) -> String {
    format!("Booking {}...", title)
}

/// Looks the event up in the full list and raises `message(title)`.
fn event_action(
    store: &UseReducerHandle<EventStore>,
    toasts: &Option<ToastContext>,
    action: &'static str,
    message: fn(&str) -> String,
) -> Callback<EventId> {
    let store = store.clone();
    let toasts = toasts.clone();
    Callback::from(move |id: EventId| {
        let Some(event) = store.find(&id) else {
            debug!("{} requested for unknown event {}", action, id);
            return;
        };
        debug!("{} event {:?}", action, event);
        if let Some(toasts) = &toasts {
            toasts.notify(message(&event.title), ToastType::Success);
        }
    })
}

/// One keyed card per event, keyed by event id.
fn card_list(cards: Vec<EventCard>, on_view: Callback<EventId>, on_book: Callback<EventId>) -> Html {
    cards
        .into_iter()
        .map(|card| {
            let key = card.id.to_string();
            html! {
                <EventCardView
                    key={key}
                    {card}
                    on_view={on_view.clone()}
                    on_book={on_book.clone()}
                />
            }
        })
        .collect::<Html>()
}

#[function_component(EventCatalog)]
pub fn event_catalog() -> Html {
    let catalog = use_context::<CatalogContext>();
    let toasts = use_context::<ToastContext>();

    let Some(catalog) = catalog else {
        return html! {};
    };

    let body = match &catalog.store.phase {
        CatalogPhase::Loading => html! {
            <div class="loading col-span-full text-center py-12 text-gray-500">
                <div class="animate-spin inline-block w-8 h-8 border-4 border-blue-600 border-t-transparent rounded-full mb-3"></div>
                <p>{"Loading events..."}</p>
            </div>
        },
        CatalogPhase::Failed(message) => {
            let on_retry = {
                let loader = catalog.loader.clone();
                Callback::from(move |_: MouseEvent| loader.reload())
            };
            html! {
                <div class="error-state col-span-full text-center py-12">
                    <h3 class="text-lg font-semibold text-red-600 mb-2">{"Failed to load events"}</h3>
                    <p class="text-gray-600 mb-4">{message}</p>
                    <button class="btn-primary px-4 py-2 rounded-lg bg-blue-600 text-white" onclick={on_retry}>
                        {"Retry"}
                    </button>
                </div>
            }
        }
        CatalogPhase::Ready => match project(&catalog.store.filtered) {
            CatalogView::NoResults => html! {
                <div class="no-events col-span-full text-center py-12">
                    <div class="text-5xl text-gray-300 mb-4">{"🔍"}</div>
                    <h3 class="text-lg font-semibold text-gray-800">{NO_RESULTS_TITLE}</h3>
                    <p class="text-gray-500">{NO_RESULTS_HINT}</p>
                </div>
            },
            CatalogView::Cards(cards) => {
                let on_view = event_action(&catalog.store, &toasts, "Viewing", viewing_message);
                let on_book = event_action(&catalog.store, &toasts, "Booking", booking_message);
                card_list(cards, on_view, on_book)
            }
        },
    };

    let on_load_more = {
        let loader = catalog.loader.clone();
        Callback::from(move |_: MouseEvent| loader.load_more())
    };

    html! {
        <section id="events" class="py-16">
            <div class="max-w-7xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-gray-900 mb-8">{"Upcoming Events"}</h2>
                <div id="events-list" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {body}
                </div>
                <div class="text-center mt-10">
                    <button
                        class="load-more px-6 py-3 rounded-lg border border-blue-600 text-blue-600 font-medium hover:bg-blue-50"
                        onclick={on_load_more}
                    >
                        {"Load More Events"}
                    </button>
                </div>
            </div>
        </section>
    }
}
