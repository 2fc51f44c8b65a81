use shared::EventFilter;
use yew::prelude::*;

use crate::components::common_toast::{ToastContext, ToastType};
use crate::components::search_bar::SPORTS;
use crate::dom::{log_ui_error, scroll_to_section};
use crate::store::{local_now, CatalogContext, StoreAction};

fn icon(sport: &str) -> &'static str {
    match sport {
        "football" => "🏈",
        "basketball" => "🏀",
        "soccer" => "⚽",
        "tennis" => "🎾",
        "baseball" => "⚾",
        "hockey" => "🏒",
        _ => "🏟",
    }
}

pub fn showing_message(sport: &str) -> String {
    format!("Showing {} events", sport)
}

/// Category shortcuts. A click selects that sport, clears the query and
/// date filters, then jumps to the events list.
#[function_component(Categories)]
pub fn categories() -> Html {
    let catalog = use_context::<CatalogContext>();
    let toasts = use_context::<ToastContext>();

    let on_pick = {
        let dispatcher = catalog.map(|c| c.store.dispatcher());
        Callback::from(move |sport: &'static str| {
            if let Some(dispatcher) = &dispatcher {
                dispatcher.dispatch(StoreAction::ApplyFilter {
                    filter: EventFilter::for_sport(sport),
                    now: local_now(),
                });
            }
            log_ui_error("Scrolling to events", scroll_to_section("events"));
            if let Some(toasts) = &toasts {
                toasts.notify(showing_message(sport), ToastType::Success);
            }
        })
    };

    html! {
        <section id="categories" class="py-16 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-10">{"Browse by Sport"}</h2>
                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-4">
                    { for SPORTS.iter().map(|(value, label)| {
                        let value: &'static str = *value;
                        let onclick = on_pick.reform(move |_: MouseEvent| value);
                        html! {
                            <div
                                class="category-item cursor-pointer bg-white rounded-xl shadow p-6 text-center hover:shadow-lg transition-shadow"
                                data-sport={value}
                                {onclick}
                            >
                                <div class="text-4xl mb-2">{icon(value)}</div>
                                <h3 class="font-semibold text-gray-800">{*label}</h3>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
