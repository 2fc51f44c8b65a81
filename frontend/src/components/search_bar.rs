use shared::DateBucket;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::common_toast::{ToastContext, ToastType};
use crate::config::Config;
use crate::debounce::{Debouncer, TimeoutScheduler};
use crate::store::{local_now, CatalogContext, StoreAction};

pub const SEARCHING_MESSAGE: &str = "Searching for events...";

/// Sport categories as (value, label). Values match `Event::sport`.
pub const SPORTS: [(&str, &str); 6] = [
    ("football", "Football"),
    ("basketball", "Basketball"),
    ("soccer", "Soccer"),
    ("tennis", "Tennis"),
    ("baseball", "Baseball"),
    ("hockey", "Hockey"),
];

/// Hero section with the search text box and the sport and date selects.
#[function_component(SearchBar)]
pub fn search_bar() -> Html {
    let catalog = use_context::<CatalogContext>();
    let toasts = use_context::<ToastContext>();
    let draft = use_state_eq(String::new);

    let committed_query = catalog
        .as_ref()
        .map(|c| c.store.filter.query.clone())
        .unwrap_or_default();

    // Category shortcuts clear the query in the store; mirror that in the box.
    {
        let draft = draft.clone();
        use_effect_with(committed_query, move |query| {
            draft.set(query.clone());
            || ()
        });
    }

    let dispatcher = catalog.as_ref().map(|c| c.store.dispatcher());

    let debouncer = {
        let dispatcher = dispatcher.clone();
        use_memo((), move |_| {
            let on_settle = Callback::from(move |query: String| {
                if let Some(dispatcher) = &dispatcher {
                    dispatcher.dispatch(StoreAction::Search {
                        query,
                        now: local_now(),
                    });
                }
            });
            Debouncer::new(TimeoutScheduler, Config::SEARCH_DEBOUNCE_MS, on_settle)
        })
    };

    let Some(catalog) = catalog else {
        return html! {};
    };

    let oninput = {
        let draft = draft.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            draft.set(value.clone());
            debouncer.input(value);
        })
    };

    let onsportchange = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(dispatcher) = &dispatcher {
                dispatcher.dispatch(StoreAction::SelectSport {
                    sport: select.value(),
                    now: local_now(),
                });
            }
        })
    };

    let ondatechange = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(dispatcher) = &dispatcher {
                dispatcher.dispatch(StoreAction::SelectDate {
                    date: DateBucket::parse(&select.value()),
                    now: local_now(),
                });
            }
        })
    };

    let onsearch = {
        let draft = draft.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debouncer.cancel();
            if let Some(dispatcher) = &dispatcher {
                dispatcher.dispatch(StoreAction::Search {
                    query: (*draft).clone(),
                    now: local_now(),
                });
            }
            if let Some(toasts) = &toasts {
                toasts.notify(SEARCHING_MESSAGE, ToastType::Success);
            }
        })
    };

    let filter = &catalog.store.filter;
    let selected_sport = filter.sport.clone().unwrap_or_default();

    html! {
        <section id="home" class="hero bg-gradient-to-br from-slate-900 to-blue-700 text-white py-20">
            <div class="max-w-5xl mx-auto px-4 text-center">
                <h1 class="text-4xl sm:text-5xl font-bold mb-4">{"Your Seat at Every Game"}</h1>
                <p class="text-lg text-blue-100 mb-8">{"Find and book tickets for the best sports events near you."}</p>

                <div class="search-box bg-white rounded-xl shadow-lg p-4 flex flex-col md:flex-row gap-3 text-gray-900">
                    <input
                        id="hero-search"
                        type="text"
                        placeholder="Search events or venues..."
                        value={(*draft).clone()}
                        {oninput}
                        class="flex-1 px-4 py-2 border border-gray-300 rounded-lg"
                    />
                    <select id="sport-filter" onchange={onsportchange} class="px-4 py-2 border border-gray-300 rounded-lg">
                        <option value="" selected={selected_sport.is_empty()}>{"All Sports"}</option>
                        { for SPORTS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={selected_sport == *value}>{*label}</option>
                        }) }
                    </select>
                    <select id="date-filter" onchange={ondatechange} class="px-4 py-2 border border-gray-300 rounded-lg">
                        { for DateBucket::ALL.iter().map(|bucket| html! {
                            <option value={bucket.as_str()} selected={filter.date == *bucket}>{bucket.label()}</option>
                        }) }
                    </select>
                    <button
                        class="search-btn px-6 py-2 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700"
                        onclick={onsearch}
                    >
                        {"Search"}
                    </button>
                </div>
            </div>
        </section>
    }
}
