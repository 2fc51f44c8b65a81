use shared::{EventCard, EventId};
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, Clone, PartialEq)]
pub struct EventCardProps {
    pub card: EventCard,
    pub on_view: Callback<EventId>,
    pub on_book: Callback<EventId>,
}

#[function_component(EventCardView)]
pub fn event_card(props: &EventCardProps) -> Html {
    let card = &props.card;

    let onclick = {
        let id = card.id.clone();
        props.on_view.reform(move |_: MouseEvent| id.clone())
    };

    // Booking must not also open the details view.
    let on_book = {
        let id = card.id.clone();
        let on_book = props.on_book.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_book.emit(id.clone());
        })
    };

    let on_image_error = Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if img.src() != Config::PLACEHOLDER_IMAGE {
            img.set_src(Config::PLACEHOLDER_IMAGE);
        }
    });

    html! {
        <div class="event-card cursor-pointer bg-white rounded-xl shadow hover:shadow-lg transition-shadow overflow-hidden" {onclick}>
            <div class="event-image relative h-48">
                <img
                    src={card.image.clone()}
                    alt={card.title.clone()}
                    loading="lazy"
                    onerror={on_image_error}
                    class="w-full h-full object-cover"
                />
                <div class="event-date absolute top-3 left-3 bg-white/90 text-gray-900 text-sm font-semibold px-2 py-1 rounded">
                    {&card.date_label}
                </div>
            </div>
            <div class="event-content p-4">
                <h3 class="event-title text-lg font-semibold text-gray-900">{&card.title}</h3>
                <div class="event-venue text-sm text-gray-600 mt-1">
                    <span class="mr-1">{"📍"}</span>
                    <span>{&card.venue}</span>
                </div>
                <div class="event-footer flex items-center justify-between mt-4">
                    <div class="event-price text-blue-600 font-bold">
                        <span class="from text-xs text-gray-500 font-normal mr-1">{"From"}</span>
                        {&card.price_label}
                    </div>
                    <button
                        class="btn-primary px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700"
                        onclick={on_book}
                    >
                        {"Book Now"}
                    </button>
                </div>
            </div>
        </div>
    }
}
