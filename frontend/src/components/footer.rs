use log::debug;
use shared::NewsletterRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::common_toast::{ToastContext, ToastType};

pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing to our newsletter!";

#[function_component(Footer)]
pub fn footer() -> Html {
    let toasts = use_context::<ToastContext>();
    let email = use_state(String::new);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = NewsletterRequest {
                email: (*email).clone(),
            };
            let Some(toasts) = &toasts else {
                return;
            };
            match request.check() {
                Ok(()) => {
                    debug!("Newsletter sign-up for {}", request.email);
                    toasts.notify(SUBSCRIBED_MESSAGE, ToastType::Success);
                    email.set(String::new());
                }
                Err(err) => toasts.notify(err.to_string(), ToastType::Error),
            }
        })
    };

    html! {
        <footer id="contact" class="bg-gradient-to-r from-slate-800 to-blue-600 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 sm:gap-12">
                    <div class="text-center md:text-left">
                        <div class="flex items-center justify-center md:justify-start mb-4">
                            <span class="text-2xl sm:text-3xl font-bold tracking-tight mr-2">{"SportsSeat"}</span>
                        </div>
                        <p class="text-blue-100 text-sm sm:text-base leading-relaxed max-w-md mx-auto md:mx-0">
                            {"Tickets for the games you care about, from local derbies to championship finals."}
                        </p>
                    </div>

                    <div class="text-center md:text-left">
                        <h3 class="text-lg sm:text-xl font-semibold mb-4 sm:mb-6">{"Quick Links"}</h3>
                        <ul class="space-y-2 sm:space-y-3">
                            <li><a href="#home" class="text-blue-100 hover:text-white">{"Home"}</a></li>
                            <li><a href="#events" class="text-blue-100 hover:text-white">{"Events"}</a></li>
                            <li><a href="#categories" class="text-blue-100 hover:text-white">{"Categories"}</a></li>
                        </ul>
                    </div>

                    <div class="text-center md:text-left">
                        <h3 class="text-lg sm:text-xl font-semibold mb-4 sm:mb-6">{"Newsletter"}</h3>
                        <form class="newsletter-form flex flex-col sm:flex-row gap-2" {onsubmit} novalidate={true}>
                            <input
                                type="email"
                                placeholder="Your email"
                                value={(*email).clone()}
                                {oninput}
                                class="flex-1 px-3 py-2 rounded-lg text-gray-900"
                            />
                            <button type="submit" class="px-4 py-2 rounded-lg bg-white text-blue-600 font-medium hover:bg-blue-50">
                                {"Subscribe"}
                            </button>
                        </form>
                    </div>
                </div>

                <div class="border-t border-white/20 mt-8 pt-6 text-center text-sm text-blue-100">
                    {"© SportsSeat. All rights reserved."}
                </div>
            </div>
        </footer>
    }
}
