use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::Config;
use crate::dom::{log_ui_error, set_body_scroll_locked};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    Register,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalContext {
    pub active: Option<ModalKind>,
    pub open: Callback<ModalKind>,
    pub close: Callback<()>,
    /// Closes the current modal and opens another after a short pause.
    pub switch: Callback<ModalKind>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let active = use_state_eq(|| None::<ModalKind>);

    // Body scroll lock and Escape-to-close while a modal is open
    {
        let active = active.clone();
        use_effect_with(*active, move |kind| {
            let listener = kind.map(|_| {
                log_ui_error("Locking page scroll", set_body_scroll_locked(true));
                let active = active.clone();
                web_sys::window().and_then(|w| w.document()).map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .map_or(false, |e| e.key() == "Escape");
                        if is_escape {
                            active.set(None);
                        }
                    })
                })
            });
            move || {
                if listener.is_some() {
                    log_ui_error("Unlocking page scroll", set_body_scroll_locked(false));
                }
                drop(listener);
            }
        });
    }

    let open = {
        let active = active.clone();
        Callback::from(move |kind: ModalKind| {
            debug!("Opening {:?} modal", kind);
            active.set(Some(kind));
        })
    };

    let close = {
        let active = active.clone();
        Callback::from(move |_| active.set(None))
    };

    let switch = {
        let active = active.clone();
        Callback::from(move |kind: ModalKind| {
            active.set(None);
            let active = active.clone();
            let timeout = Timeout::new(Config::MODAL_SWITCH_DELAY_MS, move || {
                active.set(Some(kind));
            });
            timeout.forget();
        })
    };

    let context = ModalContext {
        active: *active,
        open,
        close,
        switch,
    };

    html! {
        <ContextProvider<ModalContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ModalContext>>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub id: AttrValue,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay plus panel. Clicking the overlay closes; clicks inside the
/// panel stay inside.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = {
        Callback::from(|e: MouseEvent| {
            e.stop_propagation();
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_close.emit(());
        })
    };

    html! {
        <div id={props.id.clone()} class="modal active fixed inset-0 z-50 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                onclick={on_overlay_click}
            ></div>
            <div
                class="modal-content relative bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4"
                onclick={on_modal_click}
            >
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-medium text-gray-900">{&props.title}</h3>
                    <button class="close text-gray-400 hover:text-gray-600" onclick={on_close_click}>
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
