use gloo::events::EventListener;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;
use yew::prelude::*;

use crate::auth::AuthProvider;
use crate::components::auth::login_modal::LoginModal;
use crate::components::auth::register_modal::RegisterModal;
use crate::components::common_modal::ModalProvider;
use crate::components::common_toast::{ToastContext, ToastProvider, ToastType};
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::pages::home::Home;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod pages {
    pub mod home;
}


pub const UNEXPECTED_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Turns uncaught script errors into a log line and a toast.
#[function_component(ErrorReporter)]
fn error_reporter() -> Html {
    let toasts = use_context::<ToastContext>();

    use_effect_with((), move |_| {
        let listener = web_sys::window().map(|window| {
            EventListener::new(&window, "error", move |event| {
                let detail = event
                    .dyn_ref::<ErrorEvent>()
                    .map(|e| e.message())
                    .unwrap_or_default();
                error!("Uncaught error: {}", detail);
                if let Some(toasts) = &toasts {
                    toasts.notify(UNEXPECTED_ERROR_MESSAGE, ToastType::Error);
                }
            })
        });
        move || drop(listener)
    });

    html! {}
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <ErrorReporter />
            <AuthProvider>
                <ModalProvider>
                    <div class="app-container flex flex-col min-h-screen">
                        <Nav />
                        <main class="flex-1">
                            <Home />
                        </main>
                        <Footer />
                    </div>
                    <LoginModal />
                    <RegisterModal />
                </ModalProvider>
            </AuthProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    match dom::element_by_id("app") {
        Ok(root) => {
            info!("Mounting application to #app");
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(e) => {
            error!("{}; mounting to <body> instead", e);
            yew::Renderer::<App>::new().render();
        }
    }
    info!("Application mounted");

    Ok(())
}

// Start function that Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
