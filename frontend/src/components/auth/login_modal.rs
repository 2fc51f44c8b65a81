use log::debug;
use shared::LoginRequest;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;

use crate::auth::AuthContext;
use crate::components::common_modal::{Modal, ModalContext, ModalKind};
use crate::components::common_toast::{ToastContext, ToastType};

pub const LOGIN_SUCCESS: &str = "Login successful! Welcome back.";

#[function_component(LoginModal)]
pub fn login_modal() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);

    let modal = use_context::<ModalContext>();
    let auth = use_context::<AuthContext>();
    let toasts = use_context::<ToastContext>();

    let (Some(modal), Some(auth), Some(toasts)) = (modal, auth, toasts) else {
        return html! {};
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let modal = modal.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };

            if let Err(err) = request.check() {
                debug!("Login form rejected: {}", err);
                toasts.notify(err.to_string(), ToastType::Error);
                return;
            }

            auth.sign_in.emit(request.email);
            toasts.notify(LOGIN_SUCCESS, ToastType::Success);
            modal.close.emit(());
            email.set(String::new());
            password.set(String::new());
        })
    };

    let onemailinput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordinput = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_switch = {
        let switch = modal.switch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            switch.emit(ModalKind::Register);
        })
    };

    html! {
        <Modal
            id="loginModal"
            title="Login"
            is_open={modal.active == Some(ModalKind::Login)}
            on_close={modal.close.clone()}
        >
            <form onsubmit={onsubmit} class="space-y-4" novalidate={true}>
                <div>
                    <label for="login-email" class="block text-sm font-medium text-gray-700 mb-1">
                        {"Email"}
                    </label>
                    <input
                        type="email"
                        id="login-email"
                        value={(*email).clone()}
                        oninput={onemailinput}
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                    />
                </div>
                <div>
                    <label for="login-password" class="block text-sm font-medium text-gray-700 mb-1">
                        {"Password"}
                    </label>
                    <input
                        type="password"
                        id="login-password"
                        value={(*password).clone()}
                        oninput={onpasswordinput}
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-blue-600 text-white py-2 px-4 rounded-lg hover:bg-blue-700 transition-colors duration-200"
                >
                    {"Login"}
                </button>
                <p class="text-sm text-center text-gray-600">
                    {"Don't have an account? "}
                    <a href="#" class="text-blue-600 hover:underline" onclick={on_switch}>{"Sign up"}</a>
                </p>
            </form>
        </Modal>
    }
}
