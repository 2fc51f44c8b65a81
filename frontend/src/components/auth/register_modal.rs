use log::debug;
use shared::RegisterRequest;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;

use crate::auth::AuthContext;
use crate::components::common_modal::{Modal, ModalContext, ModalKind};
use crate::components::common_toast::{ToastContext, ToastType};

pub const REGISTER_SUCCESS: &str = "Account created successfully! Welcome to SportsSeat.";

#[derive(Clone, Copy)]
enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

fn field_input(form: &UseStateHandle<RegisterRequest>, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        let value = input.value();
        match field {
            Field::FirstName => next.first_name = value,
            Field::LastName => next.last_name = value,
            Field::Email => next.email = value,
            Field::Password => next.password = value,
            Field::ConfirmPassword => next.confirm_password = value,
        }
        form.set(next);
    })
}

#[function_component(RegisterModal)]
pub fn register_modal() -> Html {
    let form = use_state(RegisterRequest::default);

    let modal = use_context::<ModalContext>();
    let auth = use_context::<AuthContext>();
    let toasts = use_context::<ToastContext>();

    let (Some(modal), Some(auth), Some(toasts)) = (modal, auth, toasts) else {
        return html! {};
    };

    let onsubmit = {
        let form = form.clone();
        let modal = modal.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = (*form).clone();

            if let Err(err) = request.check() {
                debug!("Register form rejected: {}", err);
                toasts.notify(err.to_string(), ToastType::Error);
                return;
            }

            debug!("Registered {}", request.display_name());
            auth.sign_in.emit(request.email);
            toasts.notify(REGISTER_SUCCESS, ToastType::Success);
            modal.close.emit(());
            form.set(RegisterRequest::default());
        })
    };

    let on_switch = {
        let switch = modal.switch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            switch.emit(ModalKind::Login);
        })
    };

    let input_class = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

    html! {
        <Modal
            id="registerModal"
            title="Sign Up"
            is_open={modal.active == Some(ModalKind::Register)}
            on_close={modal.close.clone()}
        >
            <form onsubmit={onsubmit} class="space-y-4" novalidate={true}>
                <div class="grid grid-cols-2 gap-4">
                    <input
                        type="text"
                        placeholder="First name"
                        value={form.first_name.clone()}
                        oninput={field_input(&form, Field::FirstName)}
                        class={input_class}
                    />
                    <input
                        type="text"
                        placeholder="Last name"
                        value={form.last_name.clone()}
                        oninput={field_input(&form, Field::LastName)}
                        class={input_class}
                    />
                </div>
                <input
                    type="email"
                    placeholder="Email"
                    value={form.email.clone()}
                    oninput={field_input(&form, Field::Email)}
                    class={input_class}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={form.password.clone()}
                    oninput={field_input(&form, Field::Password)}
                    class={input_class}
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    value={form.confirm_password.clone()}
                    oninput={field_input(&form, Field::ConfirmPassword)}
                    class={input_class}
                />
                <button
                    type="submit"
                    class="w-full bg-blue-600 text-white py-2 px-4 rounded-lg hover:bg-blue-700 transition-colors duration-200"
                >
                    {"Create Account"}
                </button>
                <p class="text-sm text-center text-gray-600">
                    {"Already have an account? "}
                    <a href="#" class="text-blue-600 hover:underline" onclick={on_switch}>{"Login"}</a>
                </p>
            </form>
        </Modal>
    }
}
