use gloo::events::EventListener;
use yew::prelude::*;

use crate::auth::AuthContext;
use crate::components::common_modal::{ModalContext, ModalKind};
use crate::components::common_toast::{ToastContext, ToastType};
use crate::config::Config;
use crate::dom::{log_ui_error, scroll_to_section, window_scroll_y};

pub const LOGOUT_MESSAGE: &str = "Logged out successfully!";

/// Page sections reachable from the navbar, as (anchor id, label).
pub const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("events", "Events"),
    ("categories", "Categories"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>();
    let modal = use_context::<ModalContext>();
    let toasts = use_context::<ToastContext>();
    let active_section = use_state_eq(|| SECTIONS[0].0);
    let is_mobile_menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);

    // Solid navbar once the page has scrolled past the hero
    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    scrolled.set(window_scroll_y() > Config::NAV_SCROLL_THRESHOLD_PX);
                })
            });
            move || drop(listener)
        });
    }

    let toggle_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_mobile_menu_open.set(!*is_mobile_menu_open);
        })
    };

    let section_link = |id: &'static str, label: &'static str| {
        let onclick = {
            let active_section = active_section.clone();
            let is_mobile_menu_open = is_mobile_menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                log_ui_error("Scrolling to section", scroll_to_section(id));
                active_section.set(id);
                is_mobile_menu_open.set(false);
            })
        };
        html! {
            <a
                href={format!("#{}", id)}
                {onclick}
                class={classes!(
                    "nav-link", "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                    "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
                    if *active_section == id {
                        classes!("active", "bg-white/20", "text-white")
                    } else {
                        classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
                    }
                )}
            >
                {label}
            </a>
        }
    };

    let auth_area = match (auth, modal) {
        (Some(auth), _) if auth.state.is_signed_in() => {
            let on_logout_click = {
                let sign_out = auth.sign_out.clone();
                Callback::from(move |_: MouseEvent| {
                    sign_out.emit(());
                    if let Some(toasts) = &toasts {
                        toasts.notify(LOGOUT_MESSAGE, ToastType::Success);
                    }
                })
            };
            html! {
                <div class="nav-auth flex items-center space-x-3">
                    <span class="user-email text-sm text-white/90">{auth.state.email.clone().unwrap_or_default()}</span>
                    <button
                        onclick={on_logout_click}
                        class="px-3 py-2 rounded-md text-sm font-medium bg-white/10 hover:bg-white/20"
                    >
                        {"Logout"}
                    </button>
                </div>
            }
        }
        (_, Some(modal)) => {
            let open_login = {
                let open = modal.open.clone();
                Callback::from(move |_: MouseEvent| open.emit(ModalKind::Login))
            };
            let open_register = {
                let open = modal.open.clone();
                Callback::from(move |_: MouseEvent| open.emit(ModalKind::Register))
            };
            html! {
                <div class="nav-auth flex items-center space-x-3">
                    <button
                        id="loginBtn"
                        onclick={open_login}
                        class="px-3 py-2 rounded-md text-sm font-medium text-white/90 hover:bg-white/10"
                    >
                        {"Login"}
                    </button>
                    <button
                        id="registerBtn"
                        onclick={open_register}
                        class="px-3 py-2 rounded-md text-sm font-medium bg-white text-blue-600 hover:bg-blue-50"
                    >
                        {"Sign Up"}
                    </button>
                </div>
            }
        }
        _ => html! {},
    };

    html! {
        <nav class={classes!(
            "navbar", "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "backdrop-blur-sm", "transition-shadow",
            if *scrolled { classes!("scrolled", "shadow-lg") } else { classes!() }
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <a href="#home" class="flex items-baseline space-x-1">
                        <span class="text-lg sm:text-xl font-medium bg-white text-blue-600 px-2 py-0.5 rounded">{"SportsSeat"}</span>
                    </a>

                    <div class={classes!("hidden", "md:flex", "space-x-6")}>
                        { for SECTIONS.iter().map(|(id, label)| section_link(*id, *label)) }
                    </div>

                    <div class="hidden md:flex">
                        {auth_area.clone()}
                    </div>

                    <button
                        class="hamburger md:hidden p-2 rounded-md hover:bg-white/10"
                        onclick={toggle_mobile_menu}
                        aria-label="Toggle mobile menu"
                    >
                        <span class={classes!("block", "w-6", "h-0.5", "bg-white", "transition-transform",
                            if *is_mobile_menu_open { classes!("rotate-45", "translate-y-1") } else { classes!() })}></span>
                        <span class={classes!("block", "w-6", "h-0.5", "bg-white", "mt-1.5",
                            if *is_mobile_menu_open { classes!("opacity-0") } else { classes!() })}></span>
                        <span class={classes!("block", "w-6", "h-0.5", "bg-white", "mt-1.5", "transition-transform",
                            if *is_mobile_menu_open { classes!("-rotate-45", "-translate-y-2") } else { classes!() })}></span>
                    </button>
                </div>

                <div class={classes!(
                    "nav-menu", "md:hidden", "overflow-hidden", "transition-all", "duration-300",
                    if *is_mobile_menu_open { classes!("active", "max-h-96", "pb-4") } else { classes!("max-h-0") }
                )}>
                    { for SECTIONS.iter().map(|(id, label)| section_link(*id, *label)) }
                    {auth_area}
                </div>
            </div>
        </nav>
    }
}
