use std::rc::Rc;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

use crate::config::Config;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "toast-success bg-green-500 border-green-600",
            ToastType::Error => "toast-error bg-red-500 border-red-600",
            ToastType::Warning => "toast-warning bg-yellow-500 border-yellow-600",
            ToastType::Info => "toast-info bg-blue-500 border-blue-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Warning => "⚠",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
    pub retry: Option<Callback<()>>,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(Config::TOAST_DURATION_MS),
            retry: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastType::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastType::Info)
    }

    pub fn with_retry(mut self, retry: Callback<()>) -> Self {
        self.retry = Some(retry);
        self
    }
}

/// Banners on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => {
                toasts.push(toast);
                if toasts.len() > Config::MAX_TOASTS {
                    let overflow = toasts.len() - Config::MAX_TOASTS;
                    toasts.drain(..overflow);
                }
            }
            ToastAction::Remove(id) => {
                if !toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl ToastContext {
    pub fn notify(&self, message: impl Into<String>, toast_type: ToastType) {
        self.add_toast.emit(Toast::new(message.into(), toast_type));
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let add_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            dispatcher.dispatch(ToastAction::Add(toast));

            // Auto-remove after duration if specified
            if let Some(duration_ms) = duration {
                let dispatcher = dispatcher.clone();
                let timeout = Timeout::new(duration_ms, move || {
                    dispatcher.dispatch(ToastAction::Remove(toast_id));
                });
                timeout.forget(); // Let it run in background
            }
        })
    };

    let remove_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: queue.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            <div class="toast-container">
                {props.children.clone()}
                <ToastList />
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let Some(toast_context) = use_context::<ToastContext>() else {
        return html! {};
    };

    html! {
        <div id="toast-region" class="fixed top-4 right-4 z-50 space-y-2" aria-live="polite">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>();
    let visible = use_state(|| false);

    // Animate in
    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(10, move || {
                visible.set(true);
            });
            move || drop(timeout)
        });
    }

    let remove = {
        let toast_id = props.toast.id;
        let remove_toast = toast_context.map(|ctx| ctx.remove_toast);
        move || {
            if let Some(remove_toast) = &remove_toast {
                remove_toast.emit(toast_id);
            }
        }
    };

    let on_close = {
        let remove = remove.clone();
        Callback::from(move |_: MouseEvent| remove())
    };

    let retry_button = props.toast.retry.clone().map(|retry| {
        let on_retry = Callback::from(move |_: MouseEvent| {
            retry.emit(());
            remove();
        });
        html! {
            <button
                onclick={on_retry}
                class="toast-retry ml-3 px-2 py-1 text-xs font-semibold bg-white bg-opacity-20 rounded hover:bg-opacity-30"
            >
                {"Retry"}
            </button>
        }
    });

    let toast_type_classes = props.toast.toast_type.classes();
    let icon = props.toast.toast_type.icon();

    html! {
        <div class={classes!(
            "toast", "transform", "transition-all", "duration-300", "ease-in-out",
            if *visible { "translate-x-0 opacity-100" } else { "translate-x-full opacity-0" }
        )}>
            <div class={classes!(
                "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
                toast_type_classes
            )}>
                <div class="flex-shrink-0 mr-3">
                    <span class="text-lg font-bold">{icon}</span>
                </div>
                <div class="flex-1">
                    <p class="text-sm font-medium">{&props.toast.message}</p>
                </div>
                { for retry_button }
                <div class="flex-shrink-0 ml-3">
                    <button
                        onclick={on_close}
                        class="text-white hover:text-gray-200 focus:outline-none focus:text-gray-200 transition-colors duration-200"
                    >
                        <span class="text-lg">{"×"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn messages(queue: &ToastQueue) -> Vec<String> {
        queue.toasts.iter().map(|t| t.message.clone()).collect()
    }

    #[test]
    fn test_toasts_stack_without_dedup() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Add(Toast::info("Searching for events...")))
            .reduce(ToastAction::Add(Toast::info("Searching for events...")));
        assert_eq!(queue.toasts.len(), 2);
    }

    #[test]
    fn test_sixth_toast_drops_oldest() {
        let mut queue = Rc::new(ToastQueue::default());
        for i in 1..=6 {
            queue = queue.reduce(ToastAction::Add(Toast::success(format!("toast {}", i))));
        }
        assert_eq!(
            messages(&queue),
            vec!["toast 2", "toast 3", "toast 4", "toast 5", "toast 6"]
        );
    }

    #[test]
    fn test_remove_by_id() {
        let first = Toast::error("first");
        let second = Toast::error("second");
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Add(first.clone()))
            .reduce(ToastAction::Add(second))
            .reduce(ToastAction::Remove(first.id));
        assert_eq!(messages(&queue), vec!["second"]);
    }

    #[test]
    fn test_removing_unknown_id_is_noop() {
        let queue = Rc::new(ToastQueue::default()).reduce(ToastAction::Add(Toast::info("kept")));
        let after = queue.clone().reduce(ToastAction::Remove(Uuid::new_v4()));
        assert!(Rc::ptr_eq(&queue, &after));
    }

    #[test]
    fn test_default_duration_and_retry() {
        let calls = Rc::new(Cell::new(0));
        let retry = {
            let calls = calls.clone();
            Callback::from(move |_| calls.set(calls.get() + 1))
        };
        let toast = Toast::error("Could not load events.").with_retry(retry);
        assert_eq!(toast.duration, Some(5000));

        if let Some(retry) = &toast.retry {
            retry.emit(());
        }
        assert_eq!(calls.get(), 1);
    }
}
