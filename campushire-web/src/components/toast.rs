use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::*;

/// How long a toast stays fully visible.
const DISPLAY_MS: u32 = 3_000;
/// Exit animation length before the element is removed.
const EXIT_MS: u32 = 300;

/// Severity tag controlling the toast's color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

/// Currently visible toasts. There is no queue, ordering policy, or cap;
/// every push stacks independently.
#[derive(Debug, Clone, PartialEq, Eq, Default, Store)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            level,
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Display a transient notification.
pub fn show_notification(dispatch: &Dispatch<ToastState>, message: &str, level: ToastLevel) {
    let message = message.to_string();
    dispatch.reduce_mut(move |state| state.push(message, level));
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let leaving = use_state(|| false);

    // Fire-and-forget timer chain per toast: visible for DISPLAY_MS, then
    // the exit class for EXIT_MS, then removal from the store.
    {
        let leaving = leaving.clone();
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        use_effect_with(id, move |_| {
            Timeout::new(DISPLAY_MS, move || {
                leaving.set(true);
                Timeout::new(EXIT_MS, move || on_dismiss.emit(id)).forget();
            })
            .forget();
            || ()
        });
    }

    let motion_class = if *leaving { "toast-leave" } else { "toast-enter" };

    html! {
        <div class={classes!("alert", "shadow-lg", props.toast.level.class(), motion_class)} role="alert">
            <span>{ props.toast.message.clone() }</span>
        </div>
    }
}

/// Fixed-position host rendering every visible toast, newest at the bottom.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let (state, dispatch) = use_store::<ToastState>();

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(move |state| state.dismiss(id));
        })
    };

    html! {
        <div class="toast toast-top toast-end z-50">
            { for state.toasts().iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    on_dismiss={on_dismiss.clone()}
                />
            }) }
        </div>
    }
}
