use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToastVariant {
    #[default]
    Success,
    Error,
}

impl ToastVariant {
    fn class(&self) -> &'static str {
        match self {
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastItem {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
}

/// Handle for pushing toasts from anywhere under a [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl Toasts {
    fn new() -> Self {
        Toasts {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastVariant::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastVariant::Error);
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|toast| toast.id != id);
    }

    fn push(&self, message: String, variant: ToastVariant) {
        let mut next_id = self.next_id;
        let mut items = self.items;
        let id = *next_id.peek();
        next_id += 1;
        items.write().push(ToastItem { id, message, variant });

        spawn(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            items.write().retain(|toast| toast.id != id);
        });
    }
}

/// Access the toast handle provided by the nearest [`ToastProvider`].
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the toast context and renders the stacked viewport.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(Toasts::new);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {children}
        div { class: "toast-viewport",
            for toast in toasts.items.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "toast",
                    "data-style": toast.variant.class(),
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        "aria-label": "Dismiss",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "\u{2715}"
                    }
                }
            }
        }
    }
}
