use dioxus::prelude::*;

/// A centered modal overlay. Clicking the backdrop closes it; clicks
/// inside the panel do not propagate.
#[component]
pub fn Dialog(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "dialog-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog-panel",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Header section of a Dialog.
#[component]
pub fn DialogHeader(children: Element) -> Element {
    rsx! {
        div { class: "dialog-header", {children} }
    }
}

/// Title element within a DialogHeader.
#[component]
pub fn DialogTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "dialog-title", {children} }
    }
}

/// Description text within a DialogHeader.
#[component]
pub fn DialogDescription(children: Element) -> Element {
    rsx! {
        p { class: "dialog-description", {children} }
    }
}

/// Footer section of a Dialog, typically for action buttons.
#[component]
pub fn DialogFooter(children: Element) -> Element {
    rsx! {
        div { class: "dialog-footer", {children} }
    }
}

/// Close button for a Dialog.
#[component]
pub fn DialogClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "dialog-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
