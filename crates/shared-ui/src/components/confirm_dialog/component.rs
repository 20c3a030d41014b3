use dioxus::prelude::*;

use crate::button::{Button, ButtonVariant};
use crate::dialog::{Dialog, DialogDescription, DialogFooter, DialogHeader, DialogTitle};

/// A yes/no confirmation modal for destructive actions.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    description: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Dialog {
            open,
            on_close: move |_| on_cancel.call(()),
            DialogHeader {
                DialogTitle { "{title}" }
                DialogDescription { "{description}" }
            }
            DialogFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
