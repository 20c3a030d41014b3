use dioxus::prelude::*;

use crate::routes::Route;

/// Unknown paths fall back to the dashboard; the auth guard takes over
/// from there for signed-out visitors.
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    tracing::debug!("unknown path /{}", segments.join("/"));
    navigator().replace(Route::Dashboard {});

    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}
