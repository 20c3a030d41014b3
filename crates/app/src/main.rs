use dioxus::prelude::*;

mod api;
mod components;
mod debounce;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Restore any persisted session before the router renders, so the
    // auth guard sees it on first paint.
    use_context_provider(SessionState::restore);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
