use dioxus::prelude::*;

/// Horizontal filter row placed between the page header and the results
/// table. Children are laid out left to right and wrap on narrow
/// viewports.
#[component]
pub fn SearchBar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "search-bar",
            ..attributes,
            {children}
        }
    }
}
