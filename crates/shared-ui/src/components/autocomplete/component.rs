use std::rc::Rc;

use dioxus::prelude::*;

/// Upper bound on dropdown entries rendered at once.
pub const MAX_VISIBLE_OPTIONS: usize = 50;

/// Result of filtering the option list against the current query.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredOptions {
    pub visible: Vec<String>,
    /// Match count before the visibility cap was applied.
    pub total: usize,
}

impl FilteredOptions {
    pub fn is_truncated(&self) -> bool {
        self.total > self.visible.len()
    }
}

/// Case-insensitive substring filter over `options`, capped at
/// [`MAX_VISIBLE_OPTIONS`] entries. An empty query matches everything.
pub fn filter_options(options: &[String], query: &str) -> FilteredOptions {
    let needle = query.trim().to_lowercase();
    let matches: Vec<&String> = if needle.is_empty() {
        options.iter().collect()
    } else {
        options
            .iter()
            .filter(|option| option.to_lowercase().contains(&needle))
            .collect()
    };

    let total = matches.len();
    FilteredOptions {
        visible: matches
            .into_iter()
            .take(MAX_VISIBLE_OPTIONS)
            .cloned()
            .collect(),
        total,
    }
}

/// Text input with a filtered dropdown of suggestions.
///
/// `on_change` fires on every keystroke with the raw text; `on_select`
/// fires when an option is picked or the field is cleared.
#[component]
pub fn Autocomplete(
    value: String,
    options: Vec<String>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    on_change: EventHandler<String>,
    on_select: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);
    let mut input_el: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let filtered = filter_options(&options, &value);
    let has_value = !value.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "autocomplete",
            if !label.is_empty() {
                label { class: "autocomplete-label", "{label}" }
            }
            div { class: "autocomplete-field",
                input {
                    class: "autocomplete-input",
                    r#type: "text",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    autocomplete: "off",
                    onmounted: move |evt| input_el.set(Some(evt.data())),
                    onfocus: move |_| open.set(true),
                    oninput: move |evt| {
                        open.set(true);
                        on_change.call(evt.value());
                    },
                }
                if has_value {
                    button {
                        class: "autocomplete-clear",
                        r#type: "button",
                        "aria-label": "Clear",
                        onclick: move |_| {
                            on_select.call(String::new());
                            open.set(true);
                            spawn(async move {
                                if let Some(el) = input_el.peek().clone() {
                                    let _ = el.set_focus(true).await;
                                }
                            });
                        },
                        "\u{2715}"
                    }
                }
            }
            if open() {
                div {
                    class: "autocomplete-backdrop",
                    onclick: move |_| open.set(false),
                }
                div { class: "autocomplete-list",
                    if filtered.visible.is_empty() {
                        div { class: "autocomplete-empty", "No results found" }
                    }
                    for option in filtered.visible.iter().cloned() {
                        button {
                            key: "{option}",
                            class: "autocomplete-option",
                            r#type: "button",
                            onclick: {
                                let option = option.clone();
                                move |_| {
                                    open.set(false);
                                    on_select.call(option.clone());
                                }
                            },
                            "{option}"
                        }
                    }
                    if filtered.is_truncated() {
                        div { class: "autocomplete-more",
                            "Showing first {MAX_VISIBLE_OPTIONS} of {filtered.total} results"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let options = names(&["Jane Doe", "John Roe"]);
        let filtered = filter_options(&options, "");
        assert_eq!(filtered.visible, options);
        assert_eq!(filtered.total, 2);
        assert!(!filtered.is_truncated());
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let options = names(&["Jane Doe", "John Roe", "Mary Major"]);
        let filtered = filter_options(&options, "jAn");
        assert_eq!(filtered.visible, names(&["Jane Doe"]));

        let filtered = filter_options(&options, "o");
        assert_eq!(filtered.visible, names(&["Jane Doe", "John Roe", "Mary Major"]));
    }

    #[test]
    fn query_whitespace_is_ignored() {
        let options = names(&["Jane Doe"]);
        assert_eq!(filter_options(&options, "  jane ").visible, options);
        assert_eq!(filter_options(&options, "   ").visible, options);
    }

    #[test]
    fn visible_list_is_capped_but_total_is_not() {
        let options: Vec<String> = (0..120).map(|i| format!("Advocate {i:03}")).collect();
        let filtered = filter_options(&options, "advocate");
        assert_eq!(filtered.visible.len(), MAX_VISIBLE_OPTIONS);
        assert_eq!(filtered.total, 120);
        assert!(filtered.is_truncated());
        assert_eq!(filtered.visible[0], "Advocate 000");
    }

    #[test]
    fn no_matches_yields_an_empty_list() {
        let options = names(&["Jane Doe"]);
        let filtered = filter_options(&options, "zzz");
        assert!(filtered.visible.is_empty());
        assert_eq!(filtered.total, 0);
    }
}
