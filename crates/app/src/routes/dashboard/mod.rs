mod filtering;

use std::collections::HashSet;

use dioxus::prelude::*;
use shared_types::AdvocateStatus;
use shared_ui::{
    use_toast, Autocomplete, Button, ButtonVariant, Card, CardContent, PageHeader, PageTitle,
    SearchBar, Skeleton,
};

use crate::api::Client;
use crate::components::FirmsTable;
use crate::debounce::{use_debouncer, SEARCH_DEBOUNCE_MS};
use crate::session::use_session;
use filtering::{
    advocate_name_options, empty_state_message, filter_firms_by_advocate, find_selected_firm,
    firm_name_options,
};

/// Firms dashboard: the firm table with nested advocates, a server-side
/// firm-name filter, and a debounced client-side advocate search.
#[component]
pub fn DashboardPage() -> Element {
    let session = use_session();
    let toast = use_toast();

    let mut firm_filter = use_signal(String::new);
    let mut advocate_search = use_signal(String::new);
    let mut firms = use_signal(Vec::new);
    let mut firm_names = use_signal(Vec::new);
    let mut advocate_names = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut pending_users = use_signal(HashSet::<i64>::new);
    // Monotonic load counter; a response only applies if no newer load
    // started while it was in flight.
    let mut load_seq = use_signal(|| 0u64);

    let debouncer = use_debouncer(SEARCH_DEBOUNCE_MS);

    let mut load_firms = move || {
        load_seq += 1;
        let seq = *load_seq.peek();

        spawn(async move {
            loading.set(true);
            error_msg.set(None);

            let client = Client::new(session);
            let filter = firm_filter.peek().clone();
            let search = advocate_search.peek().clone();

            match client
                .list_firms((!filter.is_empty()).then_some(filter.as_str()))
                .await
            {
                Ok(loaded) => {
                    let visible = filter_firms_by_advocate(&loaded, &search);
                    if *load_seq.peek() != seq {
                        return;
                    }
                    firms.set(visible);

                    // Re-derive the advocate-name options: scoped to the
                    // selected firm when the filter matches one, otherwise
                    // the full list from the backend.
                    let scoped = if filter.is_empty() {
                        None
                    } else {
                        find_selected_firm(&firms.peek(), &filter)
                            .filter(|firm| !firm.advocates.is_empty())
                            .map(|firm| advocate_name_options(&firm.advocates))
                    };
                    match scoped {
                        Some(names) => advocate_names.set(names),
                        None => {
                            if let Ok(advocates) = client.list_advocates(None).await {
                                if *load_seq.peek() == seq {
                                    advocate_names.set(advocate_name_options(&advocates));
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    if !err.is_unauthorized() && *load_seq.peek() == seq {
                        error_msg.set(Some(err.or_fallback("Failed to load firms")));
                    }
                }
            }
            if *load_seq.peek() == seq {
                loading.set(false);
            }
        });
    };

    // Initial loads: firm names, advocate names, and the firm list, all
    // independent of each other.
    use_future(move || async move {
        let client = Client::new(session);
        if let Ok(all_firms) = client.list_firms(None).await {
            firm_names.set(firm_name_options(&all_firms));
        }
    });
    use_future(move || async move {
        let client = Client::new(session);
        if let Ok(advocates) = client.list_advocates(None).await {
            advocate_names.set(advocate_name_options(&advocates));
        }
    });
    use_future(move || async move { load_firms() });

    // Picking a firm reloads immediately and resets the advocate search.
    let select_firm = move |name: String| {
        debouncer.cancel();
        firm_filter.set(name);
        advocate_search.set(String::new());
        load_firms();
    };

    let search_advocates = move |term: String| {
        advocate_search.set(term);
        debouncer.schedule(load_firms);
    };

    // Picking an option skips the quiet period.
    let select_advocate = move |name: String| {
        debouncer.cancel();
        advocate_search.set(name);
        load_firms();
    };

    let mut change_status = move |(user_id, user_name, activate): (i64, String, bool)| {
        pending_users.write().insert(user_id);
        spawn(async move {
            let client = Client::new(session);
            let result = if activate {
                client.activate_user(user_id).await
            } else {
                client.deactivate_user(user_id).await
            };

            match result {
                Ok(()) => {
                    let status = if activate {
                        AdvocateStatus::Active
                    } else {
                        AdvocateStatus::Inactive
                    };
                    filtering::apply_status_change(&mut firms.write(), user_id, status);
                    if activate {
                        toast.success(format!(
                            "User \"{user_name}\" activated successfully. Activation email sent."
                        ));
                    } else {
                        toast.success(format!("User \"{user_name}\" deactivated successfully."));
                    }
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        let action = if activate { "activate" } else { "deactivate" };
                        toast.error(format!("Failed to {action} user: {err}"));
                    }
                }
            }
            pending_users.write().remove(&user_id);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Firms & Advocates" }
            }

            SearchBar {
                Autocomplete {
                    label: "Filter by firm",
                    placeholder: "All firms",
                    value: firm_filter(),
                    options: firm_names(),
                    on_change: select_firm,
                    on_select: select_firm,
                }
                Autocomplete {
                    label: "Search advocates",
                    placeholder: "Name, email, or phone...",
                    value: advocate_search(),
                    options: advocate_names(),
                    on_change: search_advocates,
                    on_select: select_advocate,
                }
            }

            if let Some(err) = error_msg() {
                Card {
                    CardContent {
                        div { class: "dashboard-error",
                            p { "{err}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| load_firms(),
                                "Retry"
                            }
                        }
                    }
                }
            } else if loading() {
                div { class: "loading",
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                }
            } else if firms.read().is_empty() {
                Card {
                    CardContent {
                        div { class: "dashboard-empty",
                            h3 { "No Firms Found" }
                            p { {empty_state_message(&firm_filter.read(), &advocate_search.read())} }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| load_firms(),
                                "Refresh"
                            }
                        }
                    }
                }
            } else {
                div { class: "dashboard-results-header",
                    h2 { "Firms ({firms.read().len()})" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| load_firms(),
                        "Refresh"
                    }
                }
                FirmsTable {
                    firms: firms(),
                    pending: pending_users(),
                    on_activate: move |(id, name): (i64, String)| change_status((id, name, true)),
                    on_deactivate: move |(id, name): (i64, String)| change_status((id, name, false)),
                }
            }
        }
    }
}
