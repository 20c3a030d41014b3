use dioxus::prelude::*;
use shared_types::{Court, CourtPayload};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, ConfirmDialog, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Dialog, DialogClose,
    DialogFooter, DialogHeader, DialogTitle, Input, PageActions, PageHeader, PageTitle, SearchBar,
    Skeleton,
};

use crate::api::Client;
use crate::debounce::{use_debouncer, SEARCH_DEBOUNCE_MS};
use crate::session::use_session;

fn opt_str(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Court reference-data page: debounced search plus modal create/edit
/// and confirmed delete.
#[component]
pub fn CourtsPage() -> Element {
    let session = use_session();
    let toast = use_toast();

    let mut search = use_signal(String::new);
    let mut courts = use_signal(Vec::<Court>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Court>::None);
    let mut form_name = use_signal(String::new);
    let mut form_city = use_signal(String::new);
    let mut form_state = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut confirm_delete = use_signal(|| Option::<Court>::None);

    let debouncer = use_debouncer(SEARCH_DEBOUNCE_MS);

    let load_courts = move || {
        spawn(async move {
            loading.set(true);
            error_msg.set(None);

            let client = Client::new(session);
            let term = search.peek().clone();
            match client
                .list_courts((!term.is_empty()).then_some(term.as_str()))
                .await
            {
                Ok(loaded) => courts.set(loaded),
                Err(err) => {
                    if !err.is_unauthorized() {
                        error_msg.set(Some(err.or_fallback("Failed to load courts")));
                    }
                }
            }
            loading.set(false);
        });
    };

    use_future(move || async move { load_courts() });

    let handle_search = move |evt: FormEvent| {
        search.set(evt.value());
        debouncer.schedule(load_courts);
    };

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
        form_name.set(String::new());
        form_city.set(String::new());
        form_state.set(String::new());
    };

    let open_create = move |_| {
        editing.set(None);
        form_name.set(String::new());
        form_city.set(String::new());
        form_state.set(String::new());
        show_modal.set(true);
    };

    let mut open_edit = move |court: Court| {
        form_name.set(court.court_name.clone());
        form_city.set(court.court_city.clone().unwrap_or_default());
        form_state.set(court.court_state.clone().unwrap_or_default());
        editing.set(Some(court));
        show_modal.set(true);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = CourtPayload {
            court_name: form_name.peek().trim().to_string(),
            court_city: opt_str(&form_city.peek()),
            court_state: opt_str(&form_state.peek()),
        };
        let editing_id = editing.peek().as_ref().map(|court| court.id);

        spawn(async move {
            submitting.set(true);
            let client = Client::new(session);
            let result = match editing_id {
                Some(id) => client.update_court(id, &payload).await,
                None => client.create_court(&payload).await,
            };
            submitting.set(false);

            match result {
                Ok(()) => {
                    if editing_id.is_some() {
                        toast.success("Court updated successfully");
                    } else {
                        toast.success("Court created successfully");
                    }
                    close_modal();
                    load_courts();
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        let fallback = if editing_id.is_some() {
                            "Failed to update court"
                        } else {
                            "Failed to create court"
                        };
                        toast.error(err.or_fallback(fallback));
                    }
                }
            }
        });
    };

    let handle_delete = move |_| {
        let Some(court) = confirm_delete.write().take() else {
            return;
        };
        spawn(async move {
            let client = Client::new(session);
            match client.delete_court(court.id).await {
                Ok(()) => {
                    toast.success("Court deleted successfully");
                    load_courts();
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        toast.error(err.or_fallback("Failed to delete court"));
                    }
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courts.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Courts" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: open_create,
                        "New Court"
                    }
                }
            }

            SearchBar {
                Input {
                    value: search(),
                    placeholder: "Search courts...",
                    on_input: handle_search,
                }
            }

            if let Some(err) = error_msg() {
                Card {
                    CardContent {
                        div { class: "list-error",
                            p { "{err}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| load_courts(),
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
            } else if courts.read().is_empty() {
                Card {
                    CardContent {
                        p { "No courts found." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Court Name" }
                        DataTableColumn { "City" }
                        DataTableColumn { "State" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for court in courts.read().iter().cloned() {
                            {
                                let edit_court = court.clone();
                                let delete_court = court.clone();
                                rsx! {
                                    DataTableRow { key: "{court.id}",
                                        DataTableCell { "{court.court_name}" }
                                        DataTableCell { {court.court_city.as_deref().unwrap_or("-")} }
                                        DataTableCell { {court.court_state.as_deref().unwrap_or("-")} }
                                        DataTableCell {
                                            div { class: "row-actions",
                                                Button {
                                                    variant: ButtonVariant::Secondary,
                                                    onclick: move |_| open_edit(edit_court.clone()),
                                                    "Edit"
                                                }
                                                Button {
                                                    variant: ButtonVariant::Destructive,
                                                    onclick: move |_| confirm_delete.set(Some(delete_court.clone())),
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Dialog {
                open: show_modal(),
                on_close: move |_| close_modal(),
                DialogHeader {
                    DialogTitle {
                        if editing.read().is_some() { "Edit Court" } else { "New Court" }
                    }
                }
                DialogClose { on_close: move |_| close_modal() }
                form { onsubmit: handle_submit,
                    div { class: "modal-field",
                        Input {
                            label: "Court Name",
                            placeholder: "e.g. District Court",
                            required: true,
                            value: form_name(),
                            on_input: move |e: FormEvent| form_name.set(e.value()),
                        }
                    }
                    div { class: "modal-field",
                        Input {
                            label: "City",
                            placeholder: "City",
                            value: form_city(),
                            on_input: move |e: FormEvent| form_city.set(e.value()),
                        }
                    }
                    div { class: "modal-field",
                        Input {
                            label: "State",
                            placeholder: "State",
                            value: form_state(),
                            on_input: move |e: FormEvent| form_state.set(e.value()),
                        }
                    }
                    DialogFooter {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| close_modal(),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "button",
                            "data-style": "primary",
                            disabled: submitting(),
                            if submitting() {
                                "Saving..."
                            } else if editing.read().is_some() {
                                "Update Court"
                            } else {
                                "Create Court"
                            }
                        }
                    }
                }
            }

            ConfirmDialog {
                open: confirm_delete.read().is_some(),
                title: "Delete Court",
                description: "Are you sure you want to delete this court?",
                on_confirm: handle_delete,
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
