use dioxus::prelude::*;
use shared_types::{CourtType, CourtTypePayload};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, ConfirmDialog, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Dialog, DialogClose,
    DialogFooter, DialogHeader, DialogTitle, Input, PageActions, PageHeader, PageTitle, SearchBar,
    Skeleton,
};

use crate::api::Client;
use crate::debounce::{use_debouncer, SEARCH_DEBOUNCE_MS};
use crate::session::use_session;

/// Court-type reference-data page; same shape as the courts page with a
/// single-field form.
#[component]
pub fn CourtTypesPage() -> Element {
    let session = use_session();
    let toast = use_toast();

    let mut search = use_signal(String::new);
    let mut court_types = use_signal(Vec::<CourtType>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<CourtType>::None);
    let mut form_name = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut confirm_delete = use_signal(|| Option::<CourtType>::None);

    let debouncer = use_debouncer(SEARCH_DEBOUNCE_MS);

    let load_court_types = move || {
        spawn(async move {
            loading.set(true);
            error_msg.set(None);

            let client = Client::new(session);
            let term = search.peek().clone();
            match client
                .list_court_types((!term.is_empty()).then_some(term.as_str()))
                .await
            {
                Ok(loaded) => court_types.set(loaded),
                Err(err) => {
                    if !err.is_unauthorized() {
                        error_msg.set(Some(err.or_fallback("Failed to load court types")));
                    }
                }
            }
            loading.set(false);
        });
    };

    use_future(move || async move { load_court_types() });

    let handle_search = move |evt: FormEvent| {
        search.set(evt.value());
        debouncer.schedule(load_court_types);
    };

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
        form_name.set(String::new());
    };

    let open_create = move |_| {
        editing.set(None);
        form_name.set(String::new());
        show_modal.set(true);
    };

    let mut open_edit = move |court_type: CourtType| {
        form_name.set(court_type.court_type_name.clone());
        editing.set(Some(court_type));
        show_modal.set(true);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = CourtTypePayload {
            court_type_name: form_name.peek().trim().to_string(),
        };
        let editing_id = editing.peek().as_ref().map(|ct| ct.id);

        spawn(async move {
            submitting.set(true);
            let client = Client::new(session);
            let result = match editing_id {
                Some(id) => client.update_court_type(id, &payload).await,
                None => client.create_court_type(&payload).await,
            };
            submitting.set(false);

            match result {
                Ok(()) => {
                    if editing_id.is_some() {
                        toast.success("Court type updated successfully");
                    } else {
                        toast.success("Court type created successfully");
                    }
                    close_modal();
                    load_court_types();
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        let fallback = if editing_id.is_some() {
                            "Failed to update court type"
                        } else {
                            "Failed to create court type"
                        };
                        toast.error(err.or_fallback(fallback));
                    }
                }
            }
        });
    };

    let handle_delete = move |_| {
        let Some(court_type) = confirm_delete.write().take() else {
            return;
        };
        spawn(async move {
            let client = Client::new(session);
            match client.delete_court_type(court_type.id).await {
                Ok(()) => {
                    toast.success("Court type deleted successfully");
                    load_court_types();
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        toast.error(err.or_fallback("Failed to delete court type"));
                    }
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courts.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Court Types" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: open_create,
                        "New Court Type"
                    }
                }
            }

            SearchBar {
                Input {
                    value: search(),
                    placeholder: "Search court types...",
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
                                onclick: move |_| load_court_types(),
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
            } else if court_types.read().is_empty() {
                Card {
                    CardContent {
                        p { "No court types found." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Court Type" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for court_type in court_types.read().iter().cloned() {
                            {
                                let edit_ct = court_type.clone();
                                let delete_ct = court_type.clone();
                                rsx! {
                                    DataTableRow { key: "{court_type.id}",
                                        DataTableCell { "{court_type.court_type_name}" }
                                        DataTableCell {
                                            div { class: "row-actions",
                                                Button {
                                                    variant: ButtonVariant::Secondary,
                                                    onclick: move |_| open_edit(edit_ct.clone()),
                                                    "Edit"
                                                }
                                                Button {
                                                    variant: ButtonVariant::Destructive,
                                                    onclick: move |_| confirm_delete.set(Some(delete_ct.clone())),
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
                        if editing.read().is_some() { "Edit Court Type" } else { "New Court Type" }
                    }
                }
                DialogClose { on_close: move |_| close_modal() }
                form { onsubmit: handle_submit,
                    div { class: "modal-field",
                        Input {
                            label: "Court Type Name",
                            placeholder: "e.g. Civil",
                            required: true,
                            value: form_name(),
                            on_input: move |e: FormEvent| form_name.set(e.value()),
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
                                "Update Court Type"
                            } else {
                                "Create Court Type"
                            }
                        }
                    }
                }
            }

            ConfirmDialog {
                open: confirm_delete.read().is_some(),
                title: "Delete Court Type",
                description: "Are you sure you want to delete this court type?",
                on_confirm: handle_delete,
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
