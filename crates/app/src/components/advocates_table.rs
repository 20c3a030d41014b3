use std::collections::HashSet;

use dioxus::prelude::*;
use shared_types::{Advocate, AdvocateStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow,
};

fn status_badge_variant(status: AdvocateStatus) -> BadgeVariant {
    match status {
        AdvocateStatus::Active => BadgeVariant::Success,
        AdvocateStatus::Pending => BadgeVariant::Warning,
        AdvocateStatus::Inactive => BadgeVariant::Destructive,
    }
}

/// Advocate rows nested under an expanded firm.
#[component]
pub fn AdvocatesTable(
    advocates: Vec<Advocate>,
    pending: HashSet<i64>,
    on_activate: EventHandler<(i64, String)>,
    on_deactivate: EventHandler<(i64, String)>,
) -> Element {
    if advocates.is_empty() {
        return rsx! {
            p { class: "advocates-empty", "No advocates found for this firm." }
        };
    }

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Phone" }
                DataTableColumn { "Status" }
                DataTableColumn { "Email Verified" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                for advocate in advocates.iter().cloned() {
                    {
                        let is_pending = pending.contains(&advocate.id);
                        let id = advocate.id;
                        let name = advocate.name.clone();
                        let deactivate_name = name.clone();
                        rsx! {
                            DataTableRow { key: "{id}",
                                DataTableCell { "{advocate.name}" }
                                DataTableCell { {advocate.email.as_deref().unwrap_or("-")} }
                                DataTableCell { {advocate.phone.as_deref().unwrap_or("-")} }
                                DataTableCell {
                                    Badge {
                                        variant: status_badge_variant(advocate.status),
                                        "{advocate.status}"
                                    }
                                }
                                DataTableCell {
                                    if advocate.email_verified {
                                        Badge { variant: BadgeVariant::Success, "Verified" }
                                    } else {
                                        Badge { variant: BadgeVariant::Destructive, "Not Verified" }
                                    }
                                }
                                DataTableCell {
                                    if advocate.can_deactivate() {
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            disabled: is_pending,
                                            onclick: move |_| on_deactivate.call((id, deactivate_name.clone())),
                                            if is_pending { "Processing..." } else { "Deactivate" }
                                        }
                                    } else if advocate.can_activate() {
                                        Button {
                                            variant: ButtonVariant::Primary,
                                            disabled: is_pending,
                                            onclick: move |_| on_activate.call((id, name.clone())),
                                            if is_pending { "Processing..." } else { "Activate" }
                                        }
                                    } else {
                                        span { class: "advocates-unverified", "Email not verified" }
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
