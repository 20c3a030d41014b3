use std::collections::HashSet;

use dioxus::prelude::*;
use shared_types::Firm;
use shared_ui::{
    Badge, BadgeVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow,
};

use super::AdvocatesTable;

/// Firm list with one expandable advocate panel at a time.
#[component]
pub fn FirmsTable(
    firms: Vec<Firm>,
    pending: HashSet<i64>,
    on_activate: EventHandler<(i64, String)>,
    on_deactivate: EventHandler<(i64, String)>,
) -> Element {
    let mut expanded = use_signal(|| Option::<i64>::None);

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Firm Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Phone" }
                DataTableColumn { "Address" }
                DataTableColumn { "Advocates" }
            }
            DataTableBody {
                for firm in firms.iter().cloned() {
                    {
                        let firm_id = firm.id;
                        let is_expanded = expanded() == Some(firm_id);
                        let count = firm.advocate_total();
                        rsx! {
                            DataTableRow {
                                key: "{firm_id}",
                                selected: is_expanded,
                                onclick: move |_| {
                                    expanded.set(if is_expanded { None } else { Some(firm_id) });
                                },
                                DataTableCell { "{firm.name}" }
                                DataTableCell { {firm.email.as_deref().unwrap_or("-")} }
                                DataTableCell { {firm.phone.as_deref().unwrap_or("-")} }
                                DataTableCell { {firm.address.as_deref().unwrap_or("-")} }
                                DataTableCell {
                                    Badge {
                                        variant: BadgeVariant::Primary,
                                        if count == 1 { "1 Advocate" } else { "{count} Advocates" }
                                    }
                                }
                            }
                            if is_expanded {
                                DataTableRow { key: "{firm_id}-advocates",
                                    DataTableCell { colspan: 5,
                                        AdvocatesTable {
                                            advocates: firm.advocates.clone(),
                                            pending: pending.clone(),
                                            on_activate,
                                            on_deactivate,
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
}
