//! Client-side filtering and option-list derivation for the firms
//! dashboard. Everything here is pure so the orchestration in the page
//! component stays thin.

use shared_types::{Advocate, AdvocateStatus, Firm};

/// Keep only advocates whose name, email, or phone contains `search`
/// (case-insensitive), drop firms left with no matching advocates, and
/// recompute each retained firm's advocate count from the filtered
/// subset. An empty or blank search returns the list unchanged.
pub fn filter_firms_by_advocate(firms: &[Firm], search: &str) -> Vec<Firm> {
    let term = search.trim().to_lowercase();
    if term.is_empty() {
        return firms.to_vec();
    }

    firms
        .iter()
        .filter_map(|firm| {
            let matching: Vec<Advocate> = firm
                .advocates
                .iter()
                .filter(|advocate| advocate_matches(advocate, &term))
                .cloned()
                .collect();
            if matching.is_empty() {
                return None;
            }
            let mut filtered = firm.clone();
            filtered.advocate_count = Some(matching.len() as u32);
            filtered.advocates = matching;
            Some(filtered)
        })
        .collect()
}

fn advocate_matches(advocate: &Advocate, term: &str) -> bool {
    let field_matches =
        |field: &Option<String>| field.as_deref().is_some_and(|v| v.to_lowercase().contains(term));

    advocate.name.to_lowercase().contains(term)
        || field_matches(&advocate.email)
        || field_matches(&advocate.phone)
}

/// De-duplicated, blank-free name list, preserving first-seen order.
pub fn distinct_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|existing: &String| existing.as_str() == name) {
            seen.push(name.to_string());
        }
    }
    seen
}

pub fn firm_name_options(firms: &[Firm]) -> Vec<String> {
    distinct_names(firms.iter().map(|firm| firm.name.as_str()))
}

pub fn advocate_name_options(advocates: &[Advocate]) -> Vec<String> {
    distinct_names(advocates.iter().map(|advocate| advocate.name.as_str()))
}

/// Copy for the empty-results panel. With an active filter or search
/// term the admin should adjust it; with none, there is simply no data
/// yet.
pub fn empty_state_message(firm_filter: &str, advocate_search: &str) -> &'static str {
    if firm_filter.trim().is_empty() && advocate_search.trim().is_empty() {
        "The admin panel will display firms and advocates once users register."
    } else {
        "No firms match your filter. Try a different search term."
    }
}

/// Locate the firm the active filter refers to. Matching is tolerant:
/// exact case-insensitive equality first, then substring containment.
pub fn find_selected_firm<'a>(firms: &'a [Firm], filter: &str) -> Option<&'a Firm> {
    let needle = filter.to_lowercase();
    firms.iter().find(|firm| {
        let name = firm.name.to_lowercase();
        name == needle || name.contains(&needle)
    })
}

/// Mutate the one advocate's status in place, leaving every other field
/// and every other advocate untouched.
pub fn apply_status_change(firms: &mut [Firm], user_id: i64, status: AdvocateStatus) {
    for firm in firms.iter_mut() {
        for advocate in firm.advocates.iter_mut() {
            if advocate.id == user_id {
                advocate.status = status;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn advocate(id: i64, name: &str, status: AdvocateStatus, verified: bool) -> Advocate {
        Advocate {
            id,
            name: name.to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: Some(format!("555-000{id}")),
            address: None,
            status,
            email_verified: verified,
        }
    }

    fn firm(id: i64, name: &str, advocates: Vec<Advocate>) -> Firm {
        Firm {
            id,
            name: name.to_string(),
            email: None,
            phone: None,
            address: None,
            advocates,
            advocate_count: None,
        }
    }

    #[test]
    fn search_keeps_matching_advocates_and_recounts() {
        let firms = vec![firm(
            1,
            "Acme Law",
            vec![
                advocate(1, "Jane", AdvocateStatus::Pending, true),
                advocate(2, "Bob", AdvocateStatus::Active, true),
            ],
        )];

        let filtered = filter_firms_by_advocate(&firms, "jane");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Acme Law");
        assert_eq!(filtered[0].advocates.len(), 1);
        assert_eq!(filtered[0].advocates[0].name, "Jane");
        assert_eq!(filtered[0].advocate_count, Some(1));
    }

    #[test]
    fn search_drops_firms_with_no_matches() {
        let firms = vec![
            firm(1, "Acme Law", vec![advocate(1, "Jane", AdvocateStatus::Active, true)]),
            firm(2, "Harbor & Finch", vec![advocate(2, "Bob", AdvocateStatus::Active, true)]),
        ];

        let filtered = filter_firms_by_advocate(&firms, "jane");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn search_matches_email_and_phone_too() {
        let firms = vec![firm(
            1,
            "Acme Law",
            vec![
                advocate(1, "Jane", AdvocateStatus::Active, true),
                advocate(2, "Bob", AdvocateStatus::Active, true),
            ],
        )];

        let by_email = filter_firms_by_advocate(&firms, "BOB@example");
        assert_eq!(by_email[0].advocates.len(), 1);
        assert_eq!(by_email[0].advocates[0].name, "Bob");

        let by_phone = filter_firms_by_advocate(&firms, "555-0001");
        assert_eq!(by_phone[0].advocates.len(), 1);
        assert_eq!(by_phone[0].advocates[0].name, "Jane");
    }

    #[test]
    fn blank_search_is_a_passthrough() {
        let firms = vec![firm(1, "Acme Law", vec![])];
        assert_eq!(filter_firms_by_advocate(&firms, "   "), firms);
    }

    #[test]
    fn distinct_names_drops_duplicates_and_blanks() {
        let names = ["Jane", "", "Bob", "  ", "Jane", "Mary"];
        assert_eq!(
            distinct_names(names.into_iter()),
            vec!["Jane".to_string(), "Bob".to_string(), "Mary".to_string()]
        );
    }

    #[test]
    fn selected_firm_matches_exactly_or_by_substring() {
        let firms = vec![
            firm(1, "Acme Law", vec![]),
            firm(2, "Harbor & Finch", vec![]),
        ];

        assert_eq!(find_selected_firm(&firms, "acme law").map(|f| f.id), Some(1));
        assert_eq!(find_selected_firm(&firms, "Harbor").map(|f| f.id), Some(2));
        assert_eq!(find_selected_firm(&firms, "Nonexistent").map(|f| f.id), None);
    }

    #[test]
    fn status_change_touches_only_the_target_advocate() {
        let mut firms = vec![firm(
            1,
            "Acme Law",
            vec![
                advocate(1, "Jane", AdvocateStatus::Pending, true),
                advocate(2, "Bob", AdvocateStatus::Inactive, false),
            ],
        )];

        apply_status_change(&mut firms, 1, AdvocateStatus::Active);

        assert_eq!(firms[0].advocates[0].status, AdvocateStatus::Active);
        assert!(firms[0].advocates[0].email_verified);
        assert_eq!(firms[0].advocates[1].status, AdvocateStatus::Inactive);
        assert!(!firms[0].advocates[1].email_verified);
    }

    #[test]
    fn empty_state_copy_follows_the_active_filters() {
        let no_data = "The admin panel will display firms and advocates once users register.";
        let no_match = "No firms match your filter. Try a different search term.";

        assert_eq!(empty_state_message("", ""), no_data);
        assert_eq!(empty_state_message("  ", "  "), no_data);
        assert_eq!(empty_state_message("Acme", ""), no_match);
        assert_eq!(empty_state_message("", "jane"), no_match);
    }

    #[test]
    fn option_lists_derive_from_records() {
        let firms = vec![
            firm(1, "Acme Law", vec![]),
            firm(2, "Acme Law", vec![]),
            firm(3, "Harbor & Finch", vec![]),
        ];
        assert_eq!(
            firm_name_options(&firms),
            vec!["Acme Law".to_string(), "Harbor & Finch".to_string()]
        );

        let advocates = vec![
            advocate(1, "Jane", AdvocateStatus::Active, true),
            advocate(2, "Jane", AdvocateStatus::Pending, false),
        ];
        assert_eq!(advocate_name_options(&advocates), vec!["Jane".to_string()]);
    }
}
