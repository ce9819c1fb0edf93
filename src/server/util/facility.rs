//! Facility and house rule lists are stored as comma-joined text columns.

/// Joins trimmed, non-empty entries with `,`; `None` when nothing remains.
pub fn join_list(items: &[String]) -> Option<String> {
    let items: Vec<&str> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items.join(","))
    }
}

/// Splits a stored list back into trimmed, non-empty entries.
pub fn split_list(stored: Option<&str>) -> Vec<String> {
    stored
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
