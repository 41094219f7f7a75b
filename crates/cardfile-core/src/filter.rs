use cardfile_db::Contact;

/// Narrows an already-loaded contact list to names starting with `query`,
/// case-insensitively. An empty query keeps everything. Pure; recomputed
/// over the full list on every keystroke.
pub fn filter_by_name<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.is_empty() {
        return contacts.iter().collect();
    }

    let query = query.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&query))
        .collect()
}
