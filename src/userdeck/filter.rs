//! Case-insensitive substring search over a fixed set of record fields.

use super::model::UserRecord;

/// Fields consulted by [`matches`], in the order they are checked.
pub const SEARCHED_FIELDS: [(&str, fn(&UserRecord) -> &str); 6] = [
    ("name", |user| user.name.as_str()),
    ("email", |user| user.email.as_str()),
    ("username", |user| user.username.as_str()),
    ("phone", |user| user.phone.as_str()),
    ("city", |user| user.address.city.as_str()),
    ("company", |user| user.company.name.as_str()),
];

/// Returns true when any searched field contains `needle`.
/// `needle` must already be lowercase.
#[must_use]
pub fn matches(user: &UserRecord, needle: &str) -> bool {
    SEARCHED_FIELDS
        .iter()
        .any(|(_, field)| field(user).to_lowercase().contains(needle))
}

/// Narrows `source` to the records matching `term`, keeping their relative order.
/// An empty term keeps everything.
pub fn filter<'a>(term: &str, source: &'a [UserRecord]) -> Vec<&'a UserRecord> {
    if term.is_empty() {
        return source.iter().collect();
    }

    let needle = term.to_lowercase();
    source.iter().filter(|user| matches(user, &needle)).collect()
}
