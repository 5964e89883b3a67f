//! The list query engine.
//!
//! A pure function over a store snapshot: filter, count, order, then slice
//! one page. The returned `total` always reflects the filtered set, not the
//! page and not the whole store.

use std::cmp::Ordering;

use crate::contract::model::{Contact, ContactQuery, Page, SortDir, SortField};

/// Run a list query against a snapshot of the store.
pub fn run(records: Vec<Contact>, query: &ContactQuery) -> Page<Contact> {
    let mut matched: Vec<Contact> = records
        .into_iter()
        .filter(|c| query.is_active.is_none_or(|want| c.is_active == want))
        .filter(|c| matches_search(c, query.search.as_deref()))
        .collect();

    let total = matched.len() as u64;

    sort_contacts(&mut matched, query.sort, query.dir);

    let skip = query.page.saturating_sub(1) as usize * query.page_size as usize;
    let items: Vec<Contact> = matched
        .into_iter()
        .skip(skip)
        .take(query.page_size as usize)
        .collect();

    Page::new(items, total)
}

/// Case-sensitive substring match across the searchable fields (OR).
/// An absent or empty needle matches everything.
fn matches_search(contact: &Contact, needle: Option<&str>) -> bool {
    let Some(needle) = needle else { return true };
    if needle.is_empty() {
        return true;
    }
    contact.first_name.contains(needle)
        || contact.last_name.contains(needle)
        || contact.email.contains(needle)
        || contact.phone.as_deref().is_some_and(|p| p.contains(needle))
        || contact
            .company
            .as_deref()
            .is_some_and(|c| c.contains(needle))
}

fn sort_contacts(contacts: &mut [Contact], sort: Option<SortField>, dir: SortDir) {
    match sort {
        Some(field) => contacts.sort_by(|a, b| {
            let ordering = compare_by(a, b, field);
            match dir {
                SortDir::Asc => ordering,
                SortDir::Desc => ordering.reverse(),
            }
        }),
        // Unrecognized sort keys: last name then first name, always
        // ascending; the direction parameter is not applied here.
        None => contacts.sort_by(fallback_order),
    }
}

/// Total order for a recognized sort key. `id` is the final tiebreaker on
/// every key so that equal-key runs paginate stably across calls.
fn compare_by(a: &Contact, b: &Contact, field: SortField) -> Ordering {
    match field {
        SortField::FirstName => a
            .first_name
            .cmp(&b.first_name)
            .then_with(|| a.id.cmp(&b.id)),
        SortField::LastName => a
            .last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
            .then_with(|| a.id.cmp(&b.id)),
        SortField::Email => a.email.cmp(&b.email).then_with(|| a.id.cmp(&b.id)),
        SortField::Company => company_key(a)
            .cmp(company_key(b))
            .then_with(|| a.id.cmp(&b.id)),
        SortField::CreatedAt => a
            .created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id)),
    }
}

fn fallback_order(a: &Contact, b: &Contact) -> Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
        .then_with(|| a.id.cmp(&b.id))
}

/// A missing company sorts as the empty string, i.e. first in ascending order.
fn company_key(contact: &Contact) -> &str {
    contact.company.as_deref().unwrap_or("")
}
