//! Deterministic demo dataset.
//!
//! Seeds a fixed-size set of plausible contacts from a seeded RNG so every
//! fresh start serves the same data. Skipped when the store already holds
//! records.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::contract::model::Contact;
use crate::domain::repo::{ContactsRepository, StoreError};

pub const DEFAULT_SEED_COUNT: u32 = 153;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Lisa", "James", "Mary",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];
const COMPANIES: &[&str] = &[
    "Tech Corp",
    "Digital Solutions",
    "Innovation Inc",
    "Global Systems",
    "Future Technologies",
    "Smart Solutions",
    "Advanced Systems",
    "Modern Tech",
    "Digital Innovations",
    "Tech Solutions",
];
const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];
const STATES: &[&str] = &["NY", "CA", "IL", "TX", "AZ", "PA", "TX", "CA", "TX", "CA"];

/// Populate an empty store with `count` demo contacts. Returns the number
/// inserted (0 when the store already had data).
pub async fn seed_contacts(
    repo: &dyn ContactsRepository,
    count: u32,
) -> Result<u32, StoreError> {
    if !repo.list().await?.is_empty() {
        return Ok(0);
    }

    // Fixed seed for consistent data across restarts.
    let mut rng = StdRng::seed_from_u64(42);
    let now = Utc::now();

    for i in 1..=count {
        let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let company = COMPANIES[rng.gen_range(0..COMPANIES.len())];
        let city_idx = rng.gen_range(0..CITIES.len());

        let created_at = now - Duration::days(rng.gen_range(1..365));
        // Keep created_at <= updated_at even for heavily backdated records.
        let updated_at = (now - Duration::days(rng.gen_range(0..30))).max(created_at);

        let contact = Contact {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!(
                "{}.{}{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                i
            ),
            phone: Some(format!(
                "555-{}-{}",
                rng.gen_range(100..1000),
                rng.gen_range(1000..10000)
            )),
            company: Some(company.to_string()),
            address_line1: Some(format!("{} Main St", rng.gen_range(100..1000))),
            address_line2: if rng.gen_range(0..2) == 1 {
                Some(format!("Apt {}", rng.gen_range(1..1000)))
            } else {
                None
            },
            city: Some(CITIES[city_idx].to_string()),
            state: Some(STATES[city_idx].to_string()),
            postal_code: Some(format!("{}", rng.gen_range(10000..100000))),
            country: Some("USA".to_string()),
            is_active: rng.gen_range(0..10) > 1, // 90% active
            created_at,
            updated_at,
        };

        repo.insert(contact).await?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::storage::InMemoryContactsRepository;

    #[tokio::test]
    async fn seeds_the_requested_number_of_contacts() {
        let repo = InMemoryContactsRepository::new();
        let inserted = seed_contacts(&repo, DEFAULT_SEED_COUNT).await.unwrap();
        assert_eq!(inserted, 153);
        assert_eq!(repo.len(), 153);
    }

    #[tokio::test]
    async fn seeding_a_populated_store_is_a_no_op() {
        let repo = InMemoryContactsRepository::new();
        seed_contacts(&repo, 5).await.unwrap();
        let inserted = seed_contacts(&repo, 5).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(repo.len(), 5);
    }

    #[tokio::test]
    async fn seeded_contacts_satisfy_the_model_invariants() {
        let repo = InMemoryContactsRepository::new();
        seed_contacts(&repo, DEFAULT_SEED_COUNT).await.unwrap();

        let contacts = repo.list().await.unwrap();
        let mut emails: Vec<String> = contacts.iter().map(|c| c.email.clone()).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), contacts.len(), "emails must be unique");

        for c in &contacts {
            assert!(c.created_at <= c.updated_at);
            assert!(c.phone.as_deref().unwrap().starts_with("555-"));
        }
    }
}
