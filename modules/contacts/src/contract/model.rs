use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Pure contact model (no serde/schemars - REST DTOs live in api::rest::dto)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new contact. The service assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub is_active: bool,
}

/// Partial update data for a contact. `None` means "leave unchanged".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub is_active: Option<bool>,
}

impl Contact {
    /// Build a contact from a validated create payload plus the
    /// service-assigned id and timestamp.
    pub fn from_new(new: NewContact, id: Uuid, at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            company: new.company,
            address_line1: new.address_line1,
            address_line2: new.address_line2,
            city: new.city,
            state: new.state,
            postal_code: new.postal_code,
            country: new.country,
            is_active: new.is_active,
            created_at: at,
            updated_at: at,
        }
    }

    /// Merge a partial update into this contact, returning the new value.
    /// Fields the patch does not carry keep their current value; id and
    /// timestamps are never touched here (the service refreshes `updated_at`).
    pub fn apply_patch(self, patch: ContactPatch) -> Self {
        Self {
            id: self.id,
            first_name: patch.first_name.unwrap_or(self.first_name),
            last_name: patch.last_name.unwrap_or(self.last_name),
            email: patch.email.unwrap_or(self.email),
            phone: patch.phone.or(self.phone),
            company: patch.company.or(self.company),
            address_line1: patch.address_line1.or(self.address_line1),
            address_line2: patch.address_line2.or(self.address_line2),
            city: patch.city.or(self.city),
            state: patch.state.or(self.state),
            postal_code: patch.postal_code.or(self.postal_code),
            country: patch.country.or(self.country),
            is_active: patch.is_active.unwrap_or(self.is_active),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Recognized sort keys for the list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    FirstName,
    LastName,
    Email,
    Company,
    CreatedAt,
}

impl SortField {
    /// Parse a wire sort key, case-insensitively. Unknown keys yield `None`
    /// and the query engine falls back to its fixed default ordering.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "firstname" => Some(Self::FirstName),
            "lastname" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "company" => Some(Self::Company),
            "createdat" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Exactly `"desc"` sorts descending; anything else is ascending.
    pub fn parse(s: &str) -> Self {
        if s == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Filter/sort/paging parameters accepted by the list operation.
#[derive(Debug, Clone)]
pub struct ContactQuery {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    /// `None` when the caller asked for an unrecognized sort key.
    pub sort: Option<SortField>,
    pub dir: SortDir,
    pub page: u32,
    pub page_size: u32,
}

impl Default for ContactQuery {
    fn default() -> Self {
        Self {
            search: None,
            is_active: None,
            sort: Some(SortField::LastName),
            dir: SortDir::Asc,
            page: 1,
            page_size: 10,
        }
    }
}

/// One page of results plus the total match count across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Map items while preserving the total (domain -> DTO convenience).
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(&mut f).collect(),
            total: self.total,
        }
    }
}
