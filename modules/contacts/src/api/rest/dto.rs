use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::contract::model::{Contact, ContactPatch, ContactQuery, NewContact, SortDir, SortField};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SORT: &str = "lastName";
pub const DEFAULT_DIR: &str = "asc";

/// Detail projection: every stored field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetailDto {
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

/// List projection: the subset of fields the directory table shows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactListItemDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// REST DTO for creating a contact.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactReq {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// REST DTO for updating a contact (partial - omitted fields stay unchanged).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactReq {
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

/// REST DTO for list query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListContactsQuery {
    /// Free-text search across name, email, phone and company.
    pub query: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<u32>,
    /// Page size (default 10).
    pub page_size: Option<u32>,
    /// Sort key: firstName, lastName, email, company or createdAt.
    pub sort: Option<String>,
    /// "desc" for descending; anything else sorts ascending.
    pub dir: Option<String>,
    /// When set, only contacts whose active flag matches.
    pub is_active: Option<bool>,
}

/// REST DTO for the list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactListResponse {
    pub items: Vec<ContactListItemDto>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub sort: String,
    pub dir: String,
}

impl ListContactsQuery {
    /// Effective sort key string, defaulted when the caller omitted it.
    pub fn sort_or_default(&self) -> String {
        self.sort.clone().unwrap_or_else(|| DEFAULT_SORT.to_string())
    }

    /// Effective direction string, defaulted when the caller omitted it.
    pub fn dir_or_default(&self) -> String {
        self.dir.clone().unwrap_or_else(|| DEFAULT_DIR.to_string())
    }

    /// Resolve wire parameters into the contract query, applying defaults.
    pub fn to_contact_query(&self) -> ContactQuery {
        ContactQuery {
            search: self.query.clone(),
            is_active: self.is_active,
            sort: SortField::parse(&self.sort_or_default()),
            dir: SortDir::parse(&self.dir_or_default()),
            page: self.page.unwrap_or(DEFAULT_PAGE),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

// Conversion implementations between REST DTOs and contract models

impl From<Contact> for ContactDetailDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone: c.phone,
            company: c.company,
            address_line1: c.address_line1,
            address_line2: c.address_line2,
            city: c.city,
            state: c.state,
            postal_code: c.postal_code,
            country: c.country,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<Contact> for ContactListItemDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            company: c.company,
            is_active: c.is_active,
            created_at: c.created_at,
        }
    }
}

impl From<CreateContactReq> for NewContact {
    fn from(req: CreateContactReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            company: req.company,
            address_line1: req.address_line1,
            address_line2: req.address_line2,
            city: req.city,
            state: req.state,
            postal_code: req.postal_code,
            country: req.country,
            is_active: req.is_active,
        }
    }
}

impl From<UpdateContactReq> for ContactPatch {
    fn from(req: UpdateContactReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            company: req.company,
            address_line1: req.address_line1,
            address_line2: req.address_line2,
            city: req.city,
            state: req.state,
            postal_code: req.postal_code,
            country: req.country,
            is_active: req.is_active,
        }
    }
}
