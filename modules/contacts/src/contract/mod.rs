pub mod model;

pub use model::{Contact, ContactPatch, ContactQuery, NewContact, Page, SortDir, SortField};
