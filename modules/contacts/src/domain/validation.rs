//! Field rules for contact payloads.
//!
//! Both payload shapes (create and partial update) validate against the same
//! bound constants and check helpers; they differ only in which fields are
//! required. Violations are collected into [`FieldErrors`] keyed by the wire
//! field name, so a caller can fix everything in one round trip.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contract::model::{ContactPatch, NewContact};
use crate::domain::error::FieldErrors;

pub const FIRST_NAME_MAX: usize = 100;
pub const LAST_NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const PHONE_MAX: usize = 20;
pub const COMPANY_MAX: usize = 200;
pub const ADDRESS_LINE_MAX: usize = 255;
pub const CITY_MAX: usize = 100;
pub const STATE_MAX: usize = 100;
pub const POSTAL_CODE_MAX: usize = 20;
pub const COUNTRY_MAX: usize = 100;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap());

/// Validate a create payload. First name, last name and email are required;
/// everything else is checked only when present.
pub fn validate_new_contact(contact: &NewContact) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    check_required_text(
        &mut errors,
        "firstName",
        "First name",
        &contact.first_name,
        FIRST_NAME_MAX,
    );
    check_required_text(
        &mut errors,
        "lastName",
        "Last name",
        &contact.last_name,
        LAST_NAME_MAX,
    );
    check_email(&mut errors, Some(contact.email.as_str()));
    check_phone(&mut errors, contact.phone.as_deref());
    check_optional_fields(&mut errors, OptionalFields::of_new(contact));

    errors.into_result()
}

/// Validate a partial-update payload. Every field is optional, but a field
/// that is present must satisfy the same rule it has on create.
pub fn validate_contact_patch(patch: &ContactPatch) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(first_name) = patch.first_name.as_deref() {
        check_required_text(&mut errors, "firstName", "First name", first_name, FIRST_NAME_MAX);
    }
    if let Some(last_name) = patch.last_name.as_deref() {
        check_required_text(&mut errors, "lastName", "Last name", last_name, LAST_NAME_MAX);
    }
    check_email(&mut errors, patch.email.as_deref());
    check_phone(&mut errors, patch.phone.as_deref());
    check_optional_fields(&mut errors, OptionalFields::of_patch(patch));

    errors.into_result()
}

/// The bounded free-text fields shared by both payload shapes.
struct OptionalFields<'a> {
    company: Option<&'a str>,
    address_line1: Option<&'a str>,
    address_line2: Option<&'a str>,
    city: Option<&'a str>,
    state: Option<&'a str>,
    postal_code: Option<&'a str>,
    country: Option<&'a str>,
}

impl<'a> OptionalFields<'a> {
    fn of_new(contact: &'a NewContact) -> Self {
        Self {
            company: contact.company.as_deref(),
            address_line1: contact.address_line1.as_deref(),
            address_line2: contact.address_line2.as_deref(),
            city: contact.city.as_deref(),
            state: contact.state.as_deref(),
            postal_code: contact.postal_code.as_deref(),
            country: contact.country.as_deref(),
        }
    }

    fn of_patch(patch: &'a ContactPatch) -> Self {
        Self {
            company: patch.company.as_deref(),
            address_line1: patch.address_line1.as_deref(),
            address_line2: patch.address_line2.as_deref(),
            city: patch.city.as_deref(),
            state: patch.state.as_deref(),
            postal_code: patch.postal_code.as_deref(),
            country: patch.country.as_deref(),
        }
    }
}

fn check_optional_fields(errors: &mut FieldErrors, fields: OptionalFields<'_>) {
    check_max_len(errors, "company", "Company name", fields.company, COMPANY_MAX);
    check_max_len(
        errors,
        "addressLine1",
        "Address line 1",
        fields.address_line1,
        ADDRESS_LINE_MAX,
    );
    check_max_len(
        errors,
        "addressLine2",
        "Address line 2",
        fields.address_line2,
        ADDRESS_LINE_MAX,
    );
    check_max_len(errors, "city", "City", fields.city, CITY_MAX);
    check_max_len(errors, "state", "State", fields.state, STATE_MAX);
    check_max_len(
        errors,
        "postalCode",
        "Postal code",
        fields.postal_code,
        POSTAL_CODE_MAX,
    );
    check_max_len(errors, "country", "Country", fields.country, COUNTRY_MAX);
}

fn check_required_text(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: &str,
    max: usize,
) {
    if value.trim().is_empty() {
        errors.push(field, format!("{label} is required."));
    }
    if value.len() > max {
        errors.push(field, format!("{label} must be at most {max} characters."));
    }
}

fn check_max_len(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: Option<&str>,
    max: usize,
) {
    if let Some(value) = value {
        if value.len() > max {
            errors.push(field, format!("{label} must be at most {max} characters."));
        }
    }
}

fn check_email(errors: &mut FieldErrors, value: Option<&str>) {
    let Some(email) = value else { return };
    if email.len() > EMAIL_MAX {
        errors.push(
            "email",
            format!("Email must be at most {EMAIL_MAX} characters."),
        );
    }
    if !EMAIL_RE.is_match(email) {
        errors.push("email", "Valid email address is required.");
    }
}

fn check_phone(errors: &mut FieldErrors, value: Option<&str>) {
    let Some(phone) = value else { return };
    // Empty phone is treated as "not provided", as the original API did.
    if phone.is_empty() {
        return;
    }
    if phone.len() > PHONE_MAX || !PHONE_RE.is_match(phone) {
        errors.push("phone", "Phone number must be in format 555-555-5555.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_new_contact() -> NewContact {
        NewContact {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@example.com".into(),
            phone: Some("555-123-4567".into()),
            company: Some("Tech Corp".into()),
            address_line1: None,
            address_line2: None,
            city: None,
            state: None,
            postal_code: None,
            country: None,
            is_active: true,
        }
    }

    #[test]
    fn valid_create_payload_passes() {
        assert!(validate_new_contact(&valid_new_contact()).is_ok());
    }

    #[test]
    fn bad_email_is_keyed_to_email() {
        let mut contact = valid_new_contact();
        contact.email = "bad".into();

        let errors = validate_new_contact(&contact).unwrap_err();
        let messages = errors.get("email").expect("email errors");
        assert_eq!(messages, ["Valid email address is required."].as_slice());
    }

    #[test]
    fn all_violations_are_collected() {
        let contact = NewContact {
            first_name: "".into(),
            last_name: "x".repeat(LAST_NAME_MAX + 1),
            email: "nope".into(),
            phone: Some("12345".into()),
            company: Some("c".repeat(COMPANY_MAX + 1)),
            ..valid_new_contact()
        };

        let errors = validate_new_contact(&contact).unwrap_err();
        assert!(errors.get("firstName").is_some());
        assert!(errors.get("lastName").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("phone").is_some());
        assert!(errors.get("company").is_some());
    }

    #[test]
    fn phone_format_must_match_exactly() {
        let mut contact = valid_new_contact();
        for bad in ["5551234567", "555-12-34567", "abc-def-ghij", "555-123-45678"] {
            contact.phone = Some(bad.into());
            assert!(
                validate_new_contact(&contact).is_err(),
                "expected {bad:?} to be rejected"
            );
        }
        contact.phone = Some("555-555-5555".into());
        assert!(validate_new_contact(&contact).is_ok());
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(validate_contact_patch(&ContactPatch::default()).is_ok());
    }

    #[test]
    fn patch_rejects_blank_required_field_when_present() {
        let patch = ContactPatch {
            first_name: Some("   ".into()),
            ..ContactPatch::default()
        };
        let errors = validate_contact_patch(&patch).unwrap_err();
        assert!(errors.get("firstName").is_some());
    }

    #[test]
    fn patch_validates_only_supplied_fields() {
        let patch = ContactPatch {
            email: Some("still-bad".into()),
            ..ContactPatch::default()
        };
        let errors = validate_contact_patch(&patch).unwrap_err();
        assert!(errors.get("email").is_some());
        assert!(errors.get("firstName").is_none());
    }
}
