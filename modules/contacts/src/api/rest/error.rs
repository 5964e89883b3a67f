use api_core::problem::{Problem, ProblemResponse};
use axum::http::StatusCode;

use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    Problem::new(status, title, detail)
        .with_type(format!("https://errors.example.com/{}", code))
        .with_code(code)
        .with_instance(instance)
        .into()
}

/// Map a domain error to an RFC 9457 problem response.
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::ContactNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "CONTACTS_NOT_FOUND",
            "Contact not found",
            format!("Contact with id {} was not found", id),
            instance,
        ),
        DomainError::EmailAlreadyExists { email } => from_parts(
            StatusCode::CONFLICT,
            "CONTACTS_EMAIL_CONFLICT",
            "Email already exists",
            format!("Email '{}' is already in use", email),
            instance,
        ),
        DomainError::Validation { errors } => {
            let problem = Problem::new(
                StatusCode::BAD_REQUEST,
                "Validation error",
                "One or more fields are invalid",
            )
            .with_type("https://errors.example.com/CONTACTS_VALIDATION")
            .with_code("CONTACTS_VALIDATION")
            .with_instance(instance)
            .with_field_errors(errors.clone().into_inner());
            problem.into()
        }
        DomainError::Storage { .. } => {
            // Log the internal details but don't expose them to the client.
            tracing::error!(error = ?e, "Storage error");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONTACTS_INTERNAL",
                "Internal error",
                "An internal storage error occurred",
                instance,
            )
        }
    }
}
