use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};
use crate::domain::service::ContactService;

/// OpenAPI document for the contacts REST surface.
#[derive(OpenApi)]
#[openapi(
    info(title = "CRM API", description = "API for managing contacts"),
    paths(
        handlers::list_contacts,
        handlers::get_contact,
        handlers::create_contact,
        handlers::update_contact,
        handlers::delete_contact,
    ),
    components(schemas(
        dto::ContactDetailDto,
        dto::ContactListItemDto,
        dto::ContactListResponse,
        dto::CreateContactReq,
        dto::UpdateContactReq,
        api_core::problem::Problem,
    )),
    tags((name = "contacts", description = "Contact directory"))
)]
pub struct ApiDoc;

/// Build the contacts router with the service injected as an extension.
pub fn router(service: Arc<ContactService>) -> Router {
    Router::new()
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/api/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .layer(Extension(service))
}
