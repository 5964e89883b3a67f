use std::sync::Arc;

use api_core::problem::ProblemResponse;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    Extension,
};
use uuid::Uuid;

use crate::api::rest::dto::{
    ContactDetailDto, ContactListItemDto, ContactListResponse, CreateContactReq,
    ListContactsQuery, UpdateContactReq,
};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::ContactService;

/// List contacts with filtering, sorting and offset pagination.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    params(ListContactsQuery),
    responses(
        (status = 200, description = "One page of contacts", body = ContactListResponse),
        (status = 500, description = "Internal error", body = api_core::problem::Problem),
    )
)]
pub async fn list_contacts(
    Extension(svc): Extension<Arc<ContactService>>,
    Query(params): Query<ListContactsQuery>,
) -> Result<Json<ContactListResponse>, ProblemResponse> {
    let query = params.to_contact_query();
    let page = svc
        .list(&query)
        .await
        .map_err(|e| map_domain_error(&e, "/api/contacts"))?;

    Ok(Json(ContactListResponse {
        total: page.total,
        items: page.items.into_iter().map(ContactListItemDto::from).collect(),
        page: query.page,
        page_size: query.page_size,
        sort: params.sort_or_default(),
        dir: params.dir_or_default(),
    }))
}

/// Get a single contact by id.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = Uuid, Path, description = "Contact UUID")),
    responses(
        (status = 200, description = "Contact found", body = ContactDetailDto),
        (status = 404, description = "Not found", body = api_core::problem::Problem),
        (status = 500, description = "Internal error", body = api_core::problem::Problem),
    )
)]
pub async fn get_contact(
    Extension(svc): Extension<Arc<ContactService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactDetailDto>, ProblemResponse> {
    let contact = svc
        .get(id)
        .await
        .map_err(|e| map_domain_error(&e, &format!("/api/contacts/{id}")))?;
    Ok(Json(ContactDetailDto::from(contact)))
}

/// Create a new contact.
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    request_body = CreateContactReq,
    responses(
        (status = 201, description = "Created contact", body = ContactDetailDto),
        (status = 400, description = "Validation failed", body = api_core::problem::Problem),
        (status = 409, description = "Email already exists", body = api_core::problem::Problem),
        (status = 500, description = "Internal error", body = api_core::problem::Problem),
    )
)]
pub async fn create_contact(
    Extension(svc): Extension<Arc<ContactService>>,
    Json(req): Json<CreateContactReq>,
) -> Result<(StatusCode, Json<ContactDetailDto>), ProblemResponse> {
    let contact = svc
        .create(req.into())
        .await
        .map_err(|e| map_domain_error(&e, "/api/contacts"))?;
    Ok((StatusCode::CREATED, Json(ContactDetailDto::from(contact))))
}

/// Update an existing contact with partial data.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = Uuid, Path, description = "Contact UUID")),
    request_body = UpdateContactReq,
    responses(
        (status = 200, description = "Updated contact", body = ContactDetailDto),
        (status = 400, description = "Validation failed", body = api_core::problem::Problem),
        (status = 404, description = "Not found", body = api_core::problem::Problem),
        (status = 409, description = "Email already exists", body = api_core::problem::Problem),
        (status = 500, description = "Internal error", body = api_core::problem::Problem),
    )
)]
pub async fn update_contact(
    Extension(svc): Extension<Arc<ContactService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateContactReq>,
) -> Result<Json<ContactDetailDto>, ProblemResponse> {
    let contact = svc
        .update(id, req.into())
        .await
        .map_err(|e| map_domain_error(&e, &format!("/api/contacts/{id}")))?;
    Ok(Json(ContactDetailDto::from(contact)))
}

/// Delete a contact by id.
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = Uuid, Path, description = "Contact UUID")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "Not found", body = api_core::problem::Problem),
        (status = 500, description = "Internal error", body = api_core::problem::Problem),
    )
)]
pub async fn delete_contact(
    Extension(svc): Extension<Arc<ContactService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ProblemResponse> {
    svc.delete(id)
        .await
        .map_err(|e| map_domain_error(&e, &format!("/api/contacts/{id}")))?;
    Ok(StatusCode::NO_CONTENT)
}
