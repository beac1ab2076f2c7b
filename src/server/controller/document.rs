use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        document::{
            ChangeStatusDto, CommentDto, CreateDocumentDto, DistributeDocumentDto, DocumentDto,
            DocumentKind, DocumentStatus, DocumentWithRelationsDto, HistoryEntryDto,
            RegisterDocumentDto, UpdateDocumentDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::document::{
            CreateDocumentParams, Document, DocumentFilter, HistoryEntry, UpdateDocumentParams,
        },
        service::{document::DocumentService, workflow::WorkflowService},
        state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

/// Query filters for the document listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DocumentQuery {
    pub kind: Option<DocumentKind>,
    pub status: Option<DocumentStatus>,
    /// Owning department
    pub department_id: Option<i32>,
    /// Substring of the title or registration number
    pub search: Option<String>,
}

impl DocumentQuery {
    fn into_filter(self) -> DocumentFilter {
        DocumentFilter {
            kind: self.kind,
            status: self.status,
            department_id: self.department_id,
            search: self.search.filter(|s| !s.trim().is_empty()),
            visible_to_department: None,
        }
    }
}

/// Create a draft document.
///
/// The caller becomes the author. Executors may only create documents for their own
/// department.
///
/// # Access Control
/// - Any user with access to documents
///
/// # Returns
/// - `201 Created` - The created draft
/// - `400 Bad Request` - Missing title, unknown department or invalid details
/// - `403 Forbidden` - Department outside the caller's scope
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Document created", body = DocumentDto),
        (status = 400, description = "Invalid document data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Department outside the caller's scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let document = DocumentService::new(&state.db)
        .create(&user, CreateDocumentParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// List documents visible to the caller, newest first.
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    params(DocumentQuery, PaginationParams),
    responses(
        (status = 200, description = "Page of documents", body = PageDto<DocumentDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to documents", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DocumentQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let documents = DocumentService::new(&state.db)
        .get_paginated(&user, query.into_filter(), params.checked_page()?, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(documents.into_dto(Document::into_dto))))
}

/// Get a document with its assignments and history.
#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "The document", body = DocumentWithRelationsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Document outside the caller's scope", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_document_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let document = DocumentService::new(&state.db).get_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Edit a document while it is a draft or freshly registered.
///
/// # Returns
/// - `200 OK` - The updated document
/// - `400 Bad Request` - Details of another kind, or invalid data
/// - `409 Conflict` - Document is already being processed
#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = UpdateDocumentDto,
    responses(
        (status = 200, description = "Document updated", body = DocumentDto),
        (status = 400, description = "Invalid document data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Document outside the caller's scope", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Document can no longer be edited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let document = DocumentService::new(&state.db)
        .update(&user, id, UpdateDocumentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 204, description = "Draft deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Document outside the caller's scope", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Document is not a draft", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    DocumentService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the history of a document, oldest entry first.
#[utoipa::path(
    get,
    path = "/api/documents/{id}/history",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "History entries", body = Vec<HistoryEntryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Document outside the caller's scope", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_document_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let history: Vec<HistoryEntryDto> = DocumentService::new(&state.db)
        .history(&user, id)
        .await?
        .into_iter()
        .map(HistoryEntry::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(history)))
}

/// Register a draft document.
///
/// Without a registration number in the body one is generated as
/// `{IN|OUT|INT}-{year}-{sequence}`.
///
/// # Access Control
/// - `Registrar`
///
/// # Returns
/// - `200 OK` - The registered document
/// - `409 Conflict` - Not a draft, or registration number already in use
#[utoipa::path(
    post,
    path = "/api/documents/{id}/register",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = RegisterDocumentDto,
    responses(
        (status = 200, description = "Document registered", body = DocumentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a registrar", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Invalid transition or duplicate number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn register_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<RegisterDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Registrar])
        .await?;

    let document = WorkflowService::new(&state.db, &state.notifications)
        .register(&user, id, payload.registration_number, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Assign a document to one or more departments.
///
/// Members of every newly assigned department are notified.
///
/// # Access Control
/// - `Registrar`
#[utoipa::path(
    post,
    path = "/api/documents/{id}/distribute",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = DistributeDocumentDto,
    responses(
        (status = 200, description = "Document distributed", body = DocumentDto),
        (status = 400, description = "Empty or unknown department list", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a registrar", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Invalid transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn distribute_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<DistributeDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Registrar])
        .await?;

    let document = WorkflowService::new(&state.db, &state.notifications)
        .distribute(
            &user,
            id,
            payload.department_ids,
            payload.due_date,
            payload.comment,
        )
        .await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Move a document to IN_PROGRESS, UNDER_REVIEW, RETURNED, EXECUTED or CANCELLED.
///
/// # Access Control
/// - Any user who can see the document
///
/// # Returns
/// - `200 OK` - The updated document
/// - `400 Bad Request` - Target needs its own action, or RETURNED without a comment
/// - `409 Conflict` - Transition not allowed from the current status
#[utoipa::path(
    post,
    path = "/api/documents/{id}/status",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = ChangeStatusDto,
    responses(
        (status = 200, description = "Status changed", body = DocumentDto),
        (status = 400, description = "Invalid target status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Document outside the caller's scope", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Invalid transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn change_document_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let document = WorkflowService::new(&state.db, &state.notifications)
        .change_status(&user, id, payload.status, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Mark an executed outgoing document as sent.
///
/// # Access Control
/// - `Registrar`
#[utoipa::path(
    post,
    path = "/api/documents/{id}/send",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = CommentDto,
    responses(
        (status = 200, description = "Document sent", body = DocumentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a registrar", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Invalid transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn send_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Registrar])
        .await?;

    let document = WorkflowService::new(&state.db, &state.notifications)
        .send(&user, id, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Archive a document.
///
/// # Access Control
/// - `Commander`
#[utoipa::path(
    post,
    path = "/api/documents/{id}/archive",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = CommentDto,
    responses(
        (status = 200, description = "Document archived", body = DocumentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a commander", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Invalid transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn archive_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Commander])
        .await?;

    let document = WorkflowService::new(&state.db, &state.notifications)
        .archive(&user, id, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}
