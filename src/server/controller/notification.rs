use std::convert::Infallible;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    Json,
};
use serde::Deserialize;
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        notification::{MarkedReadDto, NotificationDto, UnreadCountDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::notification::Notification,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct NotificationQuery {
    /// Only list unread notifications (default: false)
    #[serde(default)]
    pub unread_only: bool,
}

/// List the caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(NotificationQuery, PaginationParams),
    responses(
        (status = 200, description = "Page of notifications", body = PageDto<NotificationDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NotificationQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let notifications = NotificationService::new(&state.db, &state.notifications)
        .list_for_user(user.id, query.unread_only, params.checked_page()?, params.per_page())
        .await?;

    Ok((
        StatusCode::OK,
        Json(notifications.into_dto(Notification::into_dto)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of unread notifications", body = UnreadCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let unread = NotificationService::new(&state.db, &state.notifications)
        .unread_count(user.id)
        .await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { unread })))
}

/// Mark one of the caller's notifications as read.
///
/// # Returns
/// - `200 OK` - The updated notification
/// - `404 Not Found` - No such notification for the caller
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let notification = NotificationService::new(&state.db, &state.notifications)
        .mark_read(id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of notifications marked read", body = MarkedReadDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let updated = NotificationService::new(&state.db, &state.notifications)
        .mark_all_read(user.id)
        .await?;

    Ok((StatusCode::OK, Json(MarkedReadDto { updated })))
}

/// Stream the caller's new notifications as server-sent events.
///
/// Each event is named `notification` and carries a [`NotificationDto`] as JSON. Only
/// notifications created after the stream was opened are delivered.
#[utoipa::path(
    get,
    path = "/api/notifications/stream",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Event stream of notifications", body = String, content_type = "text/event-stream"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn stream_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let user_id = user.id;

    tracing::debug!("User {} opened a notification stream", user_id);

    let stream = BroadcastStream::new(state.notifications.subscribe()).filter_map(
        move |received| match received {
            Ok(notification) if notification.user_id == user_id => {
                match Event::default()
                    .event("notification")
                    .json_data(notification.into_dto())
                {
                    Ok(event) => Some(Ok(event)),
                    Err(e) => {
                        tracing::error!("Failed to encode notification event: {}", e);
                        None
                    }
                }
            }
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Notification stream of user {} lagged: {}", user_id, e);
                None
            }
        },
    );

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
