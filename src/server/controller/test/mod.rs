use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        api::PageDto,
        department::DepartmentDto,
        document::{DocumentDto, DocumentStatus, DocumentWithRelationsDto, HistoryEntryDto},
        notification::{MarkedReadDto, NotificationDto, UnreadCountDto},
        user::{TokenDto, UserDto},
    },
    server::{
        router,
        service::{notification::hub::NotificationHub, token::TokenService},
        state::AppState,
    },
};


const SECRET: &str = "controller-test-secret";

/// Serves the full API router over the given database.
fn server(db: &DatabaseConnection) -> TestServer {
    let state = AppState::new(
        db.clone(),
        TokenService::new(SECRET, 1),
        NotificationHub::new(),
    );

    TestServer::new(router::router().with_state(state)).unwrap()
}

/// `Authorization` header value carrying a fresh token for `user_id`.
fn bearer(user_id: i32) -> HeaderValue {
    let (token, _) = TokenService::new(SECRET, 1).issue(user_id).unwrap();
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}
