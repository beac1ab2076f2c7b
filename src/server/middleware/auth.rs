use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::RoleKind,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::User,
        service::token::TokenService,
    },
};

/// Role-based permission checked by [`AuthGuard::require`]. Admins hold every
/// permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    /// Chancellery clerk: registers and distributes documents.
    Registrar,
    /// Approves work plans and archives documents.
    Commander,
    Executor,
}

impl Permission {
    fn role(&self) -> RoleKind {
        match self {
            Self::Admin => RoleKind::Admin,
            Self::Registrar => RoleKind::Registrar,
            Self::Commander => RoleKind::Commander,
            Self::Executor => RoleKind::Executor,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the bearer token and checks that the user holds every listed
    /// permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated, active user with the permissions
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::UserNotFound)` - Token subject no longer exists
    /// - `Err(AuthError::UserInactive)` - User has been deactivated
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).get_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        if !user.active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        for permission in permissions {
            if !user.is_admin() && !user.has_role(permission.role()) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!(
                        "User lacks the {} role required for this action",
                        permission.role().as_str()
                    ),
                )
                .into());
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
