use sea_orm::DatabaseConnection;

use crate::{
    model::user::RoleKind,
    server::{
        config::Config,
        data::user::UserRepository,
        error::AppError,
        model::user::CreateUserParams,
        service::token::TokenService,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before anything else touches the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Makes sure at least one active administrator exists.
///
/// When none does, the user named by `BOOTSTRAP_ADMIN_USERNAME` is created (or
/// reactivated) with the ADMIN role and a bearer token for it is written to the log.
/// That token is the only way into a fresh installation.
///
/// # Returns
/// - `Ok(Some(token))` - An admin was bootstrapped, with its token
/// - `Ok(None)` - An active admin already exists
/// - `Err(AppError)` - Database or signing failure
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    tokens: &TokenService,
) -> Result<Option<String>, AppError> {
    let repo = UserRepository::new(db);

    if repo.count_active_admins().await? > 0 {
        return Ok(None);
    }

    let username = config.bootstrap_admin_username.as_str();
    let admin = match repo.find_by_username(username).await? {
        Some(user) => {
            let mut roles = user.roles.clone();
            if !roles.contains(&RoleKind::Admin) {
                roles.push(RoleKind::Admin);
            }
            repo.set_roles(user.id, &roles).await?;
            repo.set_active(user.id, true).await?
        }
        None => {
            repo.create(CreateUserParams {
                username: username.to_string(),
                full_name: "Administrator".to_string(),
                rank: None,
                position: None,
                department_id: None,
                roles: vec![RoleKind::Admin],
            })
            .await?
        }
    };

    let (token, expires_at) = tokens.issue(admin.id)?;

    tracing::warn!(
        "No active administrator found, bootstrapped user '{}' (id {})",
        admin.username,
        admin.id
    );
    tracing::info!("Admin bearer token (expires {}): {}", expires_at, token);

    Ok(Some(token))
}
