use async_trait::async_trait;
use auth::SessionToken;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
///
/// The `token` and `token_expired_at` columns of the users table act as the
/// session token store.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, sqlx::Error> {
        let username: String = row.try_get("username")?;
        let token: Option<String> = row.try_get("token")?;
        let expires_at: Option<i64> = row.try_get("token_expired_at")?;

        let session = match (token, expires_at) {
            (Some(token), Some(expires_at)) => Some(SessionToken { token, expires_at }),
            _ => None,
        };

        Ok(User {
            username: Username::new(username).map_err(|e| sqlx::Error::ColumnDecode {
                index: "username".to_string(),
                source: Box::new(e),
            })?,
            name: row.try_get("name")?,
            password_hash: row.try_get("password")?,
            session,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (username, name, password)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.name)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_pkey") {
                    return UserError::UsernameAlreadyExists(user.username.to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT username, name, password, token, token_expired_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.as_ref()
            .map(Self::row_to_user)
            .transpose()
            .map_err(|e| UserError::DatabaseError(e.to_string()))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT username, name, password, token, token_expired_at
            FROM users
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.as_ref()
            .map(Self::row_to_user)
            .transpose()
            .map_err(|e| UserError::DatabaseError(e.to_string()))
    }

    async fn update_profile(&self, user: User) -> Result<User, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, password = $3
            WHERE username = $1
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.name)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.username.to_string()));
        }

        Ok(user)
    }

    async fn save_session(
        &self,
        username: &Username,
        session: Option<SessionToken>,
    ) -> Result<(), UserError> {
        let (token, expires_at) = match session {
            Some(session) => (Some(session.token), Some(session.expires_at)),
            None => (None, None),
        };

        let result = sqlx::query(
            r#"
            UPDATE users
            SET token = $2, token_expired_at = $3
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .bind(token)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(username.to_string()));
        }

        tracing::debug!("Session of {} updated", username);
        Ok(())
    }
}
