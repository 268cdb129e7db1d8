// ABOUTME: User management database operations
// ABOUTME: Handles account creation and lookup by email or id

use super::{conflict_with, elapsed_ms, Database};
use crate::logging::AppLogger;
use helena_core::errors::{AppError, AppResult};
use helena_core::models::User;
use sqlx::Row;
use std::time::Instant;
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                hashed_password TEXT NOT NULL,
                full_name TEXT,
                disabled BOOLEAN NOT NULL DEFAULT 0,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new user
    ///
    /// Email uniqueness is enforced by the table constraint alone, so two
    /// concurrent registrations cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` if the email is taken, or a
    /// database error if the insert fails
    pub async fn create_user(&self, user: &User) -> AppResult<Uuid> {
        let started = Instant::now();
        sqlx::query(
            r"
            INSERT INTO users (id, email, hashed_password, full_name, disabled, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.hashed_password)
        .bind(&user.full_name)
        .bind(user.disabled)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(conflict_with(|| "Email already registered".to_owned()))?;

        AppLogger::log_database_operation("insert", "users", true, elapsed_ms(started));
        Ok(user.id)
    }

    /// Look up a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.get_user_impl("email", email).await
    }

    /// Look up a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        self.get_user_impl("id", &user_id.to_string()).await
    }

    /// Enable or disable an account
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no such user exists
    pub async fn set_user_disabled(&self, user_id: Uuid, disabled: bool) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET disabled = $1 WHERE id = $2")
            .bind(disabled)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User"));
        }
        Ok(())
    }

    async fn get_user_impl(&self, field: &str, value: &str) -> AppResult<Option<User>> {
        let query = format!(
            r"
            SELECT id, email, hashed_password, full_name, disabled, created_at
            FROM users WHERE {field} = $1
            "
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
        let id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid user id {id}: {e}")))?;

        Ok(User {
            id,
            email: row.try_get("email")?,
            hashed_password: row.try_get("hashed_password")?,
            full_name: row.try_get("full_name")?,
            disabled: row.try_get("disabled")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
