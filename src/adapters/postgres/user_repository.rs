//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Role, Timestamp, UserId};
use crate::domain::user::{Email, UserAccount};
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, account: &UserAccount) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                id, email, password_hash, role, first_name, last_name, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(account.id.as_uuid())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(account.first_name.as_deref())
        .bind(account.last_name.as_deref())
        .bind(account.created_at.as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                DomainError::new(ErrorCode::EmailTaken, "Email already registered")
                    .with_detail("email", account.email.as_str()),
            ),
            Err(e) => Err(DomainError::database("Failed to insert user", e)),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserAccount>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, role, first_name, last_name, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch user", e))?;

        row.map(row_to_account).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, role, first_name, last_name, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch user by email", e))?;

        row.map(row_to_account).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_account(row: sqlx::postgres::PgRow) -> Result<UserAccount, DomainError> {
    let get_err = |field: &str, e: sqlx::Error| {
        DomainError::database(&format!("Failed to get {}", field), e)
    };

    let id: uuid::Uuid = row.try_get("id").map_err(|e| get_err("id", e))?;
    let email: String = row.try_get("email").map_err(|e| get_err("email", e))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| get_err("password_hash", e))?;
    let role: String = row.try_get("role").map_err(|e| get_err("role", e))?;
    let first_name: Option<String> = row
        .try_get("first_name")
        .map_err(|e| get_err("first_name", e))?;
    let last_name: Option<String> = row
        .try_get("last_name")
        .map_err(|e| get_err("last_name", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| get_err("created_at", e))?;

    let email = Email::parse(&email).map_err(|e| DomainError::database("Invalid stored email", e))?;
    let role: Role = role
        .parse()
        .map_err(|e| DomainError::database("Invalid stored role", e))?;

    Ok(UserAccount {
        id: UserId::from_uuid(id),
        email,
        password_hash,
        role,
        first_name,
        last_name,
        created_at: Timestamp::from_datetime(created_at),
    })
}
