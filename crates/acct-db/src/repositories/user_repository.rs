//! Local record store for user accounts.
//!
//! Credentials are matched exactly as stored (case-sensitive, no hashing).
//! Login never reports whether the username or the password was wrong.

use crate::{DbError, Result as DbErrorResult};

use acct_core::{UserProfile, UserRecord};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, username, password, first_name, last_name, email,
        contact_number, address, profile_picture, created_at, updated_at
    FROM users
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Applies the embedded schema. Safe to call on every startup.
    pub async fn initialize(&self) -> DbErrorResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Inserts a new account. Fails with [`DbError::UsernameTaken`] when the
    /// username already exists; the existing row is left untouched.
    pub async fn register(&self, record: &UserRecord) -> DbErrorResult<()> {
        let id = record.id.to_string();
        let profile = &record.profile;
        let created_at = record.created_at.timestamp();
        let updated_at = record.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, username, password, first_name, last_name, email,
                    contact_number, address, profile_picture, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&profile.username)
        .bind(&record.password)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.email)
        .bind(&profile.contact_number)
        .bind(&profile.address)
        .bind(&profile.profile_picture)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DbError::username_taken(profile.username.as_str())
            }
            _ => DbError::from(e),
        })?;

        Ok(())
    }

    /// Whether a record matches both username and password.
    pub async fn login(&self, username: &str, password: &str) -> DbErrorResult<bool> {
        let matches: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*) FROM users
                WHERE username = ? AND password = ?
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;

        Ok(matches > 0)
    }

    /// Same match as [`login`](Self::login), returning the matched record.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> DbErrorResult<Option<UserRecord>> {
        let sql = format!("{SELECT_COLUMNS} WHERE username = ? AND password = ?");

        let row = sqlx::query(&sql)
            .bind(username)
            .bind(password)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<UserRecord>> {
        let sql = format!("{SELECT_COLUMNS} WHERE username = ?");

        let row = sqlx::query(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    /// Writes profile fields back to the record keyed by `profile.username`.
    /// Username and password are never changed. Returns whether a row was
    /// updated.
    pub async fn update_profile(&self, profile: &UserProfile) -> DbErrorResult<bool> {
        let updated_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET first_name = ?, last_name = ?, email = ?, contact_number = ?,
                    address = ?, profile_picture = ?, updated_at = ?
                WHERE username = ?
            "#,
        )
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.email)
        .bind(&profile.contact_number)
        .bind(&profile.address)
        .bind(&profile.profile_picture)
        .bind(updated_at)
        .bind(&profile.username)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn row_to_record(row: &SqliteRow) -> DbErrorResult<UserRecord> {
        let id: String = row.try_get("id")?;
        let created_at: i64 = row.try_get("created_at")?;
        let updated_at: i64 = row.try_get("updated_at")?;

        Ok(UserRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DbError::invalid_row(format!("Invalid UUID in users.id: {}", e)))?,
            profile: UserProfile {
                username: row.try_get("username")?,
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
                email: row.try_get("email")?,
                contact_number: row.try_get("contact_number")?,
                address: row.try_get("address")?,
                profile_picture: row.try_get("profile_picture")?,
            },
            password: row.try_get("password")?,
            created_at: Self::timestamp(created_at, "created_at")?,
            updated_at: Self::timestamp(updated_at, "updated_at")?,
        })
    }

    #[track_caller]
    fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| DbError::invalid_row(format!("Invalid timestamp in users.{}", column)))
    }
}
