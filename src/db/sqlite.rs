use crate::db::models::{Account, AccountPatch, NewAccount};
use crate::db::schema::SQLITE_INIT;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool from the configured connection string, creating the
/// database file on first start.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(opts).await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct AccountStorage {
    pool: SqlitePool,
}

impl AccountStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new row and return it with the store-assigned id.
    pub async fn create(&self, new: NewAccount) -> Result<Account, AppError> {
        let now = Utc::now().to_rfc3339();
        let status = new.status.unwrap_or_else(|| "active".to_string());
        let res = sqlx::query(
            r#"
            INSERT INTO accounts (name, status, tags, owner, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.name)
        .bind(status)
        .bind(new.tags)
        .bind(new.owner)
        .bind(now.as_str())
        .bind(now.as_str())
        .execute(&self.pool)
        .await?;

        self.get_by_id(res.last_insert_rowid()).await
    }

    /// All rows in insertion order. Empty table yields an empty vec.
    pub async fn list(&self) -> Result<Vec<Account>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, name, status, tags, owner, created_at, updated_at
               FROM accounts ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Account, AppError> {
        let row = sqlx::query(
            r#"SELECT id, name, status, tags, owner, created_at, updated_at
               FROM accounts WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::AccountNotFound(id))?;
        Self::row_to_model(row)
    }

    /// Overwrite the fields present in `patch` and refresh `updated_at`.
    /// Read-merge-write runs in one transaction; a concurrent update to
    /// the same row is last-write-wins.
    pub async fn update_by_id(&self, id: i64, patch: AccountPatch) -> Result<Account, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"SELECT id, name, status, tags, owner, created_at, updated_at
               FROM accounts WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::AccountNotFound(id))?;
        let current = Self::row_to_model(row)?;

        let updated = Account {
            id: current.id,
            name: patch.name.unwrap_or(current.name),
            status: patch.status.unwrap_or(current.status),
            tags: patch.tags.or(current.tags),
            owner: patch.owner.or(current.owner),
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        sqlx::query(
            r#"UPDATE accounts SET
                name = ?,
                status = ?,
                tags = ?,
                owner = ?,
                updated_at = ?
              WHERE id = ?"#,
        )
        .bind(updated.name.as_str())
        .bind(updated.status.as_str())
        .bind(updated.tags.as_deref())
        .bind(updated.owner.as_deref())
        .bind(updated.updated_at.to_rfc3339())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Remove the row permanently.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(AppError::AccountNotFound(id));
        }
        Ok(())
    }

    fn row_to_model(row: SqliteRow) -> Result<Account, AppError> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let status: String = row.try_get("status")?;
        let tags: Option<String> = row.try_get("tags")?;
        let owner: Option<String> = row.try_get("owner")?;
        let created_at_str: String = row.try_get("created_at")?;
        let updated_at_str: String = row.try_get("updated_at")?;

        let created_at: DateTime<Utc> = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);
        let updated_at: DateTime<Utc> = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(Account {
            id,
            name,
            status,
            tags,
            owner,
            created_at,
            updated_at,
        })
    }
}
