use directories::ProjectDirs;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite, SqlitePool};
use std::path::PathBuf;

use crate::error::{Result, StoreError};
use crate::models::{Contact, NewContact};
use crate::schema::SCHEMA;
use crate::validation;

/// The contact store. Owns the single SQLite handle; the pool serializes
/// transactions, so no two writes interleave at the row level.
pub struct ContactDb {
    pool: Pool<Sqlite>,
}

impl ContactDb {
    /// Opens the store at its default per-user location, creating the
    /// table if it does not exist yet.
    pub async fn new() -> Result<Self> {
        let db_path = Self::default_db_path()?;

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let db = Self::open(&format!("sqlite:{}?mode=rwc", db_path.display())).await?;

        tracing::info!("Contact database initialized at: {}", db_path.display());

        Ok(db)
    }

    pub async fn new_with_path(path: &str) -> Result<Self> {
        Self::open(&format!("sqlite:{}?mode=rwc", path)).await
    }

    /// Transient store for tests and tooling. Capped at one connection:
    /// every pooled `sqlite::memory:` connection would otherwise get its
    /// own empty database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Self::init(pool).await
    }

    async fn open(db_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(db_url)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Self::init(pool).await
    }

    async fn init(pool: Pool<Sqlite>) -> Result<Self> {
        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self { pool })
    }

    fn default_db_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cardfile", "cardfile")
            .ok_or_else(|| StoreError::Unavailable("could not resolve data directory".into()))?;
        Ok(dirs.data_dir().join("newcontacts.db"))
    }

    pub async fn close(self) {
        self.pool.close().await;
    }

    /// Validates, inserts, and returns the stored row with its fresh id.
    /// Nothing is written when validation fails.
    pub async fn create(&self, input: NewContact) -> Result<Contact> {
        validation::validate(&input)?;

        let result = sqlx::query(
            "INSERT INTO newcontacts (name, mobileNumber, landlineNumber, photo, isFavorite)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.mobile_number)
        .bind(&input.landline_number)
        .bind(&input.photo)
        .bind(input.is_favorite)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "created contact");

        self.get(id).await?.ok_or(StoreError::NotFound(id))
    }

    pub async fn get(&self, id: i64) -> Result<Option<Contact>> {
        Ok(
            sqlx::query_as::<_, Contact>("SELECT * FROM newcontacts WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    /// All contacts, name ascending. Collation is NOCASE (ASCII
    /// case-insensitive); ties break on ascending id.
    pub async fn list_all(&self) -> Result<Vec<Contact>> {
        Ok(sqlx::query_as::<_, Contact>(
            "SELECT * FROM newcontacts ORDER BY name COLLATE NOCASE ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// Favorites only, same ordering as `list_all`.
    pub async fn list_favorites(&self) -> Result<Vec<Contact>> {
        Ok(sqlx::query_as::<_, Contact>(
            "SELECT * FROM newcontacts WHERE isFavorite = 1
             ORDER BY name COLLATE NOCASE ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// Overwrites every mutable field of the row matching `id` in one
    /// statement, then returns the stored row.
    pub async fn update(&self, id: i64, fields: NewContact) -> Result<Contact> {
        validation::validate(&fields)?;

        let result = sqlx::query(
            "UPDATE newcontacts
             SET name = ?, mobileNumber = ?, landlineNumber = ?, photo = ?, isFavorite = ?
             WHERE id = ?",
        )
        .bind(&fields.name)
        .bind(&fields.mobile_number)
        .bind(&fields.landline_number)
        .bind(&fields.photo)
        .bind(fields.is_favorite)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!(id, "updated contact");

        self.get(id).await?.ok_or(StoreError::NotFound(id))
    }

    /// Removes the row matching `id`. Deleting an absent id is a no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM newcontacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, "deleted contact");

        Ok(())
    }
}
