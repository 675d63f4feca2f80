use async_trait::async_trait;
use sqlx::{PgPool, Result};

use crate::models::Account;

use super::{AccountRecord, AccountStore};

const ACCOUNT_COLUMNS: &str = "id, name, email, address, phone_number, date_joined";

/// [`AccountStore`] backed by a PostgreSQL `account` table.
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PgAccountStore { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, record: AccountRecord) -> Result<Account> {
        let sql = format!(
            "INSERT INTO account (name, email, address, phone_number, date_joined) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&sql)
            .bind(&record.name)
            .bind(&record.email)
            .bind(&record.address)
            .bind(&record.phone_number)
            .bind(record.date_joined)
            .fetch_one(&self.pool)
            .await
    }

    async fn find(&self, id: i32) -> Result<Option<Account>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE id = $1");
        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list(&self) -> Result<Vec<Account>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM account ORDER BY id");
        sqlx::query_as::<_, Account>(&sql).fetch_all(&self.pool).await
    }

    async fn update(&self, id: i32, record: AccountRecord) -> Result<Option<Account>> {
        let sql = format!(
            "UPDATE account \
             SET name = $1, email = $2, address = $3, phone_number = $4, date_joined = $5 \
             WHERE id = $6 \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&sql)
            .bind(&record.name)
            .bind(&record.email)
            .bind(&record.address)
            .bind(&record.phone_number)
            .bind(record.date_joined)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
