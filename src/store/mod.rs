use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgPoolOptions, PgPool, Result};

use crate::models::Account;

mod memory;
mod postgres;
pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

/// Connects to a PostgreSQL database with the given `db_url`, returning a connection pool for accessing it
pub async fn connect_sqlx(db_url: &str) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(32)
        .min_connections(4)
        .connect(db_url)
        .await
        .expect("Could not connect to the database")
}

/// Field values for an account, without an id. The store assigns ids.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

/// Persistence interface for [`Account`] rows.
///
/// Ids are assigned by the store on create, are unique across live accounts,
/// and are never reused after deletion.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account and return it with its assigned id.
    async fn create(&self, record: AccountRecord) -> Result<Account>;

    /// Fetch an account by id.
    async fn find(&self, id: i32) -> Result<Option<Account>>;

    /// Fetch all accounts in store default order.
    async fn list(&self) -> Result<Vec<Account>>;

    /// Replace the mutable fields of an existing account, returning the
    /// updated row, or `None` when no such id exists.
    async fn update(&self, id: i32, record: AccountRecord) -> Result<Option<Account>>;

    /// Remove an account if present. Deleting a missing id is not an error.
    async fn delete(&self, id: i32) -> Result<()>;
}
