use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::Result;

use crate::models::Account;

use super::{AccountRecord, AccountStore};

/// In-process [`AccountStore`] used by the test suite.
///
/// The id counter only ever moves forward, so deleted ids are not reused.
#[derive(Default)]
pub struct MemoryAccountStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, Account>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, record: AccountRecord) -> Result<Account> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let account = Account {
            id: inner.next_id,
            name: record.name,
            email: record.email,
            address: record.address,
            phone_number: record.phone_number,
            date_joined: record.date_joined,
        };
        inner.rows.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find(&self, id: i32) -> Result<Option<Account>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Account>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, record: AccountRecord) -> Result<Option<Account>> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(account) => {
                account.name = record.name;
                account.email = record.email;
                account.address = record.address;
                account.phone_number = record.phone_number;
                account.date_joined = record.date_joined;
                Ok(Some(account.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.rows.remove(&id);
        Ok(())
    }
}
