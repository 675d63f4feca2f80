use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A customer account record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, FromRow, ToSchema)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}
