use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

/// Payload for creating an account. `date_joined` defaults to the current
/// date when omitted.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: Option<NaiveDate>,
}

/// Payload for replacing an account's mutable fields. An omitted
/// `date_joined` keeps the stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: Option<NaiveDate>,
}
