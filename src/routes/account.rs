use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{NewAccount, UpdateAccount},
        Account, Error,
    },
    store::AccountRecord,
    AppState,
};

/// Defines the OpenAPI spec for account endpoints
#[derive(OpenApi)]
#[openapi(paths(
    create_account_handler,
    list_accounts_handler,
    get_account_handler,
    update_account_handler,
    delete_account_handler
))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "ACCOUNT";

/// Builds a router for account routes
pub fn account_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(list_accounts_handler).post(create_account_handler),
        )
        .route(
            "/:id",
            get(get_account_handler)
                .put(update_account_handler)
                .delete(delete_account_handler),
        )
}

/// Maps a JSON extraction failure onto the service error taxonomy: a wrong
/// or missing content type is 415, anything else about the body is 400.
fn rejection_to_error(rejection: JsonRejection) -> Error {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            Error::unsupported_media_type("Content-Type must be application/json")
        }
        other => Error::bad_request(&other.body_text()),
    }
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/accounts",
    tag = ACCOUNT_API_GROUP,
    request_body = NewAccount,
    responses(
        (status = 201, description = "Account successfully created", body = Account,
         headers(("Location" = String, description = "URL of the created account"))),
        (status = 400, description = "Missing or invalid fields"),
        (status = 415, description = "Unsupported media type"),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewAccount>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = payload.map_err(rejection_to_error)?;

    if body.name.trim().is_empty() {
        return Err(Error::bad_request("Account name must not be empty"));
    }

    let record = AccountRecord {
        name: body.name,
        email: body.email,
        address: body.address,
        phone_number: body.phone_number,
        date_joined: body.date_joined.unwrap_or_else(|| Utc::now().date_naive()),
    };

    let account = state.store.create(record).await?;
    info!("Created account {}", account.id);

    let location = format!("/accounts/{}", account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account),
    ))
}

/// List accounts handler function
#[utoipa::path(
    get,
    path = "/accounts",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "All accounts", body = [Account]),
    )
)]
pub async fn list_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>, Error> {
    let accounts = state.store.list().await?;
    Ok(Json(accounts))
}

/// Get account handler function
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account found", body = Account),
        (status = 404, description = "Account not found"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn get_account_handler(
    State(state): State<Arc<AppState>>,
    axum::extract::Path(id): axum::extract::Path<i32>,
) -> Result<Json<Account>, Error> {
    match state.store.find(id).await? {
        Some(account) => Ok(Json(account)),
        None => Err(Error::not_found("Account not found")),
    }
}

/// Update account handler function
#[utoipa::path(
    put,
    path = "/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    request_body = UpdateAccount,
    responses(
        (status = 200, description = "Account successfully updated", body = Account),
        (status = 404, description = "Account not found"),
        (status = 400, description = "Missing or invalid fields"),
        (status = 415, description = "Unsupported media type"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn update_account_handler(
    State(state): State<Arc<AppState>>,
    axum::extract::Path(id): axum::extract::Path<i32>,
    payload: Result<Json<UpdateAccount>, JsonRejection>,
) -> Result<Json<Account>, Error> {
    let Json(body) = payload.map_err(rejection_to_error)?;

    if body.name.trim().is_empty() {
        return Err(Error::bad_request("Account name must not be empty"));
    }

    // Fetch first so an omitted date_joined keeps the stored value.
    let existing = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found("Account not found"))?;

    let record = AccountRecord {
        name: body.name,
        email: body.email,
        address: body.address,
        phone_number: body.phone_number,
        date_joined: body.date_joined.unwrap_or(existing.date_joined),
    };

    let updated = state
        .store
        .update(id, record)
        .await?
        .ok_or_else(|| Error::not_found("Account not found"))?;
    info!("Updated account {}", updated.id);

    Ok(Json(updated))
}

/// Delete account handler function
#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 204, description = "Account deleted (or did not exist)"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    axum::extract::Path(id): axum::extract::Path<i32>,
) -> Result<StatusCode, Error> {
    // Deletion is idempotent: a missing id still yields 204.
    state.store.delete(id).await?;
    info!("Deleted account {}", id);
    Ok(StatusCode::NO_CONTENT)
}
