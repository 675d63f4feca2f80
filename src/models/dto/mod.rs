pub mod account;
pub mod message;
pub use account::*;
pub use message::*;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(
    crate::models::Account,
    NewAccount,
    UpdateAccount,
    Message,
    HealthStatus,
    ServiceInfo,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
