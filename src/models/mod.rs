pub mod account;
pub mod dto;
pub mod error;
pub use account::Account;
pub use error::Error;
