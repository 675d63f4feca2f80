use std::env;

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub bind_addr: String,
    pub force_https: bool,
}

impl Config {
    pub fn init() -> Config {
        let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let force_https = match env::var("FORCE_HTTPS") {
            Ok(value) => !matches!(value.as_str(), "false" | "0"),
            Err(_) => true,
        };
        Config {
            db_url,
            bind_addr,
            force_https,
        }
    }

    /// Configuration for the test suite: no database URL is needed because
    /// tests run against the in-memory store, and the HTTPS redirect is off.
    pub fn for_tests() -> Config {
        Config {
            db_url: String::new(),
            bind_addr: String::new(),
            force_https: false,
        }
    }
}
