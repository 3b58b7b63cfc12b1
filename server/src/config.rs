use std::env;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: String,
    /// Origin allowed through CORS. Without it only same-origin requests work.
    pub client_host: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("BIND_ADDRESS").ok(), env::var("CLIENT_HOST").ok())
    }

    fn from_vars(bind_address: Option<String>, client_host: Option<String>) -> Self {
        Config {
            bind_address: bind_address
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            client_host: client_host.filter(|value| !value.trim().is_empty()),
        }
    }
}
