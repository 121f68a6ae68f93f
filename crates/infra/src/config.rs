use agendo_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used to verify the HS256 signature of access tokens. The
    /// identity provider issuing tokens must share this secret.
    pub access_token_secret: String,
    /// Port for the application to run on
    pub port: usize,
}

impl Config {
    pub fn new() -> Self {
        let access_token_secret = match std::env::var("ACCESS_TOKEN_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find ACCESS_TOKEN_SECRET environment variable. Going to create one.");
                create_random_secret(32)
            }
        };
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        Self {
            access_token_secret,
            port,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
