//! Server configuration

use crate::auth::JwtConfig;

/// Server configuration, loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory: database file, uploads and receipts live here
    pub work_dir: String,
    /// HTTP listen port
    pub port: u16,
    /// `development` or `production`; controls CORS policy and whether the
    /// built frontend is served
    pub environment: String,
    pub jwt: JwtConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3002),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
