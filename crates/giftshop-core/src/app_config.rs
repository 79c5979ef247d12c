#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the storefront client, read from `GIFTSHOP_*`
/// environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the catalog REST backend, without a trailing slash.
    pub api_base_url: String,
    pub env: Environment,
    pub log_level: String,
    pub user_agent: String,
    /// TCP connect timeout. Requests themselves are not time-limited.
    pub connect_timeout_secs: u64,
}
