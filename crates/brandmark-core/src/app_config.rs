use std::net::SocketAddr;

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

/// Process-wide settings shared by the server and the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub user_agent: String,
    /// Per-request timeout applied to the page fetch and to each image fetch.
    pub fetch_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_redirects: usize,
    /// A logo body of this many bytes or more is rejected.
    pub max_logo_bytes: usize,
    /// Wall-clock bound for one `/logo` request at the transport boundary.
    pub request_deadline_secs: u64,
}
