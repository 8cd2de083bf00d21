use std::time::Duration;

/// Defaultní host Elasticsearch clusteru
pub const DEFAULT_CLUSTER_HOST: &str = "localhost";

/// Defaultní port Elasticsearch clusteru
pub const DEFAULT_CLUSTER_PORT: u16 = 9200;

/// Defaultní port lokálního HTTP serveru
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Tvrdý timeout pro liveness ping clusteru
pub const PING_TIMEOUT: Duration = Duration::from_millis(1000);

/// Timeout pro všechny ostatní requesty na cluster
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Připojení ke clusteru
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    pub host: String,
    pub port: u16,
}

impl ClusterConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Vrací base URL clusteru
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
