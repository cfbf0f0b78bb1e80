use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Liveness report. Every field is always serialized, echoes included, so
/// probes can rely on a fixed shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: u16,
    pub status_message: String,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub echo: Option<String>,
    pub path_echo: Option<String>,
}

/// Optional echo string carried in the query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthQuery {
    pub echo: Option<String>,
}
