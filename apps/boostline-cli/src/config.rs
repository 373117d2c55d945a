use boostline_entities::accounts::Role;
use serde::{Deserialize, Serialize};

/// Seed file structure (YAML) for bootstrapping a fresh database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Accounts to create, in order.
    pub accounts: Vec<SeedAccount>,
}

/// One account row in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAccount {
    pub full_name: String,

    /// Must be unique across the database.
    pub email: String,

    pub phone: String,

    /// `admin`, `client` or `worker`.
    pub role: Role,

    /// Optional device fingerprint reported by the access provider.
    #[serde(default)]
    pub device_fingerprint: Option<String>,
}
