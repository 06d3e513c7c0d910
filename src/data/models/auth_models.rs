use serde::{Deserialize, Serialize};

/// Contents of `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "changeme".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
