use std::path::PathBuf;

/// Runtime settings read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bind_addr: String,
    pub templates_glob: String,
    pub static_dir: PathBuf,
    pub session_idle_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bind_addr: "127.0.0.1:5000".to_string(),
            templates_glob: "templates/**/*.html".to_string(),
            static_dir: PathBuf::from("static"),
            session_idle_days: 1,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let session_idle_days = match std::env::var("SESSION_IDLE_DAYS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid SESSION_IDLE_DAYS {:?}, using {}", raw, defaults.session_idle_days);
                defaults.session_idle_days
            }),
            Err(_) => defaults.session_idle_days,
        };

        Self {
            data_dir: std::env::var("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            templates_glob: std::env::var("TEMPLATES_GLOB").unwrap_or(defaults.templates_glob),
            static_dir: std::env::var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            session_idle_days,
        }
    }
}
