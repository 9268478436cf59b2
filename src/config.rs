use std::env;

/// The building this site campaigns for. Stamped onto every stored
/// submission alongside the server-assigned timestamp.
pub const BUILDING: &str = "95 Prince Arthur Ave";

/// Runtime configuration, read once at startup from the environment
/// (`.env` is loaded by main before this runs).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_path: String,
    pub admin_password: String,
    pub building: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("PA95_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "data/app.db".to_string());
        let admin_password = match env::var("ADMIN_PASSWORD") {
            Ok(val) if !val.is_empty() => val,
            _ => {
                log::warn!("No ADMIN_PASSWORD set, using the development default");
                "prince95arthur".to_string()
            }
        };

        Self {
            bind_addr,
            database_path,
            admin_password,
            building: BUILDING.to_string(),
        }
    }
}
