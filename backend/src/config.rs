//! Environment-driven server configuration.
//!
//! Every knob has a default suitable for local development; production
//! deployments override via environment variables. Secrets (the seed admin
//! credentials) are optional — when absent no admin user is seeded.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use log::info;

pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database file.
    pub database_path: String,
    /// Root of the publicly served tree; holds `uploads/` and `gallery/`.
    pub public_dir: PathBuf,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("HOST", "0.0.0.0"),
            port: try_load("PORT", "8080"),
            database_path: try_load("DATABASE_PATH", "society.sqlite"),
            public_dir: PathBuf::from(try_load::<String>("PUBLIC_DIR", "public")),
            admin_email: env::var("ADMIN_EMAIL").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
        }
    }

    /// General upload area; entity images land here and stay here.
    pub fn uploads_dir(&self) -> PathBuf {
        self.public_dir.join("uploads")
    }

    /// Gallery area; carousel uploads are moved here next to the metadata
    /// sidecar file.
    pub fn gallery_dir(&self) -> PathBuf {
        self.public_dir.join("gallery")
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse()
        .unwrap_or_else(|e| panic!("invalid {key} value {raw:?}: {e}"))
}
