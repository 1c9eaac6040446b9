use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::sync::LazyLock;

/// Runtime configuration, sourced from environment variables
/// (a `.env` file is loaded first by `main`).
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Storage backend connection string. The parent directory of a
    /// file-based database must exist before startup.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Enables verbose query logging from sqlx.
    #[serde(default)]
    pub debug_sql: bool,
}

fn default_database_url() -> String {
    "sqlite:data/app.db".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    /// Filter directives for the tracing subscriber: the configured base
    /// level, widened for the sqlx target when query logging is on.
    pub fn env_filter_directives(&self) -> String {
        if self.debug_sql {
            format!("{},sqlx=debug", self.loglevel)
        } else {
            self.loglevel.clone()
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::new()
        .merge(Env::raw().only(&["database_url", "listen_addr", "loglevel", "debug_sql"]))
        .extract()
        .expect("invalid environment configuration")
});
