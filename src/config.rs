use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration. Every field can be overridden with a
/// `POSTBOARD_`-prefixed environment variable, e.g. `POSTBOARD_DATABASE_URL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
    pub site_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:blog.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
            site_title: "Blog".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("POSTBOARD_"))
    }

    pub fn from_env() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("POSTBOARD_DATABASE_URL", "sqlite:other.db");
            jail.set_env("POSTBOARD_MAX_CONNECTIONS", "2");

            let cfg = Config::from_env()?;
            assert_eq!(cfg.database_url, "sqlite:other.db");
            assert_eq!(cfg.max_connections, 2);
            assert_eq!(cfg.listen_addr, "0.0.0.0:8000");
            assert_eq!(cfg.site_title, "Blog");
            Ok(())
        });
    }

    #[test]
    fn invalid_value_is_an_error() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("POSTBOARD_MAX_CONNECTIONS", "many");
            assert!(Config::from_env().is_err());
            Ok(())
        });
    }
}
