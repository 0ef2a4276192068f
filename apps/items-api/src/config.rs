use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL falls back to the compose default
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8000 unless set

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::postgres::DEFAULT_DATABASE_URL;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(
            ["DATABASE_URL", "HOST", "PORT", "APP_ENV"],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "items_api");
                assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
                assert_eq!(config.server.address(), "0.0.0.0:8000");
                assert_eq!(config.environment, Environment::Development);
            },
        );
    }

    #[test]
    fn test_config_rejects_bad_port() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
