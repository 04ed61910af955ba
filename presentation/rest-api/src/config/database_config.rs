use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;
use std::env;

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
            None => DatabaseConfig::DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}

/// Initialize database connection pool
///
/// # Errors
/// Returns error if the connection fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config)
        .await
        .context("failed to connect to the database")?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn should_require_database_url() {
        let result = DatabaseSettings::from_vars(lookup(&[]));

        assert!(result.is_err());
    }

    #[test]
    fn should_default_max_connections() {
        let settings =
            DatabaseSettings::from_vars(lookup(&[("DATABASE_URL", "postgres://db/catalog")]))
                .unwrap();

        assert_eq!(settings.url, "postgres://db/catalog");
        assert_eq!(settings.max_connections, 5);
    }

    #[test]
    fn should_read_max_connections() {
        let settings = DatabaseSettings::from_vars(lookup(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
        ]))
        .unwrap();

        assert_eq!(settings.max_connections, 20);
    }

    #[test]
    fn should_reject_malformed_max_connections() {
        let result = DatabaseSettings::from_vars(lookup(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]));

        assert!(result.is_err());
    }
}
