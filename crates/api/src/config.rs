use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::auth::jwt::{JwtConfig, DEFAULT_EXPIRY_HOURS, MAX_EXPIRY_HOURS};

/// Signing secret used outside production when `JWT_SECRET` is unset.
const DEV_JWT_SECRET: &str = "cosmos-development-secret-do-not-deploy";
/// Bootstrap admin password used outside production when `ADMIN_PASSWORD` is unset.
const DEV_ADMIN_PASSWORD: &str = "admin123";

/// Deployment environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{0} must be set when APP_ENV=production")]
    MissingInProduction(&'static str),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Production
/// deployments must provide `JWT_SECRET` and `ADMIN_PASSWORD`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    pub environment: Environment,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
}

/// Connection settings for PostgreSQL.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Full connection URL. When present the individual parts are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode))
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// The administrator account seeded into an empty `users` table.
#[derive(Clone)]
pub struct AdminConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// | Env Var                | Default               |
    /// |------------------------|-----------------------|
    /// | `HOST`                 | `0.0.0.0`             |
    /// | `APP_PORT` / `PORT`    | `8080`                |
    /// | `APP_ENV`              | `development`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                  |
    /// | `DATABASE_URL`         | built from `DB_*`     |
    /// | `DB_MAX_CONNECTIONS`   | `20`                  |
    /// | `JWT_SECRET`           | dev fallback          |
    /// | `JWT_EXPIRY_HOURS`     | `24`                  |
    /// | `ADMIN_USERNAME`       | `admin`               |
    /// | `ADMIN_EMAIL`          | `admin@cosmos.com`    |
    /// | `ADMIN_PASSWORD`       | dev fallback          |
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Development);

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match get("APP_PORT") {
            Some(raw) => parse_value("APP_PORT", &raw, "a port number")?,
            None => parse_or("PORT", get("PORT"), 8080, "a port number")?,
        };

        let request_timeout_secs = parse_or(
            "REQUEST_TIMEOUT_SECS",
            get("REQUEST_TIMEOUT_SECS"),
            30,
            "a number of seconds",
        )?;

        let ssl_mode = match get("DB_SSL_MODE") {
            Some(raw) => PgSslMode::from_str(&raw).map_err(|_| ConfigError::Invalid {
                var: "DB_SSL_MODE",
                expected: "a PostgreSQL sslmode",
                value: raw,
            })?,
            None => PgSslMode::Disable,
        };

        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or("DB_PORT", get("DB_PORT"), 5432, "a port number")?,
            user: get("DB_USER").unwrap_or_else(|| "postgres".into()),
            password: get("DB_PASSWORD").unwrap_or_default(),
            name: get("DB_NAME").unwrap_or_else(|| "cosmos".into()),
            ssl_mode,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                get("DB_MAX_CONNECTIONS"),
                20,
                "a positive number",
            )?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                expected: "a positive number",
                value: "0".into(),
            });
        }

        let secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err(ConfigError::MissingInProduction("JWT_SECRET"));
            }
            None => {
                tracing::warn!("JWT_SECRET is not set, using the development fallback secret");
                DEV_JWT_SECRET.to_string()
            }
        };
        let expiry_hours: i64 = parse_or(
            "JWT_EXPIRY_HOURS",
            get("JWT_EXPIRY_HOURS"),
            DEFAULT_EXPIRY_HOURS,
            "a number of hours between 1 and 8760",
        )?;
        if !(1..=MAX_EXPIRY_HOURS).contains(&expiry_hours) {
            return Err(ConfigError::Invalid {
                var: "JWT_EXPIRY_HOURS",
                expected: "a number of hours between 1 and 8760",
                value: expiry_hours.to_string(),
            });
        }

        let admin_password = match get("ADMIN_PASSWORD") {
            Some(password) => password,
            None if environment.is_production() => {
                return Err(ConfigError::MissingInProduction("ADMIN_PASSWORD"));
            }
            None => {
                tracing::warn!("ADMIN_PASSWORD is not set, using the development admin password");
                DEV_ADMIN_PASSWORD.to_string()
            }
        };

        Ok(Self {
            host,
            port,
            environment,
            request_timeout_secs,
            database,
            jwt: JwtConfig {
                secret,
                expiry_hours,
            },
            admin: AdminConfig {
                username: get("ADMIN_USERNAME").unwrap_or_else(|| "admin".into()),
                email: get("ADMIN_EMAIL").unwrap_or_else(|| "admin@cosmos.com".into()),
                password: admin_password,
            },
        })
    }
}

fn parse_value<T: FromStr>(
    var: &'static str,
    raw: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw.to_string(),
    })
}

fn parse_or<T: FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => parse_value(var, &raw, expected),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_source(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_for_local_development() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.name, "cosmos");
        assert!(config.database.url.is_none());
        assert_eq!(config.jwt.expiry_hours, 24);
        assert_eq!(config.jwt.secret, DEV_JWT_SECRET);
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.password, DEV_ADMIN_PASSWORD);
    }

    #[test]
    fn app_port_wins_over_port() {
        let config = load(&[("APP_PORT", "9000"), ("PORT", "7000")]).unwrap();
        assert_eq!(config.port, 9000);
        let config = load(&[("PORT", "7000")]).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn invalid_numbers_are_reported() {
        assert_matches!(
            load(&[("APP_PORT", "eighty")]),
            Err(ConfigError::Invalid { var: "APP_PORT", .. })
        );
        assert_matches!(
            load(&[("JWT_EXPIRY_HOURS", "0")]),
            Err(ConfigError::Invalid { var: "JWT_EXPIRY_HOURS", .. })
        );
        assert_matches!(
            load(&[("JWT_EXPIRY_HOURS", "9223372036854775807")]),
            Err(ConfigError::Invalid { var: "JWT_EXPIRY_HOURS", .. })
        );
        assert_eq!(load(&[("JWT_EXPIRY_HOURS", "8760")]).unwrap().jwt.expiry_hours, 8760);
        assert_matches!(
            load(&[("DB_SSL_MODE", "sometimes")]),
            Err(ConfigError::Invalid { var: "DB_SSL_MODE", .. })
        );
    }

    #[test]
    fn production_requires_secrets() {
        assert_matches!(
            load(&[("APP_ENV", "production"), ("ADMIN_PASSWORD", "s3cret!")]),
            Err(ConfigError::MissingInProduction("JWT_SECRET"))
        );
        assert_matches!(
            load(&[("APP_ENV", "production"), ("JWT_SECRET", "")]),
            Err(ConfigError::MissingInProduction("JWT_SECRET"))
        );
        assert_matches!(
            load(&[("APP_ENV", "production"), ("JWT_SECRET", "k")]),
            Err(ConfigError::MissingInProduction("ADMIN_PASSWORD"))
        );

        let config = load(&[
            ("APP_ENV", "production"),
            ("JWT_SECRET", "prod-secret"),
            ("ADMIN_PASSWORD", "s3cret!"),
        ])
        .unwrap();
        assert!(config.environment.is_production());
        assert_eq!(config.jwt.secret, "prod-secret");
    }

    #[test]
    fn database_url_overrides_parts() {
        let config = load(&[
            ("DATABASE_URL", "postgres://u:p@db.internal:6543/catalog"),
            ("DB_HOST", "ignored"),
        ])
        .unwrap();
        assert!(config.database.connect_options().is_ok());
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://u:p@db.internal:6543/catalog")
        );
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let config = load(&[
            ("DB_PASSWORD", "hunter2"),
            ("JWT_SECRET", "topsecret"),
            ("ADMIN_PASSWORD", "adminpass"),
        ])
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("topsecret"));
        assert!(!rendered.contains("adminpass"));
    }
}
