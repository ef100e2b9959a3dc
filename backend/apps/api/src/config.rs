//! Service Configuration
//!
//! Resolved once at startup from the process environment. `.env` is loaded
//! by `main` before this runs.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use platform::password::HashCost;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Deployment flavour, drives log format and verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Prod,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "prod" => Ok(Environment::Prod),
            other => bail!("AUTH_ENV must be `local` or `prod`, got `{other}`"),
        }
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<String>,
    pub user: String,
    pub password: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(self.ssl_mode);

        match &self.database {
            Some(database) => options.database(database),
            None => options,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Debug)]
pub struct HttpConfig {
    pub port: u16,
    pub request_timeout: Duration,
}

pub struct ServiceConfig {
    pub env: Environment,
    pub database: DatabaseConfig,
    pub http: HttpConfig,
    pub auth: AuthConfig,
    pub jwt_secret: Vec<u8>,
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("env", &self.env)
            .field("database", &self.database)
            .field("http", &self.http)
            .field("auth", &self.auth)
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}

impl ServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let env = parse_or(&var, "AUTH_ENV", Environment::Local)?;

        let database = DatabaseConfig {
            host: var("PGHOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(&var, "PGPORT", 5432)?,
            database: var("PGDATABASE"),
            user: var("PGUSER").context("PGUSER must be set")?,
            password: var("PGPASSWORD").unwrap_or_default(),
            ssl_mode: var("PGSSLMODE")
                .map(|mode| mode.parse::<PgSslMode>())
                .transpose()
                .context("PGSSLMODE is not a valid sslmode")?
                .unwrap_or(PgSslMode::Prefer),
            max_connections: parse_or(&var, "PG_MAX_CONNECTIONS", 5)?,
        };

        let http = HttpConfig {
            port: parse_or(&var, "AUTH_PORT", 44044)?,
            request_timeout: Duration::from_secs(parse_or(&var, "AUTH_REQUEST_TIMEOUT_SECS", 5)?),
        };

        let jwt_secret = var("JWT_SECRET")
            .context("JWT_SECRET must be set")?
            .into_bytes();

        let default_cost = HashCost::default();
        let hash_cost = HashCost::new(
            parse_or(&var, "AUTH_HASH_MEMORY_KIB", default_cost.memory_kib())?,
            parse_or(&var, "AUTH_HASH_ITERATIONS", default_cost.iterations())?,
            parse_or(&var, "AUTH_HASH_PARALLELISM", default_cost.parallelism())?,
        )
        .context("Argon2 work factor rejected")?;

        let auth = AuthConfig {
            token_ttl: Duration::from_secs(parse_or(&var, "AUTH_TOKEN_TTL_SECS", 3600)?),
            password_pepper: var("AUTH_PASSWORD_PEPPER").map(String::into_bytes),
            hash_cost,
        };

        Ok(Self {
            env,
            database,
            http,
            auth,
            jwt_secret,
        })
    }
}

fn parse_or<T, V>(var: &V, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
    V: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{key} has invalid value `{raw}`: {e}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const MINIMAL: &[(&str, &str)] = &[("PGUSER", "auth"), ("JWT_SECRET", "s3cret")];

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(lookup(MINIMAL)).unwrap();

        assert_eq!(config.env, Environment::Local);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.database, None);
        assert_eq!(config.database.password, "");
        assert!(matches!(config.database.ssl_mode, PgSslMode::Prefer));
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.http.port, 44044);
        assert_eq!(config.http.request_timeout, Duration::from_secs(5));
        assert_eq!(config.auth.token_ttl, Duration::from_secs(3600));
        assert_eq!(config.auth.password_pepper, None);
        assert_eq!(config.auth.hash_cost.memory_kib(), 19456);
        assert_eq!(config.jwt_secret, b"s3cret");
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("AUTH_ENV", "prod"),
            ("PGHOST", "db.internal"),
            ("PGPORT", "6432"),
            ("PGDATABASE", "auth"),
            ("PGUSER", "auth"),
            ("PGSSLMODE", "require"),
            ("AUTH_PORT", "8080"),
            ("AUTH_TOKEN_TTL_SECS", "60"),
            ("JWT_SECRET", "s3cret"),
            ("AUTH_PASSWORD_PEPPER", "pepper"),
            ("AUTH_HASH_MEMORY_KIB", "65536"),
            ("AUTH_HASH_ITERATIONS", "3"),
            ("AUTH_HASH_PARALLELISM", "4"),
        ]))
        .unwrap();

        assert_eq!(config.env, Environment::Prod);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6432);
        assert_eq!(config.database.database.as_deref(), Some("auth"));
        assert!(matches!(config.database.ssl_mode, PgSslMode::Require));
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(60));
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert_eq!(config.auth.hash_cost.memory_kib(), 65536);
        assert_eq!(config.auth.hash_cost.iterations(), 3);
        assert_eq!(config.auth.hash_cost.parallelism(), 4);
    }

    #[test]
    fn test_missing_required_values() {
        let err = ServiceConfig::from_lookup(lookup(&[("PGUSER", "auth")])).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));

        let err = ServiceConfig::from_lookup(lookup(&[("PGUSER", "auth"), ("JWT_SECRET", "")]))
            .unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));

        let err = ServiceConfig::from_lookup(lookup(&[("JWT_SECRET", "x")])).unwrap_err();
        assert!(err.to_string().contains("PGUSER"));
    }

    #[test]
    fn test_malformed_values() {
        let with = |key: &'static str, value: &'static str| {
            let mut pairs = MINIMAL.to_vec();
            pairs.push((key, value));
            ServiceConfig::from_lookup(lookup(&pairs))
        };

        assert!(with("AUTH_ENV", "staging").is_err());
        assert!(with("PGPORT", "not-a-port").is_err());
        assert!(with("AUTH_TOKEN_TTL_SECS", "-1").is_err());
        assert!(with("PGSSLMODE", "sometimes").is_err());
        assert!(with("AUTH_HASH_ITERATIONS", "0").is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("PGUSER", "auth"),
            ("PGPASSWORD", "dbpass"),
            ("JWT_SECRET", "jwtsecret"),
        ]))
        .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("dbpass"));
        assert!(!debug.contains("jwtsecret"));
    }
}
