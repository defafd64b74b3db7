//! Connector for the external game server database.
//!
//! The game server owns its database and changes its structure without notice, so this
//! module exposes only raw statement execution plus the catalog helpers in [`catalog`].
//! Every run opens its own [`SourceConnection`] through a [`SourceConnector`] and must
//! hand it back through [`SourceConnection::close`] on every exit path.
//!
//! There is no retry: a failed connect or query is returned to the caller, which decides
//! whether the failure is fatal for the run or only for one table.

pub mod catalog;

use std::time::Duration;

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement,
    StatementBuilder, Value,
};
use url::Url;

use crate::server::{
    config::SourceConfig,
    error::{config::ConfigError, source::SourceError},
};

/// Builds connections to the game server database.
///
/// Holds the resolved connection URL and the timeout applied to connecting and to every
/// statement. Construction validates credentials, so a connector that exists is always
/// worth attempting to connect with.
#[derive(Debug, Clone)]
pub struct SourceConnector {
    url: String,
    timeout: Duration,
}

impl SourceConnector {
    /// Creates a MySQL connector from explicit game server credentials.
    ///
    /// # Arguments
    /// - `config` - Host, port, user, password and database name of the game server
    ///
    /// # Returns
    /// - `Ok(SourceConnector)` - Credentials present and address well formed
    /// - `Err(ConfigError::MissingSourceCredential)` - Host, user or database is blank
    /// - `Err(ConfigError::InvalidSourceAddress)` - Host or user cannot form a valid URL
    pub fn from_config(config: &SourceConfig) -> Result<Self, ConfigError> {
        if let Some(missing) = config.missing_credential() {
            return Err(ConfigError::MissingSourceCredential(missing));
        }

        let invalid = |what: &str| ConfigError::InvalidSourceAddress(what.to_string());

        let mut url = Url::parse("mysql://localhost").map_err(|e| invalid(&e.to_string()))?;
        url.set_host(Some(config.host.trim()))
            .map_err(|e| invalid(&format!("host '{}': {}", config.host, e)))?;
        url.set_port(Some(config.port))
            .map_err(|_| invalid(&format!("port {}", config.port)))?;
        url.set_username(&config.user)
            .map_err(|_| invalid(&format!("user '{}'", config.user)))?;
        if !config.password.is_empty() {
            url.set_password(Some(&config.password))
                .map_err(|_| invalid("password"))?;
        }
        url.set_path(config.database.trim());

        Ok(Self {
            url: url.into(),
            timeout: config.timeout,
        })
    }

    /// Creates a connector for an already assembled connection URL.
    ///
    /// Any backend SeaORM is built with is accepted, which lets the analyzer and sync
    /// engine run against SQLite copies of a game server database.
    pub fn from_url(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    /// Opens a dedicated connection to the game server database.
    ///
    /// The pool is capped at a single connection so one run never holds more than one
    /// slot on the game server.
    ///
    /// # Returns
    /// - `Ok(SourceConnection)` - Connection established
    /// - `Err(SourceError::Connection)` - Server unreachable, credentials rejected or the
    ///   connect timeout elapsed
    pub async fn connect(&self) -> Result<SourceConnection, SourceError> {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(1)
            .min_connections(0)
            .connect_timeout(self.timeout)
            .acquire_timeout(self.timeout)
            .sqlx_logging(false);

        let db = match tokio::time::timeout(self.timeout, Database::connect(opt)).await {
            Ok(result) => result.map_err(SourceError::Connection)?,
            Err(_) => {
                return Err(SourceError::Connection(DbErr::Custom(format!(
                    "connect timed out after {}s",
                    self.timeout.as_secs()
                ))))
            }
        };

        tracing::debug!(
            "Connected to game server database ({:?})",
            db.get_database_backend()
        );

        Ok(SourceConnection {
            db,
            timeout: self.timeout,
        })
    }
}

/// An open connection to the game server database, exclusively owned by one run.
pub struct SourceConnection {
    db: DatabaseConnection,
    timeout: Duration,
}

impl SourceConnection {
    /// SQL dialect spoken by the connected server.
    pub fn backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    /// Renders a `sea-query` statement in the connected server's dialect.
    pub fn build<S: StatementBuilder>(&self, statement: &S) -> Statement {
        self.backend().build(statement)
    }

    /// Creates a parametrized raw statement in the connected server's dialect.
    pub fn statement<I>(&self, sql: &str, params: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        Statement::from_sql_and_values(self.backend(), sql, params)
    }

    /// Executes a statement and decodes every returned row into `T`.
    ///
    /// Rows are decoded into a fixed structure immediately after they are read, so
    /// callers never index into untyped rows.
    ///
    /// # Arguments
    /// - `statement` - Statement to run
    /// - `context` - Short description of the operation, used in error messages
    ///
    /// # Returns
    /// - `Ok(Vec<T>)` - All rows, decoded
    /// - `Err(SourceError::Query)` - Statement or row decoding failed
    /// - `Err(SourceError::Timeout)` - Statement did not finish within the timeout
    pub async fn query<T: FromQueryResult>(
        &self,
        statement: Statement,
        context: &str,
    ) -> Result<Vec<T>, SourceError> {
        let query = T::find_by_statement(statement).all(&self.db);

        match tokio::time::timeout(self.timeout, query).await {
            Ok(rows) => rows.map_err(|source| SourceError::Query {
                context: context.to_string(),
                source,
            }),
            Err(_) => Err(SourceError::Timeout {
                context: context.to_string(),
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    /// Releases the connection back to the game server.
    ///
    /// Failures while closing are logged rather than returned, as the run's outcome is
    /// already decided by the time the connection is released.
    pub async fn close(self) {
        if let Err(e) = self.db.close().await {
            tracing::warn!("Failed to close game server connection cleanly: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SourceConfig {
        SourceConfig {
            host: "db.example.net".to_string(),
            port: 3307,
            user: "fivem".to_string(),
            password: "p@ss:word/1".to_string(),
            database: "qbcoreframework".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn builds_mysql_url_from_parts() {
        let connector = SourceConnector::from_config(&config()).unwrap();
        let url = Url::parse(&connector.url).unwrap();

        assert_eq!(url.scheme(), "mysql");
        assert_eq!(url.host_str(), Some("db.example.net"));
        assert_eq!(url.port(), Some(3307));
        assert_eq!(url.username(), "fivem");
        assert_eq!(url.path(), "/qbcoreframework");
    }

    #[test]
    fn percent_encodes_password() {
        let connector = SourceConnector::from_config(&config()).unwrap();
        let url = Url::parse(&connector.url).unwrap();

        let password = url.password().unwrap();
        assert!(!password.contains('@'));
        assert!(!password.contains('/'));
    }

    #[test]
    fn omits_empty_password() {
        let connector = SourceConnector::from_config(&SourceConfig {
            password: String::new(),
            ..config()
        })
        .unwrap();
        let url = Url::parse(&connector.url).unwrap();

        assert_eq!(url.password(), None);
    }

    #[test]
    fn rejects_missing_user() {
        let result = SourceConnector::from_config(&SourceConfig {
            user: String::new(),
            ..config()
        });

        assert!(matches!(
            result,
            Err(ConfigError::MissingSourceCredential("FIVEM_DB_USER"))
        ));
    }

    #[tokio::test]
    async fn unreachable_database_is_a_connection_error() {
        let dir = test_utils::source::SourceFixture::scratch_dir().unwrap();
        let url = format!(
            "sqlite://{}?mode=ro",
            dir.path().join("missing").join("game.db").display()
        );
        let connector = SourceConnector::from_url(url, Duration::from_secs(5));

        let result = connector.connect().await;

        assert!(matches!(result, Err(SourceError::Connection(_))));
    }
}
