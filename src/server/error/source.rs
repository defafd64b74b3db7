use sea_orm::DbErr;
use thiserror::Error;

/// Failures talking to the external game server database.
///
/// `Connection` is fatal for the current run. `Query` and `Timeout` are recovered by the
/// caller at table or scan granularity.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The game server database could not be reached or refused the credentials.
    #[error("Failed to connect to game server database: {0}")]
    Connection(#[source] DbErr),

    /// A single statement against the game server database failed.
    #[error("Query failed while {context}: {source}")]
    Query {
        /// What the connector was doing when the statement failed
        context: String,
        /// The underlying database error
        #[source]
        source: DbErr,
    },

    /// A statement did not complete within the configured timeout.
    #[error("Query timed out after {seconds}s while {context}")]
    Timeout {
        /// What the connector was doing when the timeout elapsed
        context: String,
        /// The timeout that elapsed
        seconds: u64,
    },
}
