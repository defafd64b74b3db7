use sea_orm::DbErr;
use thiserror::Error;

/// Failures writing to or reading from the destination player store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A batch upsert was rejected by the store.
    #[error("Upsert of {records} player records failed: {source}")]
    Upsert {
        /// Number of records in the rejected batch
        records: usize,
        /// The underlying database error
        #[source]
        source: DbErr,
    },

    /// A lookup against the store failed.
    #[error("Player lookup failed: {0}")]
    Lookup(#[source] DbErr),

    /// The store did not answer within the configured timeout.
    #[error("Player store did not respond within {0}s")]
    Timeout(u64),
}
