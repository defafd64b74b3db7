use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to or set up a SQLite test database.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to create the temporary directory backing a source fixture.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
