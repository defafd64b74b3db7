use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    ///
    /// Raised for numeric settings such as `FIVEM_DB_PORT` or `SYNC_BATCH_SIZE` that
    /// contain a value which is not a valid number.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// A game server database credential is missing.
    ///
    /// The website starts without game server credentials, but schema analysis and
    /// player sync cannot run until they are provided. Reported before any connection
    /// attempt is made.
    #[error("Game server database is not configured: {0} is missing")]
    MissingSourceCredential(&'static str),

    /// The game server connection URL could not be assembled from its parts.
    #[error("Invalid game server database address: {0}")]
    InvalidSourceAddress(String),
}
