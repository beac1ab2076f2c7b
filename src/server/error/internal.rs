use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not recognize.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    UnknownEnumValue {
        /// Table and column the value was read from
        column: &'static str,
        /// The unrecognized value
        value: String,
    },

    /// Failure to sign a bearer token.
    #[error("Failed to encode bearer token: {0}")]
    TokenEncoding(String),
}
