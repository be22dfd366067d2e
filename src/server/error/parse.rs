use std::num::ParseIntError;
use thiserror::Error;

/// Failures to interpret client-supplied identifiers.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Path identifier is not coercible to the storage key type.
    ///
    /// Results in a 400 Bad Request with a fixed message returned to the client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    InvalidId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
