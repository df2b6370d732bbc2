use thiserror::Error;

/// Classified failure of a single weather lookup.
///
/// The presenter maps each variant to exactly one user-visible banner
/// message; nothing here escapes to the user as-is.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider answered but does not know the requested city.
    #[error("city not found")]
    NotFound,

    /// Transport-level failure: connect, timeout, or reading the body.
    #[error("network failure: {0}")]
    Network(String),

    /// The provider signalled success but the body was missing required
    /// fields or was not decodable at all.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Network(err.to_string())
    }
}
