use std::error::Error;
use std::fmt;

// Errors raised while negotiating an anonymous session.
#[derive(Debug)]
pub enum SessionError {
    // The backend answered successfully but supplied no usable guest id.
    Unresolved,
    // Network or HTTP failure from the API client, passed through untouched.
    Api(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Unresolved => {
                write!(f, "anonymous session response did not contain a guest id")
            }
            SessionError::Api(err) => write!(f, "anonymous session request failed: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SessionError::Unresolved => None,
            SessionError::Api(err) => Some(err.as_ref()),
        }
    }
}
