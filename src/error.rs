use thiserror::Error;

/// Failures raised while resolving where a collection lives.
///
/// These surface when a client is built, never from an individual call.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("the URL is malformed, {key}: {url}")]
    MalformedUrl {
        key: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL {0} is not a usable http(s) endpoint")]
    UnusableUrl(String),
    #[error("no endpoint could be resolved for service '{0}'")]
    Unresolved(String),
}

/// Failures of a single catalog call.
///
/// Calls never produce `Config`; it lets callers building clients and
/// issuing calls in one function propagate a [`ConfigError`] with `?`.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("rejected with HTTP {status}: {message}")]
    Conflict { status: u16, message: String },
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unexpected HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] ureq::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of a [`ClientError`] for callers that only branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    ServiceUnavailable,
    Configuration,
    Transport,
}

impl ClientError {
    /// Maps a non-success HTTP status and the server's message.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => ClientError::NotFound(message),
            503 => ClientError::ServiceUnavailable(message),
            400..=499 => ClientError::Conflict { status, message },
            _ => ClientError::Status { status, message },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::Conflict { .. } => ErrorKind::Conflict,
            ClientError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            ClientError::Config(_) => ErrorKind::Configuration,
            ClientError::Status { .. } | ClientError::Transport(_) | ClientError::Decode(_) => {
                ErrorKind::Transport
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}
