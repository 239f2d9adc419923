use thiserror::Error;

/// Service-level failures recognised in a response body, plus the one
/// locally enforced precondition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request rejected by service: {message}")]
    BadRequest { message: String },

    #[error("rate limited: {message}")]
    RateLimited { message: String },

    #[error("malformed response {body:?}")]
    MalformedResponse {
        body: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unexpected response: {body}")]
    UnexpectedResponse { body: String },
}

impl ApiError {
    /// The raw service text carried by the error, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest { message } | ApiError::RateLimited { message } => {
                Some(message.as_str())
            }
            ApiError::MalformedResponse { body, .. } | ApiError::UnexpectedResponse { body } => {
                Some(body.as_str())
            }
            ApiError::Parse(_) | ApiError::InvalidArgument(_) => None,
        }
    }
}

impl From<quick_xml::Error> for ApiError {
    fn from(source: quick_xml::Error) -> Self {
        ApiError::Parse(source.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
