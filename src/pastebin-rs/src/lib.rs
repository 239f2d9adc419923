//! Pastebin Client Library
//!
//! Client for the pastebin.com HTTP API: login, paste submission, listing
//! and deletion.

mod client;
pub mod transport;

pub use client::Client;
pub use pastebin_core::{
    ApiError, Config, Expiration, FormParams, NewPaste, PasteRecord, Session, Url, UserDetails,
    Visibility, NEVER_EXPIRES,
};
pub use transport::{HttpTransport, Transport};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("operation requires a logged-in session")]
    NotAuthenticated,

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The classified service error, if that is what this is
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(source: reqwest::Error) -> Self {
        ClientError::Transport(Box::new(source))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
