use crate::transport::{HttpTransport, Transport};
use crate::{ClientError, Result};
use pastebin_core::error::ApiResult;
use pastebin_core::{request, response};
use pastebin_core::{Config, FormParams, NewPaste, PasteRecord, Session, Url, UserDetails};
use std::sync::Arc;

/// Pastebin API client
///
/// Holds the developer key (through [`Config`]) and the current [`Session`].
/// Logging in produces a new authenticated client; an existing client never
/// changes its session.
#[derive(Clone)]
pub struct Client {
    config: Config,
    transport: Arc<dyn Transport>,
    session: Session,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("post_url", &self.config.post_url)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create an anonymous client talking HTTP to the configured endpoints
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create an anonymous client on top of any transport
    pub fn with_transport(config: Config, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
            session: Session::Anonymous,
        }
    }

    /// Authenticate with a user key obtained by an earlier login
    pub fn with_user_key(mut self, user_key: impl Into<String>) -> Self {
        self.session = Session::Authenticated {
            user_key: user_key.into(),
        };
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Log in and return an authenticated copy of this client
    pub async fn login(&self, username: &str, password: &str) -> Result<Client> {
        let params = request::build_login_params(username, password, &self.config.dev_key);
        let body = self.send(&self.config.login_url, &params).await?;
        let user_key = classified("login", response::classify_token(&body))?;

        tracing::debug!("Login succeeded for {}", username);
        Ok(Client {
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
            session: Session::Authenticated { user_key },
        })
    }

    /// Submit a paste without attaching it to any account
    pub async fn paste_anonymous(&self, paste: &NewPaste) -> Result<Url> {
        let params = request::build_paste_params(paste, &self.config.dev_key, None);
        self.submit(&params).await
    }

    /// Submit a paste as the logged-in user, or anonymously without a session
    pub async fn paste(&self, paste: &NewPaste) -> Result<Url> {
        let params =
            request::build_paste_params(paste, &self.config.dev_key, self.session.user_key());
        self.submit(&params).await
    }

    /// Submit code with the service's defaults for every other field
    pub async fn paste_simple(&self, code: &str) -> Result<Url> {
        let params = request::build_simple_paste_params(
            code,
            &self.config.dev_key,
            self.session.user_key(),
        );
        self.submit(&params).await
    }

    /// List the logged-in user's pastes, at most `limit` (0..=1000) of them
    pub async fn list_pastes(&self, limit: i64) -> Result<Vec<PasteRecord>> {
        request::check_results_limit(limit)?;
        let user_key = self.user_key()?;
        let params = request::build_list_params(&self.config.dev_key, user_key, limit)?;
        let body = self.send(&self.config.post_url, &params).await?;
        classified("list", response::parse_paste_list(&body))
    }

    /// List the service's currently trending pastes
    pub async fn list_trending(&self) -> Result<Vec<PasteRecord>> {
        let params = request::build_trends_params(&self.config.dev_key);
        let body = self.send(&self.config.post_url, &params).await?;
        classified("trends", response::parse_paste_list(&body))
    }

    /// Delete one of the logged-in user's pastes
    pub async fn delete_paste(&self, paste_key: &str) -> Result<()> {
        let user_key = self.user_key()?;
        let params = request::build_delete_params(paste_key, &self.config.dev_key, user_key);
        let body = self.send(&self.config.post_url, &params).await?;
        classified("delete", response::classify_delete(&body))?;

        tracing::debug!("Deleted paste {}", paste_key);
        Ok(())
    }

    /// Account settings of the logged-in user
    pub async fn user_details(&self) -> Result<UserDetails> {
        let user_key = self.user_key()?;
        let params = request::build_user_details_params(&self.config.dev_key, user_key);
        let body = self.send(&self.config.post_url, &params).await?;
        classified("userdetails", response::parse_user_details(&body))
    }

    /// Raw text of one of the logged-in user's pastes, private ones included
    pub async fn show_paste(&self, paste_key: &str) -> Result<String> {
        let user_key = self.user_key()?;
        let params = request::build_show_paste_params(paste_key, &self.config.dev_key, user_key);
        let body = self.send(&self.config.raw_url, &params).await?;
        classified("show_paste", response::classify_raw(&body))
    }

    async fn submit(&self, params: &FormParams) -> Result<Url> {
        let body = self.send(&self.config.post_url, params).await?;
        let url = classified("paste", response::classify_paste_url(&body))?;

        tracing::debug!("Paste created at {}", url);
        Ok(url)
    }

    async fn send(&self, endpoint: &str, params: &FormParams) -> Result<String> {
        tracing::debug!(
            operation = params.operation().unwrap_or("login"),
            "Sending request to {}",
            endpoint
        );
        self.transport.post_form(endpoint, params).await
    }

    fn user_key(&self) -> Result<&str> {
        self.session.user_key().ok_or(ClientError::NotAuthenticated)
    }
}

fn classified<T>(operation: &str, result: ApiResult<T>) -> Result<T> {
    result.map_err(|e| {
        tracing::warn!("{} rejected: {}", operation, e);
        ClientError::Api(e)
    })
}
