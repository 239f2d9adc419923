use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Expiration reported for pastes the service keeps forever.
///
/// The wire value for this is `0`, which must not be read as the epoch.
pub const NEVER_EXPIRES: DateTime<Utc> = DateTime::<Utc>::MAX_UTC;

/// Exposure level of a paste
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Unlisted,
    Private,
}

impl Visibility {
    /// Wire code used by `api_paste_private`
    pub fn code(self) -> &'static str {
        match self {
            Visibility::Public => "0",
            Visibility::Unlisted => "1",
            Visibility::Private => "2",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Visibility::Public),
            "1" => Some(Visibility::Unlisted),
            "2" => Some(Visibility::Private),
            _ => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Expiration tokens accepted by `api_paste_expire_date`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Expiration {
    #[default]
    Never,
    TenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    TwoWeeks,
    OneMonth,
    SixMonths,
    OneYear,
}

impl Expiration {
    pub fn code(self) -> &'static str {
        match self {
            Expiration::Never => "N",
            Expiration::TenMinutes => "10M",
            Expiration::OneHour => "1H",
            Expiration::OneDay => "1D",
            Expiration::OneWeek => "1W",
            Expiration::TwoWeeks => "2W",
            Expiration::OneMonth => "1M",
            Expiration::SixMonths => "6M",
            Expiration::OneYear => "1Y",
        }
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Paste submission parameters.
///
/// Format, expiration and visibility are plain strings sent as-is. The
/// service is the only authority on which values it accepts and reports
/// anything else as a bad request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaste {
    pub code: String,
    pub title: String,
    pub format: String,
    pub expire: String,
    pub visibility: String,
}

impl NewPaste {
    /// A public, never-expiring plain text paste with no title
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: String::new(),
            format: "text".to_string(),
            expire: Expiration::Never.code().to_string(),
            visibility: Visibility::Public.code().to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn expire(mut self, expire: impl Into<String>) -> Self {
        self.expire = expire.into();
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }
}

/// PasteRecord is one entry of a list or trends response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteRecord {
    pub key: String,
    pub created_at: DateTime<Utc>,
    /// [`NEVER_EXPIRES`] when the paste does not expire
    pub expires_at: DateTime<Utc>,
    pub title: String,
    pub size: u64,
    pub visibility: Visibility,
    pub format_long: String,
    pub format_short: String,
    pub url: Url,
    pub hits: u64,
}

impl PasteRecord {
    pub fn never_expires(&self) -> bool {
        self.expires_at == NEVER_EXPIRES
    }
}

/// Account settings returned by the `userdetails` operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub format_short: String,
    pub expiration: String,
    pub avatar_url: String,
    pub visibility: Visibility,
    pub website: String,
    pub email: String,
    pub location: String,
    pub account_type: u8,
}

impl UserDetails {
    pub fn is_pro(&self) -> bool {
        self.account_type == 1
    }
}

/// Credential state of a client
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { user_key: String },
}

impl Session {
    pub fn user_key(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user_key } => Some(user_key),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

// user keys are credentials
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Anonymous => f.write_str("Anonymous"),
            Session::Authenticated { .. } => f.write_str("Authenticated { .. }"),
        }
    }
}
