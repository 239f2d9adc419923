//! Classification of raw response bodies.
//!
//! The service reports failures as sentinel phrases inside an otherwise
//! successful HTTP response, so every body is checked for them before it is
//! interpreted. A bad request is always checked before the post limit.

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::collections::HashMap;
use std::str::FromStr;
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::fragment::wrap_fragments;
use crate::models::{PasteRecord, UserDetails, Visibility, NEVER_EXPIRES};

pub const BAD_REQUEST_SENTINEL: &str = "Bad API request";
pub const POST_LIMIT_SENTINEL: &str = "Post limit";
pub const DELETE_ACK: &str = "Paste Removed";

/// The service sometimes leaves spaces percent-encoded in its messages
const ENCODED_SPACE: &str = "%20";

type Fields = HashMap<String, String>;

/// Fail if the body carries a bad-request or post-limit sentinel
pub fn check_service_errors(body: &str) -> ApiResult<()> {
    if body.contains(BAD_REQUEST_SENTINEL) {
        return Err(ApiError::BadRequest {
            message: body.to_string(),
        });
    }

    let normalized = body.replace(ENCODED_SPACE, " ");
    if normalized.contains(POST_LIMIT_SENTINEL) {
        return Err(ApiError::RateLimited {
            message: normalized,
        });
    }

    Ok(())
}

/// Plain-token responses such as the user key returned by login
pub fn classify_token(body: &str) -> ApiResult<String> {
    check_service_errors(body)?;
    Ok(body.to_string())
}

/// Paste submissions answer with the URL of the new paste
pub fn classify_paste_url(body: &str) -> ApiResult<Url> {
    check_service_errors(body)?;
    Url::parse(body).map_err(|source| ApiError::MalformedResponse {
        body: body.to_string(),
        source,
    })
}

pub fn classify_delete(body: &str) -> ApiResult<()> {
    if body.contains(BAD_REQUEST_SENTINEL) {
        return Err(ApiError::BadRequest {
            message: body.to_string(),
        });
    }
    if body == DELETE_ACK {
        return Ok(());
    }
    Err(ApiError::UnexpectedResponse {
        body: body.to_string(),
    })
}

/// Raw paste text. Only a leading sentinel counts here, since the paste
/// itself may mention either phrase.
pub fn classify_raw(body: &str) -> ApiResult<String> {
    if body.starts_with(BAD_REQUEST_SENTINEL) {
        return Err(ApiError::BadRequest {
            message: body.to_string(),
        });
    }
    Ok(body.to_string())
}

/// Parse a `list` or `trends` response into records, in service order
pub fn parse_paste_list(body: &str) -> ApiResult<Vec<PasteRecord>> {
    if body.contains(BAD_REQUEST_SENTINEL) {
        return Err(ApiError::BadRequest {
            message: body.to_string(),
        });
    }

    let document = wrap_fragments(body);
    let records = collect_elements(&document, "paste")?
        .iter()
        .map(record_from_fields)
        .collect::<ApiResult<Vec<_>>>()?;

    tracing::debug!("Parsed {} paste records", records.len());
    Ok(records)
}

pub fn parse_user_details(body: &str) -> ApiResult<UserDetails> {
    if body.contains(BAD_REQUEST_SENTINEL) {
        return Err(ApiError::BadRequest {
            message: body.to_string(),
        });
    }

    let document = wrap_fragments(body);
    let mut users = collect_elements(&document, "user")?;
    if users.len() != 1 {
        return Err(ApiError::Parse(format!(
            "expected one <user> element, found {}",
            users.len()
        )));
    }
    let fields = users.remove(0);

    Ok(UserDetails {
        name: required(&fields, "user_name")?.to_string(),
        format_short: optional(&fields, "user_format_short"),
        expiration: optional(&fields, "user_expiration"),
        avatar_url: optional(&fields, "user_avatar_url"),
        visibility: match fields.get("user_private") {
            Some(code) => parse_visibility(code)?,
            None => Visibility::default(),
        },
        website: optional(&fields, "user_website"),
        email: optional(&fields, "user_email"),
        location: optional(&fields, "user_location"),
        account_type: match fields.get("user_account_type") {
            Some(_) => parse_number(&fields, "user_account_type")?,
            None => 0,
        },
    })
}

fn record_from_fields(fields: &Fields) -> ApiResult<PasteRecord> {
    let raw_url = required(fields, "paste_url")?.trim();
    let url = Url::parse(raw_url).map_err(|source| ApiError::MalformedResponse {
        body: raw_url.to_string(),
        source,
    })?;

    let expire_secs: i64 = parse_number(fields, "paste_expire_date")?;
    let expires_at = if expire_secs == 0 {
        NEVER_EXPIRES
    } else {
        timestamp(expire_secs)?
    };

    Ok(PasteRecord {
        key: required(fields, "paste_key")?.to_string(),
        created_at: timestamp(parse_number(fields, "paste_date")?)?,
        expires_at,
        title: optional(fields, "paste_title"),
        size: parse_number(fields, "paste_size")?,
        visibility: parse_visibility(required(fields, "paste_private")?)?,
        format_long: optional(fields, "paste_format_long"),
        format_short: optional(fields, "paste_format_short"),
        url,
        hits: parse_number(fields, "paste_hits")?,
    })
}

fn required<'a>(fields: &'a Fields, name: &str) -> ApiResult<&'a str> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| ApiError::Parse(format!("missing <{}>", name)))
}

fn optional(fields: &Fields, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

fn parse_number<T: FromStr>(fields: &Fields, name: &str) -> ApiResult<T> {
    let raw = required(fields, name)?;
    raw.trim()
        .parse()
        .map_err(|_| ApiError::Parse(format!("<{}> is not a number: {:?}", name, raw)))
}

fn parse_visibility(code: &str) -> ApiResult<Visibility> {
    Visibility::from_code(code.trim())
        .ok_or_else(|| ApiError::Parse(format!("unknown visibility code {:?}", code)))
}

fn timestamp(secs: i64) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApiError::Parse(format!("timestamp out of range: {}", secs)))
}

/// Collect the child fields of every `element` directly under the root.
///
/// Field text is kept as sent; whitespace between elements is skipped.
fn collect_elements(document: &str, element: &str) -> ApiResult<Vec<Fields>> {
    let mut reader = Reader::from_str(document);

    let mut elements = Vec::new();
    let mut current: Option<Fields> = None;
    let mut field: Option<(String, String)> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if depth == 2 && name == element {
                    current = Some(Fields::new());
                } else if depth == 3 && current.is_some() {
                    field = Some((name, String::new()));
                }
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if depth == 1 && name == element {
                    elements.push(Fields::new());
                } else if depth == 2 {
                    if let Some(fields) = current.as_mut() {
                        fields.insert(name, String::new());
                    }
                }
            }
            Event::Text(e) => {
                if let Some((_, value)) = field.as_mut() {
                    value.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some((_, value)) = field.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(_) => {
                if depth == 3 {
                    if let (Some(fields), Some((name, value))) = (current.as_mut(), field.take()) {
                        fields.insert(name, value);
                    }
                } else if depth == 2 {
                    if let Some(fields) = current.take() {
                        elements.push(fields);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ApiError::Parse("unclosed element in response".to_string()));
    }

    Ok(elements)
}
