//! Form parameter sets for each API operation.
//!
//! Field names and operation tags are fixed by the service. Builders copy
//! caller values verbatim; the result limit of a list call is the only value
//! checked locally.

use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::NewPaste;

/// Largest `api_results_limit` the service accepts
pub const MAX_RESULTS_LIMIT: u32 = 1000;

/// Ordered form fields, serialized as `application/x-www-form-urlencoded`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormParams(Vec<(String, String)>);

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value under the same name
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((name.to_string(), value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `api_option` tag, if this is an operation request
    pub fn operation(&self) -> Option<&str> {
        self.get("api_option")
    }
}

fn operation(option: &str, dev_key: &str) -> FormParams {
    let mut params = FormParams::new();
    params.set("api_option", option).set("api_dev_key", dev_key);
    params
}

pub fn build_paste_params(paste: &NewPaste, dev_key: &str, user_key: Option<&str>) -> FormParams {
    let mut params = operation("paste", dev_key);
    params
        .set("api_paste_code", paste.code.as_str())
        .set("api_paste_name", paste.title.as_str())
        .set("api_paste_format", paste.format.as_str())
        .set("api_paste_expire_date", paste.expire.as_str())
        .set("api_paste_private", paste.visibility.as_str());
    if let Some(user_key) = user_key {
        params.set("api_user_key", user_key);
    }
    params
}

/// Paste with only the code set, leaving every other field to the service
pub fn build_simple_paste_params(code: &str, dev_key: &str, user_key: Option<&str>) -> FormParams {
    let mut params = operation("paste", dev_key);
    params.set("api_paste_code", code);
    if let Some(user_key) = user_key {
        params.set("api_user_key", user_key);
    }
    params
}

pub fn build_login_params(username: &str, password: &str, dev_key: &str) -> FormParams {
    let mut params = FormParams::new();
    params
        .set("api_dev_key", dev_key)
        .set("api_user_name", username)
        .set("api_user_password", password);
    params
}

/// Fail unless `result_limit` is within `0..=MAX_RESULTS_LIMIT`
pub fn check_results_limit(result_limit: i64) -> ApiResult<()> {
    if !(0..=i64::from(MAX_RESULTS_LIMIT)).contains(&result_limit) {
        return Err(ApiError::InvalidArgument(format!(
            "result limit {} is outside 0..={}",
            result_limit, MAX_RESULTS_LIMIT
        )));
    }
    Ok(())
}

pub fn build_list_params(dev_key: &str, user_key: &str, result_limit: i64) -> ApiResult<FormParams> {
    check_results_limit(result_limit)?;

    let mut params = operation("list", dev_key);
    params
        .set("api_user_key", user_key)
        .set("api_results_limit", result_limit.to_string());
    Ok(params)
}

pub fn build_trends_params(dev_key: &str) -> FormParams {
    operation("trends", dev_key)
}

pub fn build_delete_params(paste_key: &str, dev_key: &str, user_key: &str) -> FormParams {
    let mut params = operation("delete", dev_key);
    params
        .set("api_user_key", user_key)
        .set("api_paste_key", paste_key);
    params
}

pub fn build_user_details_params(dev_key: &str, user_key: &str) -> FormParams {
    let mut params = operation("userdetails", dev_key);
    params.set("api_user_key", user_key);
    params
}

pub fn build_show_paste_params(paste_key: &str, dev_key: &str, user_key: &str) -> FormParams {
    let mut params = operation("show_paste", dev_key);
    params
        .set("api_user_key", user_key)
        .set("api_paste_key", paste_key);
    params
}
