//! Normalization of the service's root-less XML output.
//!
//! `list`, `trends` and `userdetails` answer with a bare sequence of
//! elements (`<paste>...</paste><paste>...</paste>`) that is not a document
//! on its own. Wrapping it in a synthetic root is the whole workaround; the
//! parser in [`crate::response`] only ever sees the wrapped form.

/// Name of the synthetic root element
pub const ROOT_ELEMENT: &str = "pastes";

/// Wrap a raw response body in the synthetic root element
pub fn wrap_fragments(body: &str) -> String {
    format!("<{root}>{body}</{root}>", root = ROOT_ELEMENT, body = body)
}
