use serde_json::Value;

use crate::Error;

/// The transport collaborator behind [`MeasureClient`](crate::MeasureClient).
///
/// An implementation performs one authenticated HTTP GET against a fully
/// formatted URL and hands back the response body as parsed JSON. Everything
/// else about the transport (TLS, token injection, timeouts, retries) is the
/// implementation's business; the client never sees it.
///
/// This crate ships no implementation. Callers wire in whatever HTTP stack
/// they already use; tests typically substitute a scripted stub.
pub trait Requester {
    /// Fetch `url` and return the response body as a parsed JSON document.
    ///
    /// Fails with [`Error::BadRequest`] when the server indicates the request
    /// was invalid and with [`Error::Unavailable`] when the server cannot be
    /// contacted.
    fn request(&self, url: &str) -> Result<Value, Error>;
}
