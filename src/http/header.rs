use hyper::HeaderMap;
use hyper::header::ToStrError;

/// copies the first value of the given header into an owned string.
/// `None` when the header is missing.
pub fn copy_header_value(headers: &HeaderMap, key: &str) -> Option<Result<String, ToStrError>> {
    headers.get(key).map(|value| value.to_str().map(|v| v.to_owned()))
}
