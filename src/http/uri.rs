//! query string access for request uris.
//!
//! pairs are decoded as `application/x-www-form-urlencoded`: `+` becomes a
//! space before percent escapes are decoded. a pair holding a `%` that is not
//! followed by two hex digits is dropped, so a malformed parameter reads the
//! same as a missing one. keys must decode to utf-8, values are kept as raw
//! bytes. when a key repeats the first value wins.

use std::collections::HashMap;

use hyper::Uri;

const EMPTY_QUERY: &str = "";

fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'%' {
            match bytes.get(index + 1..index + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => index += 3,
                _ => return false
            }
        } else {
            index += 1;
        }
    }

    true
}

fn decode_bytes(raw: &str) -> Option<Vec<u8>> {
    if !has_valid_escapes(raw) {
        return None;
    }

    let spaced = raw.replace('+', " ");

    Some(urlencoding::decode_binary(spaced.as_bytes()).into_owned())
}

fn decode_key(raw: &str) -> Option<String> {
    String::from_utf8(decode_bytes(raw)?).ok()
}

/// iterates the raw `key[=value]` pairs of the query, undecoded
pub fn raw_query_iter(uri: &Uri) -> impl Iterator<Item=(&str,Option<&str>)> {
    uri.query()
        .unwrap_or(EMPTY_QUERY)
        .split("&")
        .filter(|v| !v.is_empty())
        .map(|v| {
            if let Some(pair) = v.split_once("=") {
                (pair.0, Some(pair.1))
            } else {
                (v, None)
            }
        })
}

pub fn query_iter(uri: &Uri) -> impl Iterator<Item=(String,Option<Vec<u8>>)> + '_ {
    raw_query_iter(uri).filter_map(|(key, value)| {
        let key = decode_key(key)?;

        match value {
            Some(v) => Some((key, Some(decode_bytes(v)?))),
            None => Some((key, None))
        }
    })
}

pub struct QueryMap(
    HashMap<String, Vec<Option<Vec<u8>>>>
);

impl QueryMap {

    pub fn new(uri: &Uri) -> QueryMap {
        let mut map: HashMap<String, Vec<Option<Vec<u8>>>> = HashMap::new();

        for (key, value) in query_iter(uri) {
            map.entry(key).or_default().push(value);
        }

        QueryMap(map)
    }

    /// outer `None` when the key is missing, inner `None` when the key was
    /// given without a `=`
    pub fn get_value<K>(&self, key: K) -> Option<Option<Vec<u8>>>
    where
        K: AsRef<str>
    {
        self.get_value_ref(key).cloned()
    }

    pub fn get_value_ref<K>(&self, key: K) -> Option<&Option<Vec<u8>>>
    where
        K: AsRef<str>
    {
        self.0.get(key.as_ref()).and_then(|list| list.first())
    }
}
