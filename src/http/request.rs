//! Incoming HTTP request type and query-string decoding.

use std::collections::HashMap;

use http::HeaderMap;

/// An incoming HTTP request, as seen by a handler.
///
/// Built from the hyper request head at dispatch time. The query string is
/// parsed and percent-decoded eagerly; handlers read it through
/// [`query`](Request::query).
pub struct Request {
    method: http::Method,
    path: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(parts: &http::request::Parts, params: HashMap<String, String>) -> Self {
        Self {
            method: parts.method.clone(),
            path: parts.uri.path().to_owned(),
            headers: parts.headers.clone(),
            query: parse_query(parts.uri.query().unwrap_or("")),
            params,
        }
    }

    pub fn method(&self) -> &http::Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/books/{id}`, `req.param("id")` on `/books/2` returns
    /// `Some("2")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the first query-string value for `key`, decoded.
    ///
    /// `?autor=Jaime%20Bayly` and `?autor=Jaime+Bayly` both yield
    /// `Some("Jaime Bayly")`. A key present without a value yields
    /// `Some("")`, which downstream treats the same as absent.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// ── Query-string decoding ────────────────────────────────────────────────────

/// Splits `a=1&b=two` into decoded pairs. A key without `=` maps to the
/// empty value.
fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// `application/x-www-form-urlencoded` decoding: `+` is a space, `%XX` is a
/// byte. An invalid escape passes through literally instead of failing the
/// request; non-UTF-8 byte sequences are lossily replaced, never rejected.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match (hex_value(bytes.get(i + 1)), hex_value(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: Option<&u8>) -> Option<u8> {
    (*byte? as char).to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_and_plus_both_decode_to_space() {
        assert_eq!(decode_component("Jaime%20Bayly"), "Jaime Bayly");
        assert_eq!(decode_component("Jaime+Bayly"), "Jaime Bayly");
    }

    #[test]
    fn utf8_escapes_decode() {
        assert_eq!(decode_component("a%C3%B1o"), "año");
        assert_eq!(decode_component("P%C3%A9rez"), "Pérez");
    }

    #[test]
    fn invalid_escapes_pass_through() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%ZZ"), "%ZZ");
    }

    #[test]
    fn pairs_split_on_ampersand() {
        let pairs = parse_query("autor=Jaime+Bayly&x=1&flag");
        assert_eq!(
            pairs,
            vec![
                ("autor".to_owned(), "Jaime Bayly".to_owned()),
                ("x".to_owned(), "1".to_owned()),
                ("flag".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(parse_query("").is_empty());
    }
}
