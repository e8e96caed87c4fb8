//! Per-request snapshot captured by the echo responder.

use bytes::Bytes;

/// What the echo page reflects back: method, headers in arrival order, raw body.
///
/// Header names may repeat; each occurrence is its own pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl RequestSnapshot {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Body decoded as UTF-8; invalid sequences become U+FFFD.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_headers_are_kept_in_order() {
        let s = RequestSnapshot::new("GET")
            .with_header("accept", "a")
            .with_header("x-b", "1")
            .with_header("accept", "b");
        let names: Vec<&str> = s.headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["accept", "x-b", "accept"]);
    }

    #[test]
    fn body_text_is_lossy() {
        let s = RequestSnapshot::new("POST").with_body(vec![b'o', b'k', 0xff]);
        assert_eq!(s.body_text(), "ok\u{fffd}");
    }
}
