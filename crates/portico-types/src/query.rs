//! URL query-string decoding.
//!
//! A small ordered multimap over the raw query text. Keys may repeat
//! (`x=...&x=...`); insertion order is preserved so repeated values come
//! back in the order the launcher wrote them. Decoding never fails:
//! malformed percent escapes are kept literally and non-UTF-8 byte runs
//! are replaced, so a garbled query degrades instead of erroring.

/// Decoded query parameters, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw query string (with or without the leading `?`).
    ///
    /// `+` decodes to a space and `%XX` to the byte it names, matching
    /// standard form encoding. A key without `=` gets an empty value.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut pairs = Vec::new();
        for part in raw.split('&') {
            if part.is_empty() {
                continue;
            }
            let (key, value) = match part.split_once('=') {
                Some((k, v)) => (k, v),
                None => (part, ""),
            };
            pairs.push((decode_component(key), decode_component(value)));
        }
        Self { pairs }
    }

    /// First value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in document order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether `key` appears at all.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Number of decoded pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the query carried no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Percent-decode one key or value.
fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        // Malformed escape: keep the '%' literally.
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_pairs() {
        let q = QueryParams::parse("v=1.2.0&r=1");
        assert_eq!(q.get("v"), Some("1.2.0"));
        assert_eq!(q.get("r"), Some("1"));
        assert_eq!(q.get("missing"), None);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn leading_question_mark_stripped() {
        let q = QueryParams::parse("?v=1.2.0");
        assert_eq!(q.get("v"), Some("1.2.0"));
    }

    #[test]
    fn repeated_keys_keep_order() {
        let q = QueryParams::parse("x=a&x=b&x=c");
        assert_eq!(q.get_all("x"), vec!["a", "b", "c"]);
        // get() returns the first occurrence.
        assert_eq!(q.get("x"), Some("a"));
    }

    #[test]
    fn plus_and_percent_decoding() {
        let q = QueryParams::parse("v=1.2.0+beta&n=Ext%20One&amp=%26");
        assert_eq!(q.get("v"), Some("1.2.0 beta"));
        assert_eq!(q.get("n"), Some("Ext One"));
        assert_eq!(q.get("amp"), Some("&"));
    }

    #[test]
    fn utf8_percent_sequences() {
        // "é" = 0xC3 0xA9
        let q = QueryParams::parse("n=caf%C3%A9");
        assert_eq!(q.get("n"), Some("café"));
    }

    #[test]
    fn malformed_escapes_kept_literally() {
        let q = QueryParams::parse("a=50%&b=%zz&c=%1");
        assert_eq!(q.get("a"), Some("50%"));
        assert_eq!(q.get("b"), Some("%zz"));
        assert_eq!(q.get("c"), Some("%1"));
    }

    #[test]
    fn key_without_value() {
        let q = QueryParams::parse("xi&m=1");
        assert_eq!(q.get("xi"), Some(""));
        assert!(q.contains("xi"));
        assert_eq!(q.get("m"), Some("1"));
    }

    #[test]
    fn empty_segments_ignored() {
        let q = QueryParams::parse("&&a=1&&");
        assert_eq!(q.len(), 1);
        assert_eq!(q.get("a"), Some("1"));
    }

    #[test]
    fn empty_query() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics(raw in ".*") {
                let _ = QueryParams::parse(&raw);
            }

            #[test]
            fn parse_is_deterministic(raw in ".*") {
                prop_assert_eq!(QueryParams::parse(&raw), QueryParams::parse(&raw));
            }

            #[test]
            fn plain_pairs_round_trip(
                key in "[a-z]{1,8}",
                value in "[A-Za-z0-9._-]{0,16}",
            ) {
                let q = QueryParams::parse(&format!("{key}={value}"));
                prop_assert_eq!(q.get(&key), Some(value.as_str()));
            }
        }
    }
}
