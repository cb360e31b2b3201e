//! `data:` URI encodings of SVG text.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

const SVG_PREFIX: &str = "data:image/svg+xml,";
pub(crate) const SVG_BASE64_PREFIX: &str = "data:image/svg+xml;base64,";

/// URI component encode set: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escapes turned back into literals for the minified form.
const MINIFY_UNESCAPES: [(&str, &str); 4] = [("%20", " "), ("%3D", "="), ("%3A", ":"), ("%2F", "/")];

/// Which of the three encodings to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataUriKind {
    /// Percent-encoded with spaces, `=`, `:` and `/` left literal.
    #[default]
    Minified,
    /// Base64 of the UTF-8 bytes.
    Base64,
    /// Fully percent-encoded.
    #[serde(alias = "urlencoded")]
    #[value(alias = "urlencoded")]
    Url,
}

impl DataUriKind {
    pub const ALL: [Self; 3] = [Self::Minified, Self::Base64, Self::Url];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Minified => "minified",
            Self::Base64 => "base64",
            Self::Url => "url",
        }
    }
}

/// The three encodings of one document plus their UTF-8 byte lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUriSet {
    pub minified: String,
    pub base64: String,
    pub url_encoded: String,
    pub minified_size: usize,
    pub base64_size: usize,
    pub url_encoded_size: usize,
}

impl DataUriSet {
    pub fn get(&self, kind: DataUriKind) -> &str {
        match kind {
            DataUriKind::Minified => &self.minified,
            DataUriKind::Base64 => &self.base64,
            DataUriKind::Url => &self.url_encoded,
        }
    }

    pub fn size(&self, kind: DataUriKind) -> usize {
        match kind {
            DataUriKind::Minified => self.minified_size,
            DataUriKind::Base64 => self.base64_size,
            DataUriKind::Url => self.url_encoded_size,
        }
    }
}

/// Encode SVG text as minified, base64 and URL-encoded data URIs.
pub fn encode(svg: &str) -> DataUriSet {
    let escaped = utf8_percent_encode(svg, COMPONENT).to_string();

    let compact = MINIFY_UNESCAPES
        .iter()
        .fold(escaped.clone(), |acc, (from, to)| acc.replace(from, to));

    let minified = format!("{SVG_PREFIX}{compact}");
    let base64 = format!("{SVG_BASE64_PREFIX}{}", BASE64_STANDARD.encode(svg.as_bytes()));
    let url_encoded = format!("{SVG_PREFIX}{escaped}");

    DataUriSet {
        minified_size: minified.len(),
        base64_size: base64.len(),
        url_encoded_size: url_encoded.len(),
        minified,
        base64,
        url_encoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    const SAMPLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><path d="M0 0h10v10z" fill="#f00"/></svg>"##;

    #[test]
    fn test_prefixes_and_distinct() {
        let set = encode("<svg/>");
        assert!(set.minified.starts_with("data:image/svg+xml,"));
        assert!(set.base64.starts_with("data:image/svg+xml;base64,"));
        assert!(set.url_encoded.starts_with("data:image/svg+xml,"));

        assert_ne!(set.minified, set.base64);
        assert_ne!(set.minified, set.url_encoded);
        assert_ne!(set.base64, set.url_encoded);
    }

    #[test]
    fn test_small_document_exact() {
        let set = encode("<svg/>");
        assert_eq!(set.url_encoded, "data:image/svg+xml,%3Csvg%2F%3E");
        assert_eq!(set.minified, "data:image/svg+xml,%3Csvg/%3E");
        assert_eq!(set.base64, "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_url_encoded_round_trip() {
        let texts = [SAMPLE, "<svg><text>héllo ✓ 日本</text></svg>", "a%3Db ~*'()!"];
        for text in texts {
            let set = encode(text);
            let payload = set.url_encoded.strip_prefix("data:image/svg+xml,").unwrap();
            let decoded = percent_decode_str(payload).decode_utf8().unwrap();
            assert_eq!(decoded, text);
        }
    }

    #[test]
    fn test_component_unreserved_kept() {
        let set = encode("-_.!~*'()");
        assert_eq!(set.url_encoded, "data:image/svg+xml,-_.!~*'()");
    }

    #[test]
    fn test_minified_unescapes() {
        let set = encode(SAMPLE);
        let payload = set.minified.strip_prefix("data:image/svg+xml,").unwrap();
        assert!(payload.contains("xmlns=%22http://www.w3.org/2000/svg%22"));
        assert!(payload.contains("viewBox=%220 0 10 10%22"));
        assert!(payload.contains("%23f00"));
        assert!(!payload.contains("%20"));
        assert!(set.minified.len() < set.url_encoded.len());
    }

    #[test]
    fn test_sizes_are_byte_lengths() {
        let set = encode("<svg><text>✓</text></svg>");
        assert_eq!(set.minified_size, set.minified.len());
        assert_eq!(set.base64_size, set.base64.len());
        assert_eq!(set.url_encoded_size, set.url_encoded.len());
        // The check mark is three UTF-8 bytes, each escaped
        assert!(set.url_encoded.contains("%E2%9C%93"));
    }

    #[test]
    fn test_base64_decodes_to_utf8() {
        let text = "<svg><text>日本</text></svg>";
        let set = encode(text);
        let payload = set.base64.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let bytes = BASE64_STANDARD.decode(payload).unwrap();
        assert_eq!(bytes, text.as_bytes());
    }

    #[test]
    fn test_get_by_kind() {
        let set = encode(SAMPLE);
        for kind in DataUriKind::ALL {
            assert_eq!(set.get(kind).len(), set.size(kind));
        }
        assert_eq!(set.get(DataUriKind::Url), set.url_encoded);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(encode("<svg/>")).unwrap();
        assert!(json.get("urlEncoded").is_some());
        assert!(json.get("minifiedSize").is_some());
        assert!(json.get("base64Size").is_some());
    }
}
