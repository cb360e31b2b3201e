//! `[export]` and `[uri]` sections.
//!
//! # Example
//!
//! ```toml
//! [export]
//! scale = 2            # preset scale (0.25 .. 8) or "custom"
//!
//! [uri]
//! kind = "minified"    # minified | base64 | url
//! ```

use serde::{Deserialize, Serialize};

use super::ConfigDiagnostics;
use crate::svg::{DataUriKind, ExportScale};

/// Raw `export.scale` value: TOML allows both `2` and `"custom"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleValue {
    Number(f64),
    Text(String),
}

impl Default for ScaleValue {
    fn default() -> Self {
        Self::Number(2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Scale applied when a document is loaded.
    pub scale: ScaleValue,
}

impl ExportConfig {
    const SCALE_FIELD: &'static str = "export.scale";

    /// Configured scale, falling back to the default when invalid.
    ///
    /// `validate` reports invalid values before this is used.
    pub fn export_scale(&self) -> ExportScale {
        self.parse_scale().unwrap_or_default()
    }

    fn parse_scale(&self) -> Option<ExportScale> {
        match &self.scale {
            ScaleValue::Number(n) => n.to_string().parse().ok(),
            ScaleValue::Text(s) => s.parse().ok(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.parse_scale().is_none() {
            let shown = match &self.scale {
                ScaleValue::Number(n) => n.to_string(),
                ScaleValue::Text(s) => format!("\"{s}\""),
            };
            diag.error_with_hint(
                Self::SCALE_FIELD,
                format!("{shown} is not a preset scale"),
                "use one of 0.25, 0.5, 0.75, 1, 1.5, 2, 3, 4, 5, 6, 7, 8 or \"custom\"",
            );
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UriConfig {
    /// Encoding printed by `uri` when `--kind` is not given.
    pub kind: DataUriKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.export.export_scale(), ExportScale::Preset(2.0));
        assert_eq!(config.uri.kind, DataUriKind::Minified);
    }

    #[test]
    fn test_scale_parsing() {
        let cases = [
            ("0.25", ExportScale::Preset(0.25)),
            ("1", ExportScale::Preset(1.0)),
            ("1.5", ExportScale::Preset(1.5)),
            ("8", ExportScale::Preset(8.0)),
            ("\"custom\"", ExportScale::Custom),
            ("\"4x\"", ExportScale::Preset(4.0)),
        ];
        for (input, expected) in cases {
            let config = test_parse_config(&format!("[export]\nscale = {input}"));
            assert_eq!(config.export.export_scale(), expected, "failed for {input}");
        }
    }

    #[test]
    fn test_invalid_scale_reported() {
        let config = test_parse_config("[export]\nscale = 2.5");
        let mut diag = ConfigDiagnostics::new();
        config.export.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, "export.scale");
        assert_eq!(config.export.export_scale(), ExportScale::DEFAULT);
    }

    #[test]
    fn test_kind_parsing() {
        let cases = [
            ("minified", DataUriKind::Minified),
            ("base64", DataUriKind::Base64),
            ("url", DataUriKind::Url),
            ("urlencoded", DataUriKind::Url),
        ];
        for (input, expected) in cases {
            let config = test_parse_config(&format!("[uri]\nkind = \"{input}\""));
            assert_eq!(config.uri.kind, expected, "failed for {input}");
        }
    }
}
