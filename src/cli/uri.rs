//! `uri` command: data URI encodings.

use anyhow::Result;
use serde::Serialize;

use super::args::UriArgs;
use super::common::read_svg_input;
use crate::config::ToolConfig;
use crate::svg::{DataUriKind, DataUriSet, encode};
use crate::utils::size::format_bytes;
use crate::{debug, log};

/// JSON output: the encoding set plus readable sizes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UriReport<'a> {
    #[serde(flatten)]
    set: &'a DataUriSet,
    source_size: usize,
    formatted: FormattedSizes,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormattedSizes {
    source: String,
    minified: String,
    base64: String,
    url_encoded: String,
}

impl FormattedSizes {
    fn new(source_size: usize, set: &DataUriSet) -> Self {
        Self {
            source: format_bytes(source_size as u64),
            minified: format_bytes(set.minified_size as u64),
            base64: format_bytes(set.base64_size as u64),
            url_encoded: format_bytes(set.url_encoded_size as u64),
        }
    }
}

/// Run the `uri` command.
pub fn run_uri(args: &UriArgs, config: &ToolConfig) -> Result<()> {
    let svg = read_svg_input(&args.input)?;
    let set = encode(&svg);
    debug!("uri"; "source {}", format_bytes(svg.len() as u64));

    if args.json {
        let report = UriReport {
            set: &set,
            source_size: svg.len(),
            formatted: FormattedSizes::new(svg.len(), &set),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let kinds: Vec<DataUriKind> = if args.all {
        DataUriKind::ALL.to_vec()
    } else {
        vec![args.kind.unwrap_or(config.uri.kind)]
    };

    for kind in &kinds {
        println!("{}", set.get(*kind));
    }
    for line in size_lines(&set, &kinds) {
        log!("uri"; "{line}");
    }
    Ok(())
}

/// One `kind: size` line per printed encoding.
fn size_lines(set: &DataUriSet, kinds: &[DataUriKind]) -> Vec<String> {
    kinds
        .iter()
        .map(|kind| format!("{:<8} {}", kind.label(), format_bytes(set.size(*kind) as u64)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_lines() {
        let set = encode("<svg/>");
        let lines = size_lines(&set, &[DataUriKind::Base64]);
        assert_eq!(lines, vec![format!("base64   {}", format_bytes(set.base64_size as u64))]);

        let lines = size_lines(&set, &DataUriKind::ALL);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("minified "));
        assert!(lines[2].starts_with("url "));
    }

    #[test]
    fn test_report_json_shape() {
        let svg = "<svg/>";
        let set = encode(svg);
        let report = UriReport {
            set: &set,
            source_size: svg.len(),
            formatted: FormattedSizes::new(svg.len(), &set),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sourceSize"], 6);
        assert_eq!(json["formatted"]["source"], "6.00 B");
        assert_eq!(json["urlEncoded"], set.url_encoded.as_str());
        assert!(json["formatted"]["urlEncoded"].is_string());
    }
}
