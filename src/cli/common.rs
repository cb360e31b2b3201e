//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use thiserror::Error;

use crate::svg::datauri::SVG_BASE64_PREFIX;

/// Errors while reading the SVG input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("failed to read SVG from stdin")]
    Stdin(#[source] io::Error),

    #[error("`{0}` is not an .svg file")]
    Extension(PathBuf),

    #[error("{0} does not contain an <svg> element")]
    NotSvg(String),

    #[error("stdin holds a base64 data URI that does not decode to UTF-8 text")]
    Base64,
}

/// Read SVG text from a path, or from stdin when the path is `-`.
///
/// File input must carry an `.svg` extension; any input must contain `<svg`.
/// Stdin may also hold a pasted base64 payload or data URI.
pub fn read_svg_input(input: &Path) -> Result<String, InputError> {
    if is_stdin(input) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(InputError::Stdin)?;
        return check_svg_text(decode_pasted(text)?, "stdin");
    }

    if !has_svg_extension(input) {
        return Err(InputError::Extension(input.to_path_buf()));
    }

    let text = fs::read_to_string(input).map_err(|err| InputError::Io(input.to_path_buf(), err))?;
    check_svg_text(text, &format!("`{}`", input.display()))
}

#[inline]
pub fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Decode a pasted base64 SVG, either a `data:image/svg+xml;base64,` URI or
/// a bare payload.
///
/// Text containing `<` is raw markup and passes through. A bare payload that
/// does not decode is returned unchanged so the `<svg` check reports it.
fn decode_pasted(text: String) -> Result<String, InputError> {
    let trimmed = text.trim();
    let (payload, is_data_uri) = match trimmed.strip_prefix(SVG_BASE64_PREFIX) {
        Some(payload) => (payload, true),
        None if trimmed.contains('<') => return Ok(text),
        None => (trimmed, false),
    };

    // Pasted payloads are often wrapped across lines
    let compact: String = payload.split_whitespace().collect();
    let decoded = BASE64_STANDARD
        .decode(compact)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok());

    match decoded {
        Some(svg) => Ok(svg),
        None if is_data_uri => Err(InputError::Base64),
        None => Ok(text),
    }
}

fn check_svg_text(text: String, source: &str) -> Result<String, InputError> {
    if text.contains("<svg") || text.contains(":svg") {
        Ok(text)
    } else {
        Err(InputError::NotSvg(source.to_string()))
    }
}
