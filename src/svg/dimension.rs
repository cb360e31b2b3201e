//! Intrinsic SVG size and export dimension arithmetic.
//!
//! Everything here degrades instead of failing: a document without a usable
//! root element or size attributes resolves to 100x100, and width/height
//! edits that make no sense are reported as `None` so the caller keeps its
//! previous state.

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use serde::Serialize;
use std::borrow::Cow;

use super::scale::{ExportScale, match_preset};

/// Fallback for any side that cannot be recovered.
pub const DEFAULT_SIDE: f64 = 100.0;

/// Pixel width and height, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE, DEFAULT_SIDE)
    }
}

/// Export dimensions together with the scale that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportSize {
    #[serde(flatten)]
    pub dimensions: Dimensions,
    pub scale: ExportScale,
}

impl ExportSize {
    /// Export size for a freshly loaded document.
    ///
    /// `Custom` has no factor of its own, so the dimensions come from the
    /// default preset while the scale stays `Custom`.
    pub fn initial(base: Dimensions, scale: ExportScale) -> Self {
        let factor = scale
            .factor()
            .or(ExportScale::DEFAULT.factor())
            .unwrap_or(1.0);
        Self {
            dimensions: apply_scale(base, factor),
            scale,
        }
    }
}

// ============================================================================
// Intrinsic size
// ============================================================================

/// Raw size attributes of the root `<svg>` element.
#[derive(Debug, Default)]
struct RootAttrs {
    width: Option<String>,
    height: Option<String>,
    view_box: Option<String>,
}

/// Resolve the rendered size of an SVG document from its root attributes.
///
/// Explicit `width`/`height` win when both are present; otherwise the last
/// two `viewBox` numbers are used. Each side that is still missing or
/// unparsable falls back to [`DEFAULT_SIDE`] on its own.
pub fn resolve_intrinsic_size(svg: &str) -> Dimensions {
    let Some(attrs) = find_root_attrs(svg) else {
        return Dimensions::default();
    };

    let RootAttrs {
        mut width,
        mut height,
        view_box,
    } = attrs;

    if !(is_present(width.as_deref()) && is_present(height.as_deref()))
        && let Some((vb_width, vb_height)) = view_box.as_deref().and_then(view_box_size)
    {
        width = Some(vb_width.to_string());
        height = Some(vb_height.to_string());
    }

    Dimensions::new(side_or_default(width.as_deref()), side_or_default(height.as_deref()))
}

/// Locate the first `svg` element in document order and collect its size attributes.
fn find_root_attrs(svg: &str) -> Option<RootAttrs> {
    let mut reader = Reader::from_str(svg);

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem) | Event::Empty(elem)) if elem.local_name().as_ref() == b"svg" => {
                return Some(collect_size_attrs(&elem));
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

fn collect_size_attrs(elem: &BytesStart<'_>) -> RootAttrs {
    let mut attrs = RootAttrs::default();

    for attr in elem.attributes().flatten() {
        let slot = match attr.key.local_name().as_ref() {
            b"width" => &mut attrs.width,
            b"height" => &mut attrs.height,
            b"viewBox" => &mut attrs.view_box,
            _ => continue,
        };
        // First occurrence wins, like a DOM attribute lookup
        if slot.is_none() {
            *slot = Some(attr_text(&attr.value).into_owned());
        }
    }

    attrs
}

/// Decode an attribute value, resolving entities when they are well-formed.
fn attr_text(raw: &[u8]) -> Cow<'_, str> {
    match String::from_utf8_lossy(raw) {
        Cow::Borrowed(text) => unescape(text).unwrap_or(Cow::Borrowed(text)),
        Cow::Owned(text) => match unescape(&text) {
            Ok(decoded) => Cow::Owned(decoded.into_owned()),
            Err(_) => Cow::Owned(text),
        },
    }
}

#[inline]
fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Width and height tokens of a four-token `viewBox`.
fn view_box_size(view_box: &str) -> Option<(&str, &str)> {
    match split_view_box(view_box).as_slice() {
        [_, _, width, height] => Some((*width, *height)),
        _ => None,
    }
}

/// Split a `viewBox` list into raw tokens.
///
/// A run of whitespace is one separator and every comma is its own separator.
/// Empty tokens are kept, so `"0, 0, 30, 40"` yields seven tokens and leading
/// or trailing whitespace adds an empty token.
fn split_view_box(view_box: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut chars = view_box.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == ',' {
            tokens.push(&view_box[start..i]);
            start = i + 1;
        } else if c.is_whitespace() {
            tokens.push(&view_box[start..i]);
            start = i + c.len_utf8();
            while let Some((j, next)) = chars.next_if(|&(_, n)| n.is_whitespace()) {
                start = j + next.len_utf8();
            }
        }
    }
    tokens.push(&view_box[start..]);

    tokens
}

fn side_or_default(value: Option<&str>) -> f64 {
    value
        .and_then(parse_length)
        // Zero and negative sides count as invalid too, unlike a bare float parse
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(DEFAULT_SIDE)
}

/// Parse the leading decimal number of a length value.
///
/// Trailing units are ignored (`"120px"` is 120, `"50%"` is 50). Returns
/// `None` when the value does not start with a number.
fn parse_length(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

// ============================================================================
// Export dimension edits
// ============================================================================

/// Scale both sides, rounding to whole pixels.
pub fn apply_scale(base: Dimensions, scale: f64) -> Dimensions {
    Dimensions::new((base.width * scale).round(), (base.height * scale).round())
}

/// Set the export width and derive the height from the base aspect ratio.
///
/// Returns `None` for non-positive or non-finite widths; the caller keeps
/// whatever it had before.
pub fn set_width_preserving_aspect(
    base: Dimensions,
    new_width: f64,
) -> Option<(Dimensions, ExportScale)> {
    if !is_valid_edit(new_width) {
        return None;
    }

    let height = (new_width / base.aspect_ratio()).round();
    let scale = match_preset(new_width / base.width);
    Some((Dimensions::new(new_width, height), scale))
}

/// Set the export height and derive the width from the base aspect ratio.
pub fn set_height_preserving_aspect(
    base: Dimensions,
    new_height: f64,
) -> Option<(Dimensions, ExportScale)> {
    if !is_valid_edit(new_height) {
        return None;
    }

    let width = (new_height * base.aspect_ratio()).round();
    let scale = match_preset(new_height / base.height);
    Some((Dimensions::new(width, new_height), scale))
}

#[inline]
fn is_valid_edit(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
