//! SVG size resolution and data URI encoding.
//!
//! # Modules
//!
//! - [`dimension`]: intrinsic size from `width`/`height`/`viewBox`, export size edits
//! - [`scale`]: preset export scales
//! - [`datauri`]: minified, base64 and URL-encoded `data:` URIs
//!
//! # Flow
//!
//! ```text
//! SVG text
//!     │
//!     ├──► resolve_intrinsic_size ──► Dimensions ──► apply_scale / set_*_preserving_aspect
//!     │                                                      │
//!     │                                                      ▼
//!     │                                                  ExportSize
//!     │
//!     └──► encode ──► DataUriSet
//! ```
//!
//! All functions are pure; callers own whatever state they keep between calls.

pub mod datauri;
pub mod dimension;
pub mod scale;

pub use datauri::{DataUriKind, DataUriSet, encode};
pub use dimension::{
    Dimensions, ExportSize, resolve_intrinsic_size, set_height_preserving_aspect,
    set_width_preserving_aspect,
};
pub use scale::{ExportScale, PRESET_SCALES};
