//! Human-readable byte sizes.

const UNITS: [&str; 3] = ["B", "KB", "MB"];
const STEP: u64 = 1024;

/// Format a byte count with two decimals and a binary unit.
///
/// # Examples
///
/// - `format_bytes(0)` -> `"0 B"`
/// - `format_bytes(512)` -> `"512.00 B"`
/// - `format_bytes(1536)` -> `"1.50 KB"`
/// - `format_bytes(1048576)` -> `"1.00 MB"`
///
/// Values of a gigabyte and up stay in MB.
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut index = 0;
    let mut divisor = 1u64;
    while index + 1 < UNITS.len() && bytes >= divisor * STEP {
        divisor *= STEP;
        index += 1;
    }

    // Round half away from zero before formatting; `{:.2}` alone rounds ties to even
    let value = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;
    format!("{value:.2} {}", UNITS[index])
}
