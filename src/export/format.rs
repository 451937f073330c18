//! Number formatting for path data.

/// Largest number of fractional digits ever written. Anything past this is
/// below f64 resolution for coordinates of magnitude one and up.
pub const MAX_PRECISION: usize = 17;

/// Render `value` with at most `precision` fractional digits, capped at
/// [`MAX_PRECISION`]. Trailing zeros and a bare decimal point are stripped
/// and negative zero prints as `0`. With `compact`, the leading zero of a
/// magnitude below one is dropped (`0.5` → `.5`, `-0.25` → `-.25`), which
/// every SVG path parser accepts.
pub fn format_number(value: f64, precision: usize, compact: bool) -> String {
    let mut text = format!("{:.*}", precision.min(MAX_PRECISION), value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = String::from("0");
    }
    if compact {
        if let Some(rest) = text.strip_prefix("0.") {
            text = format!(".{}", rest);
        } else if let Some(rest) = text.strip_prefix("-0.") {
            text = format!("-.{}", rest);
        }
    }
    text
}
