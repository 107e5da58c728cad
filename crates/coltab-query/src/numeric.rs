/// Parses a cell as a number, returning None for empty or invalid cells.
///
/// Trailing `*` markers are ignored; fixed-width reports use them to flag
/// extreme values (`32*`).
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim().trim_end_matches('*');
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
