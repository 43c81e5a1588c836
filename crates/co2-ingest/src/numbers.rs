//! Lenient numeric parsing for dataset cells.

/// Parses a cell as f64, returning None for empty, invalid, or non-finite values.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Parses a year cell. Accepts integral floats such as `2000.0`.
pub fn parse_year(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    let number = parse_f64(trimmed)?;
    if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return None;
    }
    Some(number as i32)
}
