//! Number formatting shared by the KPI summary and chart labels.

/// Placeholder for values that cannot be shown.
pub const UNAVAILABLE: &str = "—";

/// Round to the nearest integer and group thousands with commas.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return UNAVAILABLE.to_string();
    }
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Emissions in megatonnes, e.g. `1,234 Mt`.
pub fn format_mt(value: f64) -> String {
    format!("{} Mt", group_thousands(value))
}

/// Percentage with one decimal and an explicit sign for non-negative values.
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Percentage with one decimal, or the placeholder when unavailable.
pub fn format_share(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.1}%"),
        None => UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0.4), "0");
        assert_eq!(group_thousands(999.5), "1,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-12345.0), "-12,345");
        assert_eq!(group_thousands(f64::NAN), UNAVAILABLE);
    }

    #[test]
    fn formats_percentages() {
        assert_eq!(format_signed_percent(10.0), "+10.0%");
        assert_eq!(format_signed_percent(-10.0), "-10.0%");
        assert_eq!(format_signed_percent(0.0), "+0.0%");
        assert_eq!(format_share(Some(33.333)), "33.3%");
        assert_eq!(format_share(None), "—");
    }

    #[test]
    fn formats_megatonnes() {
        assert_eq!(format_mt(36_153.26), "36,153 Mt");
    }
}
