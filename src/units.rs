use std::fmt::Write as _;

/// Display unit for plan measurements. Plan coordinates are always inches;
/// this only affects formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Inches,
    FeetInches,
}

/// Formats a length in inches for dimension labels.
///
/// Inches mode rounds to the nearest inch (`36"`). Feet mode prints feet
/// and the remaining inches, omitting the inches part when it rounds to
/// zero (`3'`, `3' 2"`).
#[must_use]
pub fn format_length(inches: f64, unit: Unit) -> String {
    match unit {
        Unit::Inches => format!("{}\"", inches.round()),
        Unit::FeetInches => {
            let feet = (inches / 12.0).floor();
            let remaining = (inches % 12.0).round();
            let mut out = format!("{feet}'");
            if remaining != 0.0 {
                let _ = write!(out, " {remaining}\"");
            }
            out
        }
    }
}
