//! Formatting helpers for presenting readings and statistics.

/// Fixed-precision number formatting (display only; stats stay full f64).
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Glucose values render the way they were read: integers without a decimal
/// tail, fractional values as-is.
pub fn format_glucose(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Average column display, two decimal places.
pub fn format_average(value: f64) -> String {
    format_number(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_use_two_decimals() {
        assert_eq!(format_average(130.0), "130.00");
        assert_eq!(format_average(101.666_666), "101.67");
    }

    #[test]
    fn glucose_keeps_integer_readings_clean() {
        assert_eq!(format_glucose(140.0), "140");
        assert_eq!(format_glucose(5.5), "5.5");
    }
}
