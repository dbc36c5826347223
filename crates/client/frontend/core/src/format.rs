//! Text formatting shared by presentation layers.

/// Percentage rounded to one decimal place, e.g. `40.0%`.
pub fn percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Signed change indicator used in status messages.
pub fn delta(before: u32, after: u32) -> String {
    match after.cmp(&before) {
        std::cmp::Ordering::Greater => format!("+{}", after - before),
        std::cmp::Ordering::Less => format!("-{}", before - after),
        std::cmp::Ordering::Equal => "±0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(40.0), "40.0%");
        assert_eq!(percentage(66.666_666), "66.7%");
        assert_eq!(percentage(-12.34), "-12.3%");
        assert_eq!(percentage(0.0), "0.0%");
    }

    #[test]
    fn test_delta() {
        assert_eq!(delta(3, 4), "+1");
        assert_eq!(delta(4, 3), "-1");
        assert_eq!(delta(0, 0), "±0");
    }
}
