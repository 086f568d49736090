//! Human-readable rendering of large physical quantities.

/// Abbreviate a large number with a magnitude suffix.
///
/// `0` renders as `"0"`; values below one thousand are rounded to integers.
pub fn format_number(num: f64) -> String {
    if num == 0.0 {
        return "0".to_string();
    }
    if num >= 1e12 {
        return format!("{:.1} trillion", num / 1e12);
    }
    if num >= 1e9 {
        return format!("{:.1} billion", num / 1e9);
    }
    if num >= 1e6 {
        return format!("{:.1} million", num / 1e6);
    }
    if num >= 1e3 {
        return format!("{:.0} thousand", num / 1e3);
    }
    format!("{num:.0}")
}

/// Render a mass in kilograms, switching to units of 10^24 kg for planetary masses.
pub fn format_mass(mass: f64) -> String {
    if mass == 0.0 {
        return "0 kg".to_string();
    }
    if mass >= 1e24 {
        return format!("{:.2} ×10²⁴ kg", mass / 1e24);
    }
    format!("{mass:.0} kg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.4), "42");
        assert_eq!(format_number(6_779.0), "7 thousand");
        assert_eq!(format_number(2_500_000.0), "2.5 million");
        assert_eq!(format_number(1.2e9), "1.2 billion");
        assert_eq!(format_number(3.0e12), "3.0 trillion");
    }

    #[test]
    fn masses() {
        assert_eq!(format_mass(0.0), "0 kg");
        assert_eq!(format_mass(5.972e24), "5.97 ×10²⁴ kg");
        assert_eq!(format_mass(1500.0), "1500 kg");
    }
}
