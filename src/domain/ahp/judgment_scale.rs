//! Judgment Scale - The 17-point reciprocal ratio scale (1/9 … 1 … 9).

/// Every value a pairwise judgment may take on the standard scale, ascending.
pub const SCALE_VALUES: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

const SCALE_TOLERANCE: f64 = 1e-9;

/// Labels and formatting for values on the ratio scale.
pub struct JudgmentScale;

impl JudgmentScale {
    /// Returns true if the value is one of the 17 scale points.
    pub fn contains(value: f64) -> bool {
        Self::intensity(value).is_some()
    }

    /// Returns the label for a scale value.
    ///
    /// Values below 1 describe their inverse with a `" (reverse)"` suffix.
    /// Off-scale values return an empty string.
    pub fn describe(value: f64) -> String {
        match Self::intensity(value) {
            Some(k) if value < 1.0 => format!("{} (reverse)", Self::label(k)),
            Some(k) => Self::label(k).to_string(),
            None => String::new(),
        }
    }

    /// Formats a value as shown in a comparison selector: `"1"`, `"5"`, `"1/5"`.
    pub fn format(value: f64) -> String {
        if (value - 1.0).abs() < SCALE_TOLERANCE {
            "1".to_string()
        } else if value < 1.0 {
            format!("1/{}", (1.0 / value).round())
        } else if (value - value.round()).abs() < SCALE_TOLERANCE {
            format!("{}", value.round())
        } else {
            format!("{}", value)
        }
    }

    /// Integer intensity 1..=9 of a scale value, regardless of direction.
    fn intensity(value: f64) -> Option<u8> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let magnitude = if value < 1.0 { 1.0 / value } else { value };
        let rounded = magnitude.round();
        if (magnitude - rounded).abs() < SCALE_TOLERANCE && (1.0..=9.0).contains(&rounded) {
            Some(rounded as u8)
        } else {
            None
        }
    }

    fn label(intensity: u8) -> &'static str {
        match intensity {
            1 => "Equal importance",
            2 => "Weak importance",
            3 | 4 => "Moderate importance",
            5 | 6 => "Strong importance",
            7 | 8 => "Very strong importance",
            _ => "Extreme importance",
        }
    }
}
