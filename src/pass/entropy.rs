//! Entropy scoring and strength labels.

use std::fmt;

use super::charset::ClassSet;

/// Password entropy in bits: `length * log2(pool_size)`.
///
/// Models the password as one uniform draw from `pool_size ^ length`
/// outcomes. The guaranteed-character-per-class constraint makes the
/// real outcome space slightly smaller; the overstatement is kept so the
/// reported score matches the generation policy the meter describes.
pub fn entropy(length: usize, classes: ClassSet) -> f64 {
    let pool_size = classes.pool_size();
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Discrete strength band derived from entropy bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Fixed thresholds, strict `<`: a value exactly at a threshold
    /// belongs to the stronger band.
    pub fn from_bits(bits: f64) -> Self {
        if bits < 28.0 {
            Strength::VeryWeak
        } else if bits < 36.0 {
            Strength::Weak
        } else if bits < 60.0 {
            Strength::Medium
        } else if bits < 128.0 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
