//! Finite numeric values

use std::fmt;

/// A finite `f64`: never NaN, never infinite.
///
/// Both operator inputs and successful results use this type, so a
/// non-finite number can only ever travel through the crate as an error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Operand(f64);

impl Operand {
    /// Wrap `value` if it is finite
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Operand(value))
    }

    /// The wrapped value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Operand> for f64 {
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

impl TryFrom<f64> for Operand {
    type Error = f64;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Operand::new(value).ok_or(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
