const INCHES_PER_MM: f32 = 0.0393701;

/// Converts a length in millimeters to inches.
///
/// No rounding is applied here; display rounding belongs at the reporting
/// boundary, applied once.
pub fn millimeters_to_inches(mm: f32) -> f32 {
    mm * INCHES_PER_MM
}

/// Units a [`Length`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Millimeters,
    Inches,
}

/// A scalar length tagged with its unit, never a bare number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    value: f32,
    unit: Unit,
}

impl Length {
    pub fn millimeters(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Millimeters,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// This length expressed in inches.
    pub fn to_inches(self) -> Self {
        match self.unit {
            Unit::Inches => self,
            Unit::Millimeters => Self {
                value: millimeters_to_inches(self.value),
                unit: Unit::Inches,
            },
        }
    }
}
