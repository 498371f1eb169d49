//! Angle values.
//!
//! Placement data is authored in degrees while `glam` rotations take radians.
//! Wrapping the authored value keeps the unit visible at every call site.

use serde::{Deserialize, Serialize};

/// An angle expressed in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Zero rotation.
    pub const ZERO: Self = Self(0.0);

    /// Create an angle from a degree value.
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Convert to radians for `glam` rotation constructors.
    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }
}
