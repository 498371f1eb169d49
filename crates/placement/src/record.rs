use glam::Vec3;
use grove_core::Degrees;
use serde::{Deserialize, Serialize};

/// Where and how one tree node is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Local X position.
    pub x: f32,
    /// Local Y position.
    pub y: f32,
    /// Local Z position.
    pub z: f32,
    /// Rotation about the local X axis, in degrees.
    pub pitch: f32,
    /// Rotation about the local Z axis, in degrees.
    pub roll: f32,
    /// Uniform scale applied on all three axes.
    pub scale: f32,
}

impl PlacementRecord {
    /// Build a record from literal values.
    pub const fn new(x: f32, y: f32, z: f32, pitch: f32, roll: f32, scale: f32) -> Self {
        Self {
            x,
            y,
            z,
            pitch,
            roll,
            scale,
        }
    }

    /// Local position vector.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Pitch angle.
    pub fn pitch(&self) -> Degrees {
        Degrees(self.pitch)
    }

    /// Roll angle.
    pub fn roll(&self) -> Degrees {
        Degrees(self.roll)
    }

    /// Scale vector with the same factor on every axis.
    pub fn scale_vector(&self) -> Vec3 {
        Vec3::splat(self.scale)
    }

    /// Name of the first non-finite field, if any.
    pub(crate) fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
            ("pitch", self.pitch),
            ("roll", self.roll),
            ("scale", self.scale),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
    }
}
