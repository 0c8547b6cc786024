use crate::foundation::error::{PanoError, PanoResult};

pub use glam::DVec3;

/// JSON-facing `{ "x": .., "y": .., "z": .. }` triple.
///
/// Configuration files spell positions (meters) and rotations (degrees) this way; runtime code
/// works on [`DVec3`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Xyz {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl From<Xyz> for DVec3 {
    fn from(v: Xyz) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Xyz {
    fn from(v: DVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Closed interval `[min, max]` used for per-axis sampling offsets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct AxisRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AxisRange {
    /// Create a range, rejecting `min > max` and non-finite bounds.
    pub fn new(min: f64, max: f64) -> PanoResult<Self> {
        let r = Self { min, max };
        r.validate()?;
        Ok(r)
    }

    /// Check that the bounds are finite and ordered.
    pub fn validate(self) -> PanoResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PanoError::configuration(format!(
                "axis range [{}, {}] must be finite",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(PanoError::configuration(format!(
                "axis range [{}, {}] has min > max",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Return `true` when `v` lies in `[min, max]`.
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }
}

impl From<[f64; 2]> for AxisRange {
    fn from(v: [f64; 2]) -> Self {
        Self {
            min: v[0],
            max: v[1],
        }
    }
}

impl From<AxisRange> for [f64; 2] {
    fn from(r: AxisRange) -> Self {
        [r.min, r.max]
    }
}

/// Output image size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Return `true` for the 2:1 aspect an equirectangular panorama requires.
    pub fn is_equirectangular(self) -> bool {
        self.height > 0 && self.width == self.height * 2
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
