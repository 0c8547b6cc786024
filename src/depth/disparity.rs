use crate::depth::plane::{DisparityMap, Plane};

/// Convert depth to disparity: `baseline * focal / depth`, `+inf` where depth is exactly zero.
///
/// Works in `f64` regardless of the input precision so small non-zero depths do not overflow.
pub fn depth_to_disparity<T>(depth: &Plane<T>, baseline: f64, focal: f64) -> DisparityMap
where
    T: Copy + Into<f64>,
{
    reciprocal_scaled(depth, baseline * focal)
}

/// Convert disparity back to depth. Same rule as [`depth_to_disparity`].
pub fn disparity_to_depth<T>(disparity: &Plane<T>, baseline: f64, focal: f64) -> Plane<f64>
where
    T: Copy + Into<f64>,
{
    reciprocal_scaled(disparity, baseline * focal)
}

fn reciprocal_scaled<T>(input: &Plane<T>, numerator: f64) -> Plane<f64>
where
    T: Copy + Into<f64>,
{
    input.map(|&v| {
        let v: f64 = v.into();
        if v == 0.0 { f64::INFINITY } else { numerator / v }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/depth/disparity.rs"]
mod tests;
