use std::path::Path;

use crate::depth::plane::Plane;
use crate::depth::tagged;
use crate::foundation::error::PanoResult;

/// Dense optical flow, one `[u, v]` displacement in pixels per sample.
pub type FlowField = Plane<[f32; 2]>;

/// Read a Middlebury `.flo` optical flow file.
///
/// Shares the tag and dimension rules of [`crate::read_dpt`]; the payload holds interleaved
/// `u, v` pairs.
pub fn read_flo(path: impl AsRef<Path>) -> PanoResult<FlowField> {
    let path = path.as_ref();
    tagged::check_extension(path, "flo")?;
    let bytes = tagged::read_file(path)?;
    let (width, height, samples) = tagged::decode(path, &bytes, 2)?;
    let pairs = samples.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
    FlowField::new(width, height, pairs)
}

/// Write an optical flow field as `.flo`.
pub fn write_flo(flow: &FlowField, path: impl AsRef<Path>) -> PanoResult<()> {
    let path = path.as_ref();
    tagged::check_extension(path, "flo")?;
    let flat: Vec<f32> = flow.as_slice().iter().flatten().copied().collect();
    let bytes = tagged::encode(path, flow.width(), flow.height(), &flat)?;
    tagged::write_file(path, &bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/depth/flo.rs"]
mod tests;
