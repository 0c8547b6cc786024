use std::path::Path;

use crate::depth::plane::DepthMap;
use crate::depth::tagged;
use crate::foundation::error::PanoResult;

/// Read a `.dpt` depth map.
///
/// Fails with [`crate::PanoError::Format`] when the extension is not `.dpt`, the tag is not
/// [`crate::TAG_FLOAT`], a dimension is outside `(0, 100000)`, or the payload is not exactly
/// `width * height` floats.
pub fn read_dpt(path: impl AsRef<Path>) -> PanoResult<DepthMap> {
    let path = path.as_ref();
    tagged::check_extension(path, "dpt")?;
    let bytes = tagged::read_file(path)?;
    let (width, height, samples) = tagged::decode(path, &bytes, 1)?;
    DepthMap::new(width, height, samples)
}

/// Write a depth map in the `.dpt` layout read by [`read_dpt`].
pub fn write_dpt(depth: &DepthMap, path: impl AsRef<Path>) -> PanoResult<()> {
    let path = path.as_ref();
    tagged::check_extension(path, "dpt")?;
    let bytes = tagged::encode(path, depth.width(), depth.height(), depth.as_slice())?;
    tagged::write_file(path, &bytes)?;
    tracing::debug!(path = %path.display(), width = depth.width(), height = depth.height(), "wrote dpt");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/depth/dpt.rs"]
mod tests;
