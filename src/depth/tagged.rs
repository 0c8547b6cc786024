//! Shared layout of the tagged little-endian binary formats (`.dpt` depth, `.flo` flow).
//!
//! ```text
//! offset 0   tag     f32  202021.25 ("PIEH")
//! offset 4   width   i32  0 < w < 100000
//! offset 8   height  i32  0 < h < 100000
//! offset 12  payload w*h*channels f32, row-major
//! ```

use std::path::Path;

use crate::foundation::error::{PanoError, PanoResult};

/// Sanity tag stored at the start of `.dpt` and `.flo` files.
pub const TAG_FLOAT: f32 = 202021.25;

/// Exclusive upper bound accepted for width and height.
pub const MAX_DIM: i32 = 100_000;

pub(crate) const HEADER_LEN: usize = 12;

pub(crate) fn check_extension(path: &Path, ext: &str) -> PanoResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(e) if e == ext => Ok(()),
        Some(e) => Err(PanoError::format(format!(
            "'{}' should have extension '.{ext}', found '.{e}'",
            path.display()
        ))),
        None => Err(PanoError::format(format!(
            "extension '.{ext}' required in '{}'",
            path.display()
        ))),
    }
}

fn check_dim(path: &Path, name: &str, v: i32) -> PanoResult<usize> {
    if v <= 0 || v >= MAX_DIM {
        return Err(PanoError::format(format!(
            "'{}': illegal {name} {v}",
            path.display()
        )));
    }
    Ok(v as usize)
}

/// Parse a whole tagged file into `(width, height, samples)`.
pub(crate) fn decode(path: &Path, bytes: &[u8], channels: usize) -> PanoResult<(usize, usize, Vec<f32>)> {
    if bytes.len() < HEADER_LEN {
        return Err(PanoError::format(format!(
            "'{}': file is {} bytes, shorter than the {HEADER_LEN}-byte header",
            path.display(),
            bytes.len()
        )));
    }
    let word = |i: usize| [bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]];

    let tag = f32::from_le_bytes(word(0));
    if tag != TAG_FLOAT {
        return Err(PanoError::format(format!(
            "'{}': wrong tag {tag} (possibly due to big-endian machine?)",
            path.display()
        )));
    }
    let width = check_dim(path, "width", i32::from_le_bytes(word(4)))?;
    let height = check_dim(path, "height", i32::from_le_bytes(word(8)))?;

    let payload = &bytes[HEADER_LEN..];
    let expected = width * height * channels * 4;
    if payload.len() != expected {
        return Err(PanoError::format(format!(
            "'{}': {width}x{height}x{channels} payload needs {expected} bytes, found {}",
            path.display(),
            payload.len()
        )));
    }

    let samples = payload
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    Ok((width, height, samples))
}

/// Serialize header and samples into a byte buffer.
pub(crate) fn encode(path: &Path, width: usize, height: usize, samples: &[f32]) -> PanoResult<Vec<u8>> {
    let w = i32::try_from(width).unwrap_or(i32::MAX);
    let h = i32::try_from(height).unwrap_or(i32::MAX);
    check_dim(path, "width", w)?;
    check_dim(path, "height", h)?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + samples.len() * 4);
    bytes.extend_from_slice(&TAG_FLOAT.to_le_bytes());
    bytes.extend_from_slice(&w.to_le_bytes());
    bytes.extend_from_slice(&h.to_le_bytes());
    for &s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    Ok(bytes)
}

pub(crate) fn read_file(path: &Path) -> PanoResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| PanoError::io(path, e))
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> PanoResult<()> {
    crate::foundation::error::ensure_parent_dir(path)?;
    std::fs::write(path, bytes).map_err(|e| PanoError::io(path, e))
}
