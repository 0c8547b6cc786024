//! Portable float map (`.pfm`) reader and writer.
//!
//! Header is three ASCII lines (`PF`/`Pf`, `"<w> <h>"`, signed scale) followed by raw `f32`
//! samples stored bottom row first. A negative scale means little-endian samples.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::depth::plane::{DepthMap, flip_rows};
use crate::foundation::error::{PanoError, PanoResult, ensure_parent_dir};

/// Channel layout of a PFM image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PfmChannels {
    /// `Pf`: one channel.
    Grey,
    /// `PF`: three interleaved channels.
    Color,
}

impl PfmChannels {
    /// Samples per pixel.
    pub fn count(self) -> usize {
        match self {
            Self::Grey => 1,
            Self::Color => 3,
        }
    }

    fn magic(self) -> &'static str {
        match self {
            Self::Grey => "Pf",
            Self::Color => "PF",
        }
    }
}

/// Decoded PFM payload, top row first, channels interleaved.
#[derive(Clone, Debug, PartialEq)]
pub struct PfmImage {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Grey or color.
    pub channels: PfmChannels,
    /// `height * width * channels` samples.
    pub data: Vec<f32>,
}

impl PfmImage {
    /// numpy-style shape: `[h, w]` for grey, `[h, w, 3]` for color.
    pub fn shape(&self) -> Vec<usize> {
        match self.channels {
            PfmChannels::Grey => vec![self.height, self.width],
            PfmChannels::Color => vec![self.height, self.width, 3],
        }
    }

    /// Convert a greyscale image into a [`DepthMap`].
    pub fn into_depth(self) -> PanoResult<DepthMap> {
        if self.channels != PfmChannels::Grey {
            return Err(PanoError::format(
                "3-channel PFM cannot be used as a depth map",
            ));
        }
        DepthMap::new(self.width, self.height, self.data)
    }
}

/// Read a PFM file, returning the image (top row first) and the unsigned scale.
pub fn read_pfm(path: impl AsRef<Path>) -> PanoResult<(PfmImage, f32)> {
    let path = path.as_ref();
    let f = std::fs::File::open(path).map_err(|e| PanoError::io(path, e))?;
    let mut r = BufReader::new(f);

    let magic = read_header_line(&mut r, path)?;
    let channels = match magic.trim_end() {
        "PF" => PfmChannels::Color,
        "Pf" => PfmChannels::Grey,
        other => {
            return Err(PanoError::format(format!(
                "'{}' is not a PFM file (header '{other}')",
                path.display()
            )));
        }
    };

    let dims = read_header_line(&mut r, path)?;
    let (width, height) = parse_dims(&dims).ok_or_else(|| {
        PanoError::format(format!(
            "'{}': malformed PFM header '{}'",
            path.display(),
            dims.escape_debug()
        ))
    })?;

    let scale_line = read_header_line(&mut r, path)?;
    let signed_scale: f32 = scale_line.trim().parse().map_err(|_| {
        PanoError::format(format!(
            "'{}': malformed PFM scale '{}'",
            path.display(),
            scale_line.trim()
        ))
    })?;
    let little_endian = signed_scale.is_sign_negative();
    let scale = signed_scale.abs();

    let (row_len, expected) = width
        .checked_mul(channels.count())
        .and_then(|row_len| Some((row_len, row_len.checked_mul(height)?.checked_mul(4)?)))
        .ok_or_else(|| {
            PanoError::format(format!(
                "'{}': PFM dimensions {width}x{height} are too large",
                path.display()
            ))
        })?;

    let mut payload = Vec::new();
    r.read_to_end(&mut payload)
        .map_err(|e| PanoError::io(path, e))?;
    if payload.len() != expected {
        return Err(PanoError::format(format!(
            "'{}': {width}x{height}x{} payload needs {expected} bytes, found {}",
            path.display(),
            channels.count(),
            payload.len()
        )));
    }

    let mut data: Vec<f32> = payload
        .chunks_exact(4)
        .map(|c| {
            let b = [c[0], c[1], c[2], c[3]];
            if little_endian {
                f32::from_le_bytes(b)
            } else {
                f32::from_be_bytes(b)
            }
        })
        .collect();
    flip_rows(&mut data, row_len);

    Ok((
        PfmImage {
            width,
            height,
            channels,
            data,
        },
        scale,
    ))
}

fn read_header_line(r: &mut impl BufRead, path: &Path) -> PanoResult<String> {
    let mut buf = Vec::new();
    let n = r
        .read_until(b'\n', &mut buf)
        .map_err(|e| PanoError::io(path, e))?;
    if n == 0 {
        return Err(PanoError::format(format!(
            "'{}': truncated PFM header",
            path.display()
        )));
    }
    String::from_utf8(buf).map_err(|_| {
        PanoError::format(format!("'{}': PFM header is not ASCII", path.display()))
    })
}

/// Strict `^(\d+)\s(\d+)\s$` match on the dimension line.
fn parse_dims(line: &str) -> Option<(usize, usize)> {
    let is_ws = |c: char| c.is_ascii_whitespace();
    let body = match line.strip_suffix('\n') {
        Some(t) => t.strip_suffix(is_ws).unwrap_or(t),
        None => line.strip_suffix(is_ws)?,
    };
    let (w, h) = body.split_once(is_ws)?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(w) || !all_digits(h) {
        return None;
    }
    Some((w.parse().ok()?, h.parse().ok()?))
}

/// Sample types accepted by [`write_pfm`].
///
/// Anything other than `f32` is cast, which may lose precision.
pub trait PfmSample: Copy {
    /// Name used in diagnostics.
    const DTYPE: &'static str;
    /// Whether the cast to `f32` is exact.
    const IS_F32: bool = false;
    /// Cast to `f32`.
    fn to_f32(self) -> f32;
}

impl PfmSample for f32 {
    const DTYPE: &'static str = "float32";
    const IS_F32: bool = true;
    fn to_f32(self) -> f32 {
        self
    }
}

impl PfmSample for f64 {
    const DTYPE: &'static str = "float64";
    fn to_f32(self) -> f32 {
        self as f32
    }
}

impl PfmSample for u16 {
    const DTYPE: &'static str = "uint16";
    fn to_f32(self) -> f32 {
        f32::from(self)
    }
}

impl PfmSample for u8 {
    const DTYPE: &'static str = "uint8";
    fn to_f32(self) -> f32 {
        f32::from(self)
    }
}

/// Write `data` with numpy-style `shape` (`[h, w]`, `[h, w, 1]` or `[h, w, 3]`) to `path`.
///
/// Non-`f32` samples are converted with a warning. An unsupported shape, a `data` length
/// that does not match it, or a scale that is not a positive finite number fails before the
/// file is created. The sign of the stored scale carries the byte order.
pub fn write_pfm<T: PfmSample>(
    path: impl AsRef<Path>,
    shape: &[usize],
    data: &[T],
    scale: f32,
) -> PanoResult<()> {
    let path = path.as_ref();
    let (height, width, channels) = match *shape {
        [h, w] | [h, w, 1] => (h, w, PfmChannels::Grey),
        [h, w, 3] => (h, w, PfmChannels::Color),
        _ => {
            return Err(PanoError::format(format!(
                "'{}': image must have H x W x 3, H x W x 1 or H x W dimensions, got {shape:?}",
                path.display()
            )));
        }
    };
    let row_len = width.saturating_mul(channels.count());
    let needed = row_len.saturating_mul(height);
    if data.len() != needed {
        return Err(PanoError::format(format!(
            "'{}': shape {shape:?} needs {needed} samples, got {}",
            path.display(),
            data.len()
        )));
    }
    if !(scale.is_finite() && scale > 0.0) {
        return Err(PanoError::format(format!(
            "'{}': PFM scale must be a positive finite number, got {scale}",
            path.display()
        )));
    }

    if !T::IS_F32 {
        tracing::warn!(
            path = %path.display(),
            dtype = T::DTYPE,
            "depth data is not float32, converting before writing pfm"
        );
    }
    let mut samples: Vec<f32> = data.iter().map(|v| v.to_f32()).collect();
    flip_rows(&mut samples, row_len);

    let sign = if cfg!(target_endian = "little") {
        "-"
    } else {
        ""
    };

    let mut bytes = Vec::with_capacity(32 + samples.len() * 4);
    bytes.extend_from_slice(format!("{}\n", channels.magic()).as_bytes());
    bytes.extend_from_slice(format!("{width} {height}\n").as_bytes());
    bytes.extend_from_slice(format!("{sign}{scale:?}\n").as_bytes());
    for s in samples {
        bytes.extend_from_slice(&s.to_ne_bytes());
    }

    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).map_err(|e| PanoError::io(path, e))
}

/// Write a depth map as a greyscale PFM.
pub fn write_pfm_depth(depth: &DepthMap, path: impl AsRef<Path>, scale: f32) -> PanoResult<()> {
    write_pfm(
        path,
        &[depth.height(), depth.width()],
        depth.as_slice(),
        scale,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/depth/pfm.rs"]
mod tests;
