use crate::foundation::error::{PanoError, PanoResult};

/// Row-major `height x width` grid of samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Single-channel depth in meters. `0.0` marks pixels without a valid depth.
pub type DepthMap = Plane<f32>;

/// Disparity computed in double precision. `+inf` marks zero-depth pixels.
pub type DisparityMap = Plane<f64>;

impl<T> Plane<T> {
    /// Wrap `data` as a `height x width` grid.
    pub fn new(width: usize, height: usize, data: Vec<T>) -> PanoResult<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            PanoError::format(format!("plane size {width}x{height} overflows"))
        })?;
        if data.len() != expected {
            return Err(PanoError::format(format!(
                "plane {width}x{height} expects {expected} samples, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in samples.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in samples.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major sample storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the plane and return its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Sample at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.width.max(1))
    }

    /// Apply `f` to every sample.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Plane<U> {
        Plane {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Copy + PartialOrd> Plane<T> {
    /// Smallest and largest sample, ignoring values for which `keep` is false.
    pub fn min_max_by(&self, mut keep: impl FnMut(T) -> bool) -> Option<(T, T)> {
        let mut it = self.data.iter().copied().filter(|v| keep(*v));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| {
            (
                if v < lo { v } else { lo },
                if v > hi { v } else { hi },
            )
        }))
    }
}

/// Reverse row order in place on a row-major interleaved buffer.
pub(crate) fn flip_rows<T>(data: &mut [T], row_len: usize) {
    if row_len == 0 {
        return;
    }
    let rows = data.len() / row_len;
    for top in 0..rows / 2 {
        let bottom = rows - 1 - top;
        let (head, tail) = data.split_at_mut(bottom * row_len);
        head[top * row_len..(top + 1) * row_len].swap_with_slice(&mut tail[..row_len]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/depth/plane.rs"]
mod tests;
