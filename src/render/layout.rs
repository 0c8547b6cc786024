//! File naming shared by the renderers, the stitcher and post-processing.

use std::path::{Path, PathBuf};

/// One face of a cubemap, in the order the renderer writes them (+x, -x, +y, -y, +z, -z).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// +x
    Right,
    /// -x
    Left,
    /// +y
    Up,
    /// -y
    Down,
    /// +z
    Front,
    /// -z
    Back,
}

impl CubeFace {
    /// All faces in renderer order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Right,
        CubeFace::Left,
        CubeFace::Up,
        CubeFace::Down,
        CubeFace::Front,
        CubeFace::Back,
    ];

    /// Single-letter abbreviation used in file names.
    pub fn abbr(self) -> &'static str {
        match self {
            Self::Right => "R",
            Self::Left => "L",
            Self::Up => "U",
            Self::Down => "D",
            Self::Front => "F",
            Self::Back => "B",
        }
    }
}

/// Direction of a rendered motion-vector field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowDirection {
    /// Frame `i` to `i + 1`.
    Forward,
    /// Frame `i` to `i - 1`.
    Backward,
}

impl FlowDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Per-frame files of a cubemap render folder.
#[derive(Clone, Copy, Debug)]
pub struct CubemapLayout<'a> {
    dir: &'a Path,
}

impl<'a> CubemapLayout<'a> {
    /// Layout rooted at `dir`.
    pub fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    /// RGB face image.
    pub fn rgb(&self, frame: usize, face: CubeFace) -> PathBuf {
        self.dir.join(format!("{frame:04}_{}_rgb.jpg", face.abbr()))
    }

    /// Depth face map.
    pub fn depth(&self, frame: usize, face: CubeFace) -> PathBuf {
        self.dir.join(format!("{frame:04}_{}_depth.dpt", face.abbr()))
    }

    /// Motion-vector face field.
    pub fn flow(&self, frame: usize, face: CubeFace, dir: FlowDirection) -> PathBuf {
        self.dir.join(format!(
            "{frame:04}_{}_motionvector_{}.flo",
            face.abbr(),
            dir.as_str()
        ))
    }
}

/// Per-frame files of a panorama output folder.
#[derive(Clone, Copy, Debug)]
pub struct PanoLayout<'a> {
    dir: &'a Path,
}

impl<'a> PanoLayout<'a> {
    /// Layout rooted at `dir`.
    pub fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    /// Root folder.
    pub fn dir(&self) -> &Path {
        self.dir
    }

    /// RGB panorama.
    pub fn rgb(&self, frame: usize) -> PathBuf {
        self.dir.join(format!("{frame:04}_rgb_pano.png"))
    }

    /// Depth panorama.
    pub fn depth(&self, frame: usize) -> PathBuf {
        self.dir.join(format!("{frame:04}_depth_pano.dpt"))
    }

    /// Colour-mapped depth panorama.
    pub fn depth_visual(&self, frame: usize) -> PathBuf {
        self.dir.join(format!("{frame:04}_depth_pano_visual.jpg"))
    }

    /// Unavailable-pixel mask.
    pub fn mask(&self, frame: usize) -> PathBuf {
        self.dir.join(format!("{frame:04}_mask_pano.png"))
    }

    /// Optical-flow panorama.
    pub fn flow(&self, frame: usize, dir: FlowDirection) -> PathBuf {
        self.dir
            .join(format!("{frame:04}_opticalflow_{}_pano.flo", dir.as_str()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
