use std::path::{Path, PathBuf};

/// Convenience result type used across cubepano.
pub type PanoResult<T> = Result<T, PanoError>;

/// Top-level error taxonomy used by codec, path and render APIs.
#[derive(thiserror::Error, Debug)]
pub enum PanoError {
    /// Malformed binary or text file: bad tag, bad header, bad dimensions or payload length.
    #[error("format error: {0}")]
    Format(String),

    /// Unsupported pattern type, infeasible parameters or unsupported feature combination.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// File could not be opened, read, created or written.
    #[error("io error on '{}': {source}", path.display())]
    Io {
        /// Path of the file or directory involved.
        path: PathBuf,
        /// Underlying storage error.
        #[source]
        source: std::io::Error,
    },

    /// Errors when deserializing JSON configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The external renderer could not be spawned or exited unsuccessfully.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PanoError {
    /// Build a [`PanoError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`PanoError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`PanoError::Io`] value for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a [`PanoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`PanoError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

/// Create the parent directory of `path` if it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> PanoResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PanoError::io(parent, e))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
