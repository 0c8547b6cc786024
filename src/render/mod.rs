//! Renderer invocation, cubemap stitching and post-processing for whole datasets.

pub(crate) mod layout;
pub(crate) mod pipeline;
pub(crate) mod post;
pub(crate) mod renderer;
pub(crate) mod stitch;
