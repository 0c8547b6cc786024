//! Depth, disparity and optical-flow file codecs.

pub(crate) mod disparity;
pub(crate) mod dpt;
pub(crate) mod flo;
pub(crate) mod pfm;
pub(crate) mod plane;
pub(crate) mod tagged;
pub(crate) mod visual;
