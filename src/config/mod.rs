//! JSON configuration records.

pub(crate) mod env;
pub(crate) mod scene;
