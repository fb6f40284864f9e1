//! Heat map layout: configuration and the pure composer turning it into geometry.

pub(crate) mod composer;
pub(crate) mod config;
