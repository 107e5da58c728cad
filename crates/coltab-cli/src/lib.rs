//! CLI library components for coltab.

pub mod logging;
pub mod pipeline;
pub mod render;
