//! CLI library components for the UOM audit.

pub mod logging;
pub mod pipeline;
