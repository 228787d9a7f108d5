//! TUI widgets

pub mod axis;
pub mod color_scale;
pub mod heatmap;
pub mod help;
pub mod layout;
pub mod legend;
pub mod panel;
pub mod spinner;
pub mod tooltip;
