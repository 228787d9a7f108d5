//! rhythmview: terminal heatmap of a user's weekly review rhythm

pub mod cli;
pub mod services;
pub mod tui;
pub mod types;
