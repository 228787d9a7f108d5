//! Services for loading, binning and configuration

pub mod binner;
pub mod loader;
pub mod logging;
pub mod settings;

pub use binner::{BinnedRhythm, RhythmBinner};
pub use loader::ProfileSource;
pub use settings::{Settings, ThemeChoice};
