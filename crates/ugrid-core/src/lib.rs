// ABOUTME: Shared types and configuration for uniform-grid.
// ABOUTME: Defines colors, the cell palette cycle, and config file handling.

pub mod color;
pub mod config;

pub use color::{Color, PaletteCycle};
pub use config::{Config, ConfigError, PlacementSettings, SampleKind, SampleSettings};
