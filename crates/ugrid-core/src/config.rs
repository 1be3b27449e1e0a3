// ABOUTME: Application configuration handling.
// ABOUTME: Loads sample settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Color, PaletteCycle};

/// Initial window size in logical pixels
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 480;

/// Which of the bundled grid samples is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    /// Square grid inside a stack with fixed margins
    InsetMargin,
    /// Square grid inside one cell of a percentage host grid
    HostCell,
    /// Host-cell placement plus padding that scales with the grid
    #[default]
    TieredPadding,
}

impl SampleKind {
    pub fn all() -> &'static [SampleKind] {
        &[
            SampleKind::InsetMargin,
            SampleKind::HostCell,
            SampleKind::TieredPadding,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SampleKind::InsetMargin => "Inset margin",
            SampleKind::HostCell => "Host cell",
            SampleKind::TieredPadding => "Tiered padding",
        }
    }

    pub fn next(&self) -> SampleKind {
        let all = SampleKind::all();
        let idx = all.iter().position(|k| k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Where the square grid sits inside the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementSettings {
    /// Same margin on every side of the grid
    Inset { margin: f64 },
    /// Percentage columns/rows; the grid fills cell (`column`, `row`)
    HostCell {
        columns: Vec<f64>,
        rows: Vec<f64>,
        column: usize,
        row: usize,
    },
}

impl PlacementSettings {
    /// 10% / 80% / 10% in both directions, grid in the middle cell
    pub fn centered_host_cell() -> Self {
        PlacementSettings::HostCell {
            columns: vec![10.0, 80.0, 10.0],
            rows: vec![10.0, 80.0, 10.0],
            column: 1,
            row: 1,
        }
    }
}

/// Everything needed to build one responsive grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSettings {
    /// Number of columns and rows
    pub arity: u32,
    pub placement: PlacementSettings,
    /// Cell padding used until a padding tier applies
    pub cell_padding: f64,
    pub corner_radius: f64,
    pub grid_lines: bool,
    pub palette: PaletteCycle,
    pub cell_alpha: f32,
    /// (exclusive threshold, padding) pairs matched against the grid width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_tiers: Option<Vec<[f64; 2]>>,
    /// (exclusive threshold, padding) pairs matched against the grid height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_tiers: Option<Vec<[f64; 2]>>,
}

impl SampleSettings {
    pub fn inset_margin() -> Self {
        Self {
            arity: 9,
            placement: PlacementSettings::Inset { margin: 100.0 },
            cell_padding: 10.0,
            corner_radius: 20.0,
            grid_lines: true,
            palette: PaletteCycle::wide(),
            cell_alpha: 0.9,
            horizontal_tiers: None,
            vertical_tiers: None,
        }
    }

    pub fn host_cell() -> Self {
        Self {
            arity: 4,
            placement: PlacementSettings::centered_host_cell(),
            cell_padding: 10.0,
            corner_radius: 50.0,
            grid_lines: false,
            palette: PaletteCycle::fine(),
            cell_alpha: 0.9,
            horizontal_tiers: None,
            vertical_tiers: None,
        }
    }

    pub fn tiered_padding() -> Self {
        Self {
            cell_padding: 50.0,
            horizontal_tiers: Some(reference_tiers()),
            vertical_tiers: Some(reference_tiers()),
            ..Self::host_cell()
        }
    }

    pub fn preset(kind: SampleKind) -> Self {
        match kind {
            SampleKind::InsetMargin => Self::inset_margin(),
            SampleKind::HostCell => Self::host_cell(),
            SampleKind::TieredPadding => Self::tiered_padding(),
        }
    }
}

/// Padding steps: above 50 -> 1, above 100 -> 5, ... above 850 -> 50
pub fn reference_tiers() -> Vec<[f64; 2]> {
    vec![
        [50.0, 1.0],
        [100.0, 5.0],
        [200.0, 10.0],
        [300.0, 15.0],
        [850.0, 50.0],
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sample shown at startup
    pub sample: SampleKind,

    /// Window clear color
    pub background: Color,

    pub inset_margin: SampleSettings,
    pub host_cell: SampleSettings,
    pub tiered_padding: SampleSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample: SampleKind::default(),
            background: Color::default(),
            inset_margin: SampleSettings::inset_margin(),
            host_cell: SampleSettings::host_cell(),
            tiered_padding: SampleSettings::tiered_padding(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl Config {
    pub fn settings(&self, kind: SampleKind) -> &SampleSettings {
        match kind {
            SampleKind::InsetMargin => &self.inset_margin,
            SampleKind::HostCell => &self.host_cell,
            SampleKind::TieredPadding => &self.tiered_padding,
        }
    }

    /// Get the default config file path (~/.config/uniform-grid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("uniform-grid").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
