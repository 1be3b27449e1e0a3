// ABOUTME: Color representation and the cell fill palette.
// ABOUTME: PaletteCycle produces a bounded oscillating seed per grid cell.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels, saturating anything above 255
    pub fn from_rgb8(r: u32, g: u32, b: u32, a: f32) -> Self {
        let channel = |v: u32| v.min(255) as f32 / 255.0;
        Self::rgba(channel(r), channel(g), channel(b), a)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Near-black window background
    pub const BACKGROUND: Self = Self::rgb(0.02, 0.02, 0.02);

    /// Grid line color for samples that draw cell borders
    pub const GRID_LINE: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

/// Deterministic color seed sequence used to tell neighbouring cells apart.
///
/// Starts at `base` and climbs by `step`. Once a produced value reaches
/// `ceiling`, the following value drops back to `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteCycle {
    pub base: u32,
    pub step: u32,
    pub ceiling: u32,
}

impl PaletteCycle {
    pub const fn new(base: u32, step: u32, ceiling: u32) -> Self {
        Self {
            base,
            step,
            ceiling,
        }
    }

    /// Cycle used by the inset-margin sample
    pub const fn wide() -> Self {
        Self::new(10, 15, 115)
    }

    /// Cycle used by the host-cell samples
    pub const fn fine() -> Self {
        Self::new(10, 10, 135)
    }

    /// Number of distinct values before the sequence repeats
    pub fn period(&self) -> u32 {
        if self.step == 0 {
            return 1;
        }
        let climb = self.ceiling.saturating_sub(self.base);
        climb.div_ceil(self.step).saturating_add(1)
    }

    /// Seed for the cell at `index` in fill order
    pub fn seed_at(&self, index: usize) -> u32 {
        if self.step == 0 {
            return self.base;
        }
        let offset = (index as u64 % self.period() as u64) as u32;
        self.base.saturating_add(offset.saturating_mul(self.step))
    }

    pub fn iter(&self) -> PaletteIter {
        PaletteIter {
            cycle: *self,
            current: self.base,
        }
    }

    /// Map a seed to the purple-blue cell fill
    pub fn cell_color(seed: u32, alpha: f32) -> Color {
        Color::from_rgb8(
            seed.saturating_add(40),
            (seed / 2).saturating_add(10),
            (seed / 3).saturating_add(120),
            alpha,
        )
    }
}

impl Default for PaletteCycle {
    fn default() -> Self {
        Self::fine()
    }
}

pub struct PaletteIter {
    cycle: PaletteCycle,
    current: u32,
}

impl Iterator for PaletteIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let value = self.current;
        self.current = if value >= self.cycle.ceiling {
            self.cycle.base
        } else {
            value.saturating_add(self.cycle.step)
        };
        Some(value)
    }
}
