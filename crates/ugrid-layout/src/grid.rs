// ABOUTME: Uniform N x N grid geometry and the responsive grid engine.
// ABOUTME: Recomputes square size and cell padding from each container size sample.

use std::num::NonZeroU32;

use ugrid_core::{PlacementSettings, SampleSettings};

use crate::geometry::{ContainerSize, Insets, Rect};
use crate::padding::{PaddingTiers, TierError};
use crate::placement::{HostGrid, Placement};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Grid arity must be at least 1")]
    ZeroArity,

    #[error("Grid arity {arity} exceeds the maximum of {max}")]
    ArityTooLarge { arity: u32, max: u32 },

    #[error("Host grid needs at least one column and one row")]
    EmptyHostGrid,

    #[error("Invalid host grid percentage: {0}")]
    InvalidPercent(f64),

    #[error("Invalid padding tiers: {0}")]
    Tiers(#[from] TierError),
}

/// Percentage of the grid each row and each column takes
pub fn cell_fraction(arity: NonZeroU32) -> f64 {
    100.0 / arity.get() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    arity: NonZeroU32,
}

impl GridSpec {
    /// Largest supported number of columns and rows
    pub const MAX_ARITY: u32 = 256;

    pub fn new(arity: u32) -> Result<Self, LayoutError> {
        if arity > Self::MAX_ARITY {
            return Err(LayoutError::ArityTooLarge {
                arity,
                max: Self::MAX_ARITY,
            });
        }
        NonZeroU32::new(arity)
            .map(|arity| Self { arity })
            .ok_or(LayoutError::ZeroArity)
    }

    pub fn arity(&self) -> u32 {
        self.arity.get()
    }

    pub fn cell_fraction(&self) -> f64 {
        cell_fraction(self.arity)
    }

    /// Percent constraints for every column (rows are identical)
    pub fn fractions(&self) -> Vec<f64> {
        vec![self.cell_fraction(); self.arity() as usize]
    }

    pub fn cell_count(&self) -> usize {
        let n = self.arity() as usize;
        n * n
    }
}

/// One grid cell: its full slot and the padded area that gets filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub column: u32,
    pub row: u32,
    pub outer: Rect,
    pub inner: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedLayout {
    pub square_side: f64,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
}

impl ComputedLayout {
    pub fn padding(&self) -> Insets {
        Insets::symmetric(self.vertical_padding, self.horizontal_padding)
    }

    /// Cells in column-major order, starting at the square's top-left corner
    pub fn cells(&self, spec: &GridSpec, origin: (f64, f64)) -> Vec<CellGeometry> {
        let n = spec.arity();
        let cell = self.square_side * spec.cell_fraction() / 100.0;
        let padding = self.padding();
        let mut out = Vec::with_capacity(spec.cell_count());
        for column in 0..n {
            for row in 0..n {
                let outer = Rect::new(
                    origin.0 + column as f64 * cell,
                    origin.1 + row as f64 * cell,
                    cell,
                    cell,
                );
                out.push(CellGeometry {
                    column,
                    row,
                    outer,
                    inner: outer.inset(&padding),
                });
            }
        }
        out
    }

    /// Cell border segments as (x0, y0, x1, y1)
    pub fn grid_lines(&self, spec: &GridSpec, origin: (f64, f64)) -> Vec<(f64, f64, f64, f64)> {
        let n = spec.arity();
        let cell = self.square_side * spec.cell_fraction() / 100.0;
        let (x, y) = origin;
        let side = self.square_side;
        let mut lines = Vec::with_capacity(2 * (n as usize + 1));
        for i in 0..=n {
            let offset = i as f64 * cell;
            lines.push((x + offset, y, x + offset, y + side));
            lines.push((x, y + offset, x + side, y + offset));
        }
        lines
    }
}

/// Square grid that follows its container.
///
/// Configuration is fixed at construction; only the last computed layout
/// changes, and it is overwritten on every accepted resize.
#[derive(Debug, Clone)]
pub struct ResponsiveGrid {
    spec: GridSpec,
    placement: Placement,
    default_padding: f64,
    horizontal_tiers: Option<PaddingTiers>,
    vertical_tiers: Option<PaddingTiers>,
    container: Option<ContainerSize>,
    current: Option<ComputedLayout>,
}

impl ResponsiveGrid {
    pub fn new(spec: GridSpec, placement: Placement, cell_padding: f64) -> Self {
        Self {
            spec,
            placement,
            default_padding: cell_padding,
            horizontal_tiers: None,
            vertical_tiers: None,
            container: None,
            current: None,
        }
    }

    pub fn with_padding_tiers(
        mut self,
        horizontal: Option<PaddingTiers>,
        vertical: Option<PaddingTiers>,
    ) -> Self {
        self.horizontal_tiers = horizontal;
        self.vertical_tiers = vertical;
        self
    }

    pub fn from_settings(settings: &SampleSettings) -> Result<Self, LayoutError> {
        let spec = GridSpec::new(settings.arity)?;
        let placement = match &settings.placement {
            PlacementSettings::Inset { margin } => Placement::Inset(Insets::uniform(*margin)),
            PlacementSettings::HostCell {
                columns,
                rows,
                column,
                row,
            } => Placement::HostCell {
                grid: HostGrid::new(columns.clone(), rows.clone())?,
                column: *column,
                row: *row,
            },
        };
        let horizontal = settings
            .horizontal_tiers
            .as_deref()
            .map(PaddingTiers::from_pairs)
            .transpose()?;
        let vertical = settings
            .vertical_tiers
            .as_deref()
            .map(PaddingTiers::from_pairs)
            .transpose()?;

        Ok(Self::new(spec, placement, settings.cell_padding).with_padding_tiers(horizontal, vertical))
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn layout(&self) -> Option<&ComputedLayout> {
        self.current.as_ref()
    }

    /// Recompute for a new container size.
    ///
    /// Returns None and keeps the previous layout when the container has a
    /// zero dimension or the grid's host cell cannot be found.
    pub fn resize(&mut self, size: ContainerSize) -> Option<ComputedLayout> {
        if !size.is_laid_out() {
            tracing::trace!("Skipping layout for unsized container {:?}", size);
            return None;
        }
        let Some(side) = self.placement.square_side(size) else {
            tracing::trace!("Grid position not found in host grid, skipping layout");
            return None;
        };

        let (horizontal_padding, vertical_padding) = self.padding_for(side);
        let layout = ComputedLayout {
            square_side: side,
            horizontal_padding,
            vertical_padding,
        };
        self.container = Some(size);
        self.current = Some(layout);
        Some(layout)
    }

    /// Tiered padding for a square of `side`, falling back to the padding
    /// already in effect when any configured table has no matching band
    fn padding_for(&self, side: f64) -> (f64, f64) {
        let previous = self
            .current
            .map(|l| (l.horizontal_padding, l.vertical_padding))
            .unwrap_or((self.default_padding, self.default_padding));

        let lookup = || -> Option<(f64, f64)> {
            let horizontal = match &self.horizontal_tiers {
                Some(tiers) => tiers.lookup(side)?,
                None => previous.0,
            };
            let vertical = match &self.vertical_tiers {
                Some(tiers) => tiers.lookup(side)?,
                None => previous.1,
            };
            Some((horizontal, vertical))
        };
        lookup().unwrap_or(previous)
    }

    /// Bounds of the square, centered in its placement area
    pub fn square_rect(&self) -> Option<Rect> {
        let container = self.container?;
        let layout = self.current?;
        let area = self.placement.area(container)?;
        Some(area.centered_square(layout.square_side))
    }

    /// Cell geometry for the last accepted layout
    pub fn cells(&self) -> Vec<CellGeometry> {
        match (self.current, self.square_rect()) {
            (Some(layout), Some(square)) => layout.cells(&self.spec, (square.x, square.y)),
            _ => Vec::new(),
        }
    }

    pub fn grid_lines(&self) -> Vec<(f64, f64, f64, f64)> {
        match (self.current, self.square_rect()) {
            (Some(layout), Some(square)) => layout.grid_lines(&self.spec, (square.x, square.y)),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn reference_tiers() -> PaddingTiers {
        PaddingTiers::new(vec![
            (50.0, 1.0),
            (100.0, 5.0),
            (200.0, 10.0),
            (300.0, 15.0),
            (850.0, 50.0),
        ])
        .unwrap()
    }

    fn flush_grid(arity: u32) -> ResponsiveGrid {
        ResponsiveGrid::new(
            GridSpec::new(arity).unwrap(),
            Placement::Inset(Insets::default()),
            10.0,
        )
    }

    #[test]
    fn fractions_sum_to_hundred() {
        for n in 1..=64 {
            let spec = GridSpec::new(n).unwrap();
            let total = spec.cell_fraction() * n as f64;
            assert!((total - 100.0).abs() < 1e-9, "arity {}", n);
            let summed: f64 = spec.fractions().iter().sum();
            assert!((summed - 100.0).abs() < 1e-9, "arity {}", n);
        }
    }

    #[test]
    fn zero_arity_rejected() {
        assert_eq!(GridSpec::new(0), Err(LayoutError::ZeroArity));
    }

    #[test]
    fn oversized_arity_rejected() {
        assert!(GridSpec::new(GridSpec::MAX_ARITY).is_ok());
        assert_eq!(
            GridSpec::new(100_000),
            Err(LayoutError::ArityTooLarge {
                arity: 100_000,
                max: GridSpec::MAX_ARITY
            })
        );

        let mut settings = SampleSettings::host_cell();
        settings.arity = 100_000;
        assert!(matches!(
            ResponsiveGrid::from_settings(&settings),
            Err(LayoutError::ArityTooLarge { .. })
        ));
    }

    #[test]
    fn resize_to_landscape_container() {
        let mut grid = flush_grid(4);
        let layout = grid.resize(Size::new(400.0, 300.0)).unwrap();
        assert_eq!(layout.square_side, 300.0);
        assert_eq!(grid.spec().fractions(), vec![25.0; 4]);
    }

    #[test]
    fn zero_dimension_keeps_previous_layout() {
        let mut grid = flush_grid(4);
        assert_eq!(grid.resize(Size::new(0.0, 500.0)), None);
        assert!(grid.layout().is_none());

        let before = grid.resize(Size::new(400.0, 300.0)).unwrap();
        assert_eq!(grid.resize(Size::new(0.0, 500.0)), None);
        assert_eq!(grid.resize(Size::new(500.0, 0.0)), None);
        assert_eq!(grid.layout(), Some(&before));
    }

    #[test]
    fn missing_host_cell_skips_update() {
        let host = HostGrid::new(vec![100.0], vec![100.0]).unwrap();
        let mut grid = ResponsiveGrid::new(
            GridSpec::new(3).unwrap(),
            Placement::HostCell {
                grid: host,
                column: 1,
                row: 1,
            },
            10.0,
        );
        assert_eq!(grid.resize(Size::new(800.0, 480.0)), None);
        assert!(grid.cells().is_empty());
    }

    #[test]
    fn resize_is_idempotent() {
        let mut grid = flush_grid(3).with_padding_tiers(Some(reference_tiers()), Some(reference_tiers()));
        let first = grid.resize(Size::new(640.0, 480.0));
        let second = grid.resize(Size::new(640.0, 480.0));
        assert_eq!(first, second);
    }

    #[test]
    fn tiered_padding_follows_square() {
        let mut grid = flush_grid(4).with_padding_tiers(Some(reference_tiers()), Some(reference_tiers()));

        let layout = grid.resize(Size::new(1000.0, 250.0)).unwrap();
        assert_eq!(layout.square_side, 250.0);
        assert_eq!(layout.horizontal_padding, 10.0);
        assert_eq!(layout.vertical_padding, 10.0);

        let layout = grid.resize(Size::new(900.0, 900.0)).unwrap();
        assert_eq!(layout.horizontal_padding, 50.0);
    }

    #[test]
    fn unmatched_tier_keeps_previous_padding() {
        let mut grid = flush_grid(2).with_padding_tiers(Some(reference_tiers()), Some(reference_tiers()));

        // Nothing matched yet: the configured default stays
        let layout = grid.resize(Size::new(40.0, 40.0)).unwrap();
        assert_eq!(layout.square_side, 40.0);
        assert_eq!(layout.horizontal_padding, 10.0);

        grid.resize(Size::new(150.0, 150.0)).unwrap();
        let layout = grid.resize(Size::new(30.0, 30.0)).unwrap();
        assert_eq!(layout.square_side, 30.0);
        assert_eq!(layout.horizontal_padding, 5.0);
        assert_eq!(layout.vertical_padding, 5.0);
    }

    #[test]
    fn independent_tier_tables() {
        let vertical = PaddingTiers::new(vec![(0.0, 2.0)]).unwrap();
        let mut grid = flush_grid(2).with_padding_tiers(Some(reference_tiers()), Some(vertical));
        let layout = grid.resize(Size::new(400.0, 400.0)).unwrap();
        assert_eq!(layout.horizontal_padding, 15.0);
        assert_eq!(layout.vertical_padding, 2.0);
    }

    #[test]
    fn cells_cover_square() {
        let mut grid = flush_grid(4);
        grid.resize(Size::new(400.0, 300.0)).unwrap();

        let square = grid.square_rect().unwrap();
        assert_eq!(square, Rect::new(50.0, 0.0, 300.0, 300.0));

        let cells = grid.cells();
        assert_eq!(cells.len(), 16);
        assert_eq!((cells[1].column, cells[1].row), (0, 1));
        assert_eq!(cells[1].outer, Rect::new(50.0, 75.0, 75.0, 75.0));
        assert_eq!(cells[1].inner, Rect::new(60.0, 85.0, 55.0, 55.0));

        let last = cells[15].outer;
        assert!((last.x + last.width - 350.0).abs() < 1e-9);
        assert!((last.y + last.height - 300.0).abs() < 1e-9);
    }

    #[test]
    fn grid_lines_span_square() {
        let layout = ComputedLayout {
            square_side: 90.0,
            horizontal_padding: 0.0,
            vertical_padding: 0.0,
        };
        let spec = GridSpec::new(3).unwrap();
        let lines = layout.grid_lines(&spec, (10.0, 20.0));
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], (10.0, 20.0, 10.0, 110.0));
        assert_eq!(lines[3], (10.0, 50.0, 100.0, 50.0));
    }

    #[test]
    fn from_settings_builds_every_preset() {
        for kind in ugrid_core::SampleKind::all() {
            let settings = SampleSettings::preset(*kind);
            let mut grid = ResponsiveGrid::from_settings(&settings).unwrap();
            assert_eq!(grid.spec().arity(), settings.arity);
            assert!(grid.resize(Size::new(800.0, 480.0)).is_some());
        }
    }

    #[test]
    fn from_settings_rejects_bad_tiers() {
        let mut settings = SampleSettings::tiered_padding();
        settings.vertical_tiers = Some(vec![[100.0, 1.0], [50.0, 2.0]]);
        assert!(matches!(
            ResponsiveGrid::from_settings(&settings),
            Err(LayoutError::Tiers(TierError::NotIncreasing { .. }))
        ));
    }

    #[test]
    fn tiered_preset_in_reference_window() {
        let mut grid = ResponsiveGrid::from_settings(&SampleSettings::tiered_padding()).unwrap();
        let layout = grid.resize(Size::new(800.0, 480.0)).unwrap();
        // middle host cell is 640 x 384
        assert!((layout.square_side - 384.0).abs() < 1e-9);
        assert_eq!(layout.horizontal_padding, 15.0);
        assert_eq!(layout.vertical_padding, 15.0);
    }
}
