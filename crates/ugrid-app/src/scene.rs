// ABOUTME: Turns the responsive grid into drawable rectangles.
// ABOUTME: GridView owns one sample's grid and rebuilds its shapes on each accepted resize.

use ugrid_core::{Color, PaletteCycle, SampleSettings};
use ugrid_layout::{ContainerSize, LayoutError, ResponsiveGrid};
use ugrid_renderer::RectInstance;

const GRID_LINE_WIDTH: f32 = 1.0;

pub struct GridView {
    settings: SampleSettings,
    grid: ResponsiveGrid,
    /// Shapes in logical pixels
    shapes: Vec<RectInstance>,
    dirty: bool,
}

impl GridView {
    pub fn new(settings: SampleSettings) -> Result<Self, LayoutError> {
        let grid = ResponsiveGrid::from_settings(&settings)?;
        Ok(Self {
            settings,
            grid,
            shapes: Vec::new(),
            dirty: false,
        })
    }

    pub fn on_resize(&mut self, size: ContainerSize) {
        let Some(layout) = self.grid.resize(size) else {
            return;
        };
        tracing::debug!(
            "Grid {}x{} in {:.0}x{:.0}: side {:.1}, padding {}/{}",
            self.grid.spec().arity(),
            self.grid.spec().arity(),
            size.width,
            size.height,
            layout.square_side,
            layout.horizontal_padding,
            layout.vertical_padding
        );
        self.shapes = build_shapes(&self.grid, &self.settings);
        self.dirty = true;
    }

    pub fn shapes(&self) -> &[RectInstance] {
        &self.shapes
    }

    /// True once after each rebuild
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// Cell fills in fill order, then grid lines on top when enabled
pub fn build_shapes(grid: &ResponsiveGrid, settings: &SampleSettings) -> Vec<RectInstance> {
    let cells = grid.cells();
    let mut shapes = Vec::with_capacity(cells.len());

    for (cell, seed) in cells.iter().zip(settings.palette.iter()) {
        let color = PaletteCycle::cell_color(seed, settings.cell_alpha);
        shapes.push(RectInstance {
            x: cell.inner.x as f32,
            y: cell.inner.y as f32,
            width: cell.inner.width as f32,
            height: cell.inner.height as f32,
            radius: settings.corner_radius as f32,
            color: color.to_array(),
        });
    }

    if settings.grid_lines {
        let color = Color::GRID_LINE.to_array();
        for (x0, y0, x1, y1) in grid.grid_lines() {
            shapes.push(RectInstance::line(
                x0 as f32,
                y0 as f32,
                x1 as f32,
                y1 as f32,
                GRID_LINE_WIDTH,
                color,
            ));
        }
    }

    shapes
}

/// Scale logical shapes to physical pixels
pub fn to_physical(shapes: &[RectInstance], scale: f32) -> Vec<RectInstance> {
    shapes
        .iter()
        .map(|s| RectInstance {
            x: s.x * scale,
            y: s.y * scale,
            width: s.width * scale,
            height: s.height * scale,
            radius: s.radius * scale,
            color: s.color,
        })
        .collect()
}
