// ABOUTME: Where the square grid lives inside its container.
// ABOUTME: Either fixed margins or one cell of a percentage-based host grid.

use crate::geometry::{compute_square_side, Insets, Rect, Size};
use crate::grid::LayoutError;

/// Outer grid of percentage columns and rows.
#[derive(Debug, Clone, PartialEq)]
pub struct HostGrid {
    columns: Vec<f64>,
    rows: Vec<f64>,
}

impl HostGrid {
    pub fn new(columns: Vec<f64>, rows: Vec<f64>) -> Result<Self, LayoutError> {
        if columns.is_empty() || rows.is_empty() {
            return Err(LayoutError::EmptyHostGrid);
        }
        if let Some(&bad) = columns
            .iter()
            .chain(rows.iter())
            .find(|p| !p.is_finite() || **p < 0.0)
        {
            return Err(LayoutError::InvalidPercent(bad));
        }
        Ok(Self { columns, rows })
    }

    /// Rectangle of cell (`column`, `row`), or None if there is no such cell
    pub fn cell_rect(&self, container: Size, column: usize, row: usize) -> Option<Rect> {
        let column_percent = *self.columns.get(column)?;
        let row_percent = *self.rows.get(row)?;
        let before_x: f64 = self.columns[..column].iter().sum();
        let before_y: f64 = self.rows[..row].iter().sum();
        Some(Rect::new(
            container.width * before_x / 100.0,
            container.height * before_y / 100.0,
            container.width * column_percent / 100.0,
            container.height * row_percent / 100.0,
        ))
    }

    pub fn cell_extent(&self, container: Size, column: usize, row: usize) -> Option<Size> {
        self.cell_rect(container, column, row).map(|r| r.size())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// Fixed margins between the container edge and the grid
    Inset(Insets),
    /// The grid fills one cell of a host grid
    HostCell {
        grid: HostGrid,
        column: usize,
        row: usize,
    },
}

impl Placement {
    /// Region the square is fitted into
    pub fn area(&self, container: Size) -> Option<Rect> {
        match self {
            Placement::Inset(margin) => {
                Some(Rect::new(0.0, 0.0, container.width, container.height).inset(margin))
            }
            Placement::HostCell { grid, column, row } => {
                grid.cell_rect(container, *column, *row)
            }
        }
    }

    /// Square side for `container`, or None when the host cell cannot be found
    pub fn square_side(&self, container: Size) -> Option<f64> {
        match self {
            Placement::Inset(margin) => Some(compute_square_side(
                container.width,
                container.height,
                margin.horizontal(),
                margin.vertical(),
            )),
            Placement::HostCell { grid, column, row } => {
                let cell = grid.cell_extent(container, *column, *row)?;
                Some(compute_square_side(cell.width, cell.height, 0.0, 0.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HostGrid {
        HostGrid::new(vec![10.0, 80.0, 10.0], vec![10.0, 80.0, 10.0]).unwrap()
    }

    #[test]
    fn middle_cell_extent() {
        let extent = host().cell_extent(Size::new(800.0, 480.0), 1, 1).unwrap();
        assert!((extent.width - 640.0).abs() < 1e-9);
        assert!((extent.height - 384.0).abs() < 1e-9);
    }

    #[test]
    fn cell_rect_offsets_by_preceding_tracks() {
        let rect = host().cell_rect(Size::new(1000.0, 500.0), 2, 1).unwrap();
        assert!((rect.x - 900.0).abs() < 1e-9);
        assert!((rect.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn missing_cell_is_none() {
        let grid = host();
        assert_eq!(grid.cell_extent(Size::new(800.0, 480.0), 3, 1), None);
        assert_eq!(grid.cell_extent(Size::new(800.0, 480.0), 1, 7), None);

        let placement = Placement::HostCell {
            grid,
            column: 5,
            row: 0,
        };
        assert_eq!(placement.square_side(Size::new(800.0, 480.0)), None);
    }

    #[test]
    fn host_grid_validation() {
        assert_eq!(
            HostGrid::new(Vec::new(), vec![100.0]),
            Err(LayoutError::EmptyHostGrid)
        );
        assert_eq!(
            HostGrid::new(vec![50.0, -1.0], vec![100.0]),
            Err(LayoutError::InvalidPercent(-1.0))
        );
    }

    #[test]
    fn inset_square_side() {
        let placement = Placement::Inset(Insets::uniform(100.0));
        assert_eq!(placement.square_side(Size::new(800.0, 480.0)), Some(280.0));
        let area = placement.area(Size::new(800.0, 480.0)).unwrap();
        assert_eq!(area, Rect::new(100.0, 100.0, 600.0, 280.0));
    }

    #[test]
    fn host_cell_square_side() {
        let placement = Placement::HostCell {
            grid: host(),
            column: 1,
            row: 1,
        };
        let side = placement.square_side(Size::new(800.0, 480.0)).unwrap();
        assert!((side - 384.0).abs() < 1e-9);
    }
}
