// ABOUTME: Responsive square grid layout.
// ABOUTME: Keeps an N x N grid square and scales its cell padding as the container resizes.

mod events;
mod geometry;
mod grid;
mod padding;
mod placement;

pub use events::{ResizeEvents, SubscriptionId};
pub use geometry::{compute_square_side, ContainerSize, Insets, Rect, Size};
pub use grid::{cell_fraction, CellGeometry, ComputedLayout, GridSpec, LayoutError, ResponsiveGrid};
pub use padding::{PaddingTiers, TierError};
pub use placement::{HostGrid, Placement};
