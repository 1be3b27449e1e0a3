// ABOUTME: Basic geometry values in logical pixels.
// ABOUTME: Sizes, insets, rectangles and the square-fit calculation.

/// Width and height of a container or region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Size reported by the host on each layout or resize notification
pub type ContainerSize = Size;

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// False until the host has assigned real dimensions
    pub fn is_laid_out(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrink by `insets`, never going below zero width or height
    pub fn inset(&self, insets: &Insets) -> Rect {
        Rect {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.horizontal()).max(0.0),
            height: (self.height - insets.vertical()).max(0.0),
        }
    }

    /// Place a square of `side` in the middle of this rect
    pub fn centered_square(&self, side: f64) -> Rect {
        Rect {
            x: self.x + (self.width - side) / 2.0,
            y: self.y + (self.height - side) / 2.0,
            width: side,
            height: side,
        }
    }
}

/// Side of the largest square that fits once the margins are taken out.
///
/// Never negative, and never larger than either adjusted dimension.
pub fn compute_square_side(
    container_width: f64,
    container_height: f64,
    horizontal_margin: f64,
    vertical_margin: f64,
) -> f64 {
    let width = container_width - horizontal_margin;
    let height = container_height - vertical_margin;
    width.min(height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_side_takes_smaller_dimension() {
        assert_eq!(compute_square_side(400.0, 300.0, 0.0, 0.0), 300.0);
        assert_eq!(compute_square_side(300.0, 400.0, 0.0, 0.0), 300.0);
    }

    #[test]
    fn square_side_subtracts_margins() {
        // 800x480 window with 100 on every side
        assert_eq!(compute_square_side(800.0, 480.0, 200.0, 200.0), 280.0);
    }

    #[test]
    fn square_side_never_negative() {
        assert_eq!(compute_square_side(150.0, 480.0, 200.0, 200.0), 0.0);
        assert_eq!(compute_square_side(0.0, 0.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn square_side_bounded_by_adjusted_dimensions() {
        let dims = [0.0, 1.0, 37.5, 100.0, 480.0, 800.0, 1920.0];
        let margins = [0.0, 5.0, 100.0, 250.0];
        for &w in &dims {
            for &h in &dims {
                for &mw in &margins {
                    for &mh in &margins {
                        let side = compute_square_side(w, h, mw, mh);
                        assert!(side >= 0.0);
                        let bound = (w - mw).min(h - mh);
                        if bound >= 0.0 {
                            assert!(side <= bound);
                        } else {
                            assert_eq!(side, 0.0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn zero_dimension_is_not_laid_out() {
        assert!(!Size::new(0.0, 500.0).is_laid_out());
        assert!(!Size::new(500.0, 0.0).is_laid_out());
        assert!(Size::new(0.5, 500.0).is_laid_out());
    }

    #[test]
    fn inset_clamps_at_zero() {
        let rect = Rect::new(10.0, 10.0, 30.0, 30.0).inset(&Insets::symmetric(5.0, 20.0));
        assert_eq!(rect, Rect::new(30.0, 15.0, 0.0, 20.0));
    }

    #[test]
    fn centered_square_in_wide_rect() {
        let square = Rect::new(0.0, 0.0, 400.0, 300.0).centered_square(300.0);
        assert_eq!(square, Rect::new(50.0, 0.0, 300.0, 300.0));
    }
}
