//! Viewport geometry for floating overlays. Pure functions, no DOM access.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// Axis-aligned box in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
        }
    }
}

/// Places a box of `size` centered horizontally on the anchor point.
///
/// The right edge is clamped first, then the left one, so a box wider than
/// the viewport ends up pinned at `left = 0`. The vertical axis is not
/// clamped: the box starts at the anchor and may overflow the viewport bottom.
pub fn place_popover(anchor_x: f64, anchor_y: f64, size: Size, viewport_width: f64) -> Position {
    let mut left = anchor_x - size.width / 2.0;
    if left + size.width > viewport_width {
        left = viewport_width - size.width;
    }
    if left < 0.0 {
        left = 0.0;
    }
    Position {
        left,
        top: anchor_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: f64) -> Size {
        Size {
            width,
            height: 40.0,
        }
    }

    #[test]
    fn centers_on_anchor_when_it_fits() {
        let position = place_popover(500.0, 120.0, size(200.0), 1000.0);
        assert_eq!(position, Position { left: 400.0, top: 120.0 });
    }

    #[test]
    fn clamps_to_right_edge() {
        let position = place_popover(990.0, 0.0, size(200.0), 1000.0);
        assert_eq!(position.left, 800.0);
    }

    #[test]
    fn clamps_to_left_edge() {
        let position = place_popover(10.0, 0.0, size(200.0), 1000.0);
        assert_eq!(position.left, 0.0);
    }

    #[test]
    fn wider_than_viewport_is_pinned_left() {
        let position = place_popover(300.0, 0.0, size(1200.0), 1000.0);
        assert_eq!(position.left, 0.0);
    }

    #[test]
    fn top_is_never_clamped() {
        let position = place_popover(100.0, 5000.0, size(50.0), 1000.0);
        assert_eq!(position.top, 5000.0);
    }

    #[test]
    fn left_stays_within_viewport_bounds() {
        let viewport_widths = [0.0, 120.0, 375.0, 1024.0, 1920.0];
        let widths = [0.0, 1.0, 80.0, 375.0, 999.0, 2500.0];
        let anchors = [-300.0, 0.0, 37.5, 500.0, 1023.0, 1919.0, 4000.0];
        for viewport_width in viewport_widths {
            for width in widths {
                for anchor_x in anchors {
                    let left = place_popover(anchor_x, 0.0, size(width), viewport_width).left;
                    let max_left = (viewport_width - width).max(0.0);
                    assert!(
                        (0.0..=max_left).contains(&left),
                        "anchor={anchor_x} width={width} viewport={viewport_width} -> left={left}"
                    );
                }
            }
        }
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(110.0, 70.0));
        assert!(rect.contains(60.0, 45.0));
        assert!(!rect.contains(9.9, 45.0));
        assert!(!rect.contains(60.0, 70.1));
        assert_eq!(rect.size(), Size { width: 100.0, height: 50.0 });
    }
}
