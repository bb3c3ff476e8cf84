//! Viewport geometry for the floating toolbar
//!
//! Provides the coordinate types shared by inputs and the toolbar, the
//! default placement rule, and the fixed-position style handed to the host.

/// Gap in pixels between an input's bottom edge and the toolbar
pub const DEFAULT_GAP: f32 = 5.0;

/// Stacking order value for the toolbar surface
pub const DEFAULT_Z_INDEX: i32 = 1000;

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// On-screen bounding rectangle of an element (viewport coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position of the left edge
    pub x: f32,
    /// Y position of the top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the right edge X coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Default toolbar placement: under the element's left edge, `gap` pixels below it
pub fn below_left(rect: &Rect, gap: f32) -> Point {
    Point::new(rect.left(), rect.bottom() + gap)
}

/// CSS-like positioning scheme for the toolbar surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// Relative to the viewport, unaffected by scrolling containers
    Fixed,
}

impl Positioning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Positioning::Fixed => "fixed",
        }
    }
}

/// Style attributes for rendering the toolbar at a published position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarStyle {
    pub position: Positioning,
    pub left: f32,
    pub top: f32,
    pub z_index: i32,
}

impl ToolbarStyle {
    /// Style for a toolbar anchored at `point`
    pub fn fixed_at(point: Point) -> Self {
        Self {
            position: Positioning::Fixed,
            left: point.x,
            top: point.y,
            z_index: DEFAULT_Z_INDEX,
        }
    }

    /// Set the stacking order (builder pattern)
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 200.0, 30.0);
        assert_eq!(rect.right(), 210.0);
        assert_eq!(rect.bottom(), 50.0);
    }

    #[test]
    fn test_below_left_uses_gap() {
        let rect = Rect::new(40.0, 100.0, 300.0, 24.0);
        assert_eq!(below_left(&rect, DEFAULT_GAP), Point::new(40.0, 129.0));
        assert_eq!(below_left(&rect, 0.0), Point::new(40.0, 124.0));
    }

    #[test]
    fn test_fixed_style() {
        let style = ToolbarStyle::fixed_at(Point::new(12.0, 34.0));
        assert_eq!(style.position.as_str(), "fixed");
        assert_eq!(style.left, 12.0);
        assert_eq!(style.top, 34.0);
        assert_eq!(style.z_index, DEFAULT_Z_INDEX);
        assert_eq!(style.with_z_index(5).z_index, 5);
    }
}
