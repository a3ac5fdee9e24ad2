use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    fn is_within(&self, other: &Rect) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }

    /// Share of this rectangle's area inside `viewport`, in `[0, 1]`.
    /// A degenerate rectangle counts as fully visible when its origin is on screen.
    pub fn visible_fraction(&self, viewport: &Rect) -> f64 {
        let area = self.area();
        if area == 0.0 {
            let inside = self.x >= viewport.x
                && self.x < viewport.right()
                && self.y >= viewport.y
                && self.y < viewport.bottom();
            return if inside { 1.0 } else { 0.0 };
        }
        if self.is_within(viewport) {
            return 1.0;
        }
        self.intersection(viewport)
            .map(|overlap| (overlap.area() / area).min(1.0))
            .unwrap_or(0.0)
    }
}
