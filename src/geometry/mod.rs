//! Geometric primitives for layout filtering.
//!
//! Token boxes and the horizontal bands used to group tokens into a column.

use serde::{Deserialize, Serialize};

/// A rectangle in page space.
///
/// Negative `x` or `y` is the sentinel for "no position information".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the left edge
    pub x: f32,
    /// Y coordinate of the top edge
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use margin_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle carries a real position.
    pub fn has_position(&self) -> bool {
        self.x >= 0.0 && self.y >= 0.0
    }
}

/// An inclusive horizontal interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XBand {
    /// Left bound (inclusive)
    pub min: f32,
    /// Right bound (inclusive)
    pub max: f32,
}

impl XBand {
    /// Create a band from explicit bounds.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Band of `radius` on either side of `center`.
    ///
    /// # Examples
    ///
    /// ```
    /// use margin_oxide::geometry::XBand;
    ///
    /// let band = XBand::around(10.0, 4.0);
    /// assert!(band.contains(6.0));
    /// assert!(band.contains(14.0));
    /// assert!(!band.contains(14.5));
    /// ```
    pub fn around(center: f32, radius: f32) -> Self {
        Self {
            min: center - radius,
            max: center + radius,
        }
    }

    /// Check whether `x` lies within the band, both ends included.
    pub fn contains(&self, x: f32) -> bool {
        x >= self.min && x <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_sentinel_position() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).has_position());
        assert!(!Rect::new(-1.0, 5.0, 1.0, 1.0).has_position());
        assert!(!Rect::new(5.0, -1.0, 1.0, 1.0).has_position());
    }

    #[test]
    fn test_band_is_inclusive() {
        let band = XBand::new(0.0, 20.0);
        assert!(band.contains(0.0));
        assert!(band.contains(20.0));
        assert!(!band.contains(-0.1));
        assert!(!band.contains(20.1));
    }

    #[test]
    fn test_band_rejects_nan() {
        let band = XBand::around(10.0, 10.0);
        assert!(!band.contains(f32::NAN));
    }
}
