//! Positioned token representation.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A token as produced by layout tokenization: its text and where it was
/// printed on the page.
///
/// Tokens are immutable once created and owned by exactly one [`Block`].
/// Whitespace between words is carried as separate blank tokens.
///
/// [`Block`]: crate::layout::Block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedToken {
    /// The token text
    pub text: String,
    /// Bounding box of the token
    #[serde(flatten)]
    pub bbox: Rect,
}

impl PositionedToken {
    /// Create a token from its text and box coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use margin_oxide::layout::PositionedToken;
    ///
    /// let token = PositionedToken::new("12", 10.0, 30.0, 8.0, 10.0);
    /// assert_eq!(token.x(), 10.0);
    /// assert!(token.has_position());
    /// ```
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            bbox: Rect::new(x, y, width, height),
        }
    }

    /// Create a token without position information.
    pub fn unpositioned(text: impl Into<String>) -> Self {
        Self::new(text, -1.0, -1.0, 0.0, 0.0)
    }

    /// Left edge.
    pub fn x(&self) -> f32 {
        self.bbox.x
    }

    /// Top edge.
    pub fn y(&self) -> f32 {
        self.bbox.y
    }

    /// Width.
    pub fn width(&self) -> f32 {
        self.bbox.width
    }

    /// False when either coordinate is the negative sentinel.
    pub fn has_position(&self) -> bool {
        self.bbox.has_position()
    }

    /// True for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
