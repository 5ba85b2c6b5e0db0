use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of one connected component, in grid coordinates.
///
/// `width` and `height` are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingRect {
    /// Exclusive right edge
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Convert to an imageproc rect for drawing
    pub fn to_imageproc(&self) -> imageproc::rect::Rect {
        imageproc::rect::Rect::at(self.x as i32, self.y as i32).of_size(self.width, self.height)
    }
}

/// Result of a blob detection run: one rectangle per connected component,
/// in row-major discovery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobReport {
    pub rects: Vec<BoundingRect>,
    /// Original image dimensions
    pub image_width: u32,
    pub image_height: u32,
}
