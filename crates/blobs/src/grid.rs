use image::GrayImage;

use crate::error::{BlobError, Result};

/// Fixed-size 2D buffer with row-major storage (`y * width + x`).
///
/// The buffer is owned exclusively and zero-initialized at construction.
/// All access goes through bounds-checked accessors; neighbor coordinates
/// produced during extraction are additionally gated by [`Candidate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Default + Clone> Grid<T> {
    /// Allocate a `width x height` grid filled with `T::default()`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BlobError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            data: vec![T::default(); width * height],
        })
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }
}

impl Grid<bool> {
    /// Build a boolean grid from a grayscale mask image.
    ///
    /// Any nonzero pixel is foreground. The image is expected to already be
    /// binarized (see the preprocessing algorithms).
    pub fn from_mask(image: &GrayImage) -> Result<Self> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let mut grid = Self::new(width, height)?;

        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel[0] != 0 {
                grid.data[y as usize * width + x as usize] = true;
            }
        }

        Ok(grid)
    }

    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.get(x, y).copied().unwrap_or(false)
    }
}

/// A coordinate pair validated against grid bounds at construction.
///
/// Invalid candidates are filtered out before any grid access, so
/// out-of-range neighbor offsets never reach an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    x: isize,
    y: isize,
    valid: bool,
}

impl Candidate {
    /// A candidate for a coordinate already known to be in bounds.
    pub fn at(x: usize, y: usize) -> Self {
        Self {
            x: x as isize,
            y: y as isize,
            valid: true,
        }
    }

    /// A candidate validated against `0 <= x < width`, `0 <= y < height`.
    pub fn bounded(x: isize, y: isize, width: usize, height: usize) -> Self {
        let valid = x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height;
        Self { x, y, valid }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Grid column. Only meaningful when `is_valid()` returns true.
    pub fn x(&self) -> usize {
        self.x as usize
    }

    /// Grid row. Only meaningful when `is_valid()` returns true.
    pub fn y(&self) -> usize {
        self.y as usize
    }
}
