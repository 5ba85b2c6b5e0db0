use crate::{error::Result, traits::BlobFilter, types::BoundingRect};

/// Drops rectangles smaller than a minimum size in either dimension.
///
/// Useful for discarding speckle components produced by noisy masks.
#[derive(Debug, Clone)]
pub struct MinSizeFilter {
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for MinSizeFilter {
    fn default() -> Self {
        Self {
            min_width: 2,
            min_height: 2,
        }
    }
}

impl BlobFilter for MinSizeFilter {
    fn filter(&self, rects: &mut Vec<BoundingRect>) -> Result<()> {
        rects.retain(|r| r.width >= self.min_width && r.height >= self.min_height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_undersized_rects_and_keeps_order() {
        let mut rects = vec![
            BoundingRect {
                x: 0,
                y: 0,
                width: 3,
                height: 3,
            },
            BoundingRect {
                x: 5,
                y: 0,
                width: 1,
                height: 1,
            },
            BoundingRect {
                x: 0,
                y: 5,
                width: 2,
                height: 4,
            },
        ];

        MinSizeFilter::default()
            .filter(&mut rects)
            .expect("filter succeeds");

        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].x, 0);
        assert_eq!(rects[0].y, 0);
        assert_eq!(rects[1].x, 0);
        assert_eq!(rects[1].y, 5);
    }
}
