use std::collections::VecDeque;

use tracing::debug;

use crate::{
    error::Result,
    grid::{Candidate, Grid},
    traits::BlobExtractor,
    types::BoundingRect,
};

const NEIGHBORS_C8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
const NEIGHBORS_C4: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Pixel connectivity used when growing a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Edge-adjacent neighbors only
    C4,
    /// Edge- and corner-adjacent neighbors
    C8,
}

impl Connectivity {
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::C4 => &NEIGHBORS_C4,
            Connectivity::C8 => &NEIGHBORS_C8,
        }
    }
}

/// Queue-driven flood-fill extractor.
///
/// Scans the source grid top-to-bottom, left-to-right; each unlabeled
/// foreground cell seeds a breadth-first fill over a FIFO frontier. Cells
/// are labeled when discovered, not when dequeued, so no cell is enqueued
/// twice and the fill terminates after visiting each member once. The
/// component's bounding box grows as points are dequeued and is emitted
/// once the frontier drains.
#[derive(Debug, Clone)]
pub struct FloodFillExtractor {
    pub connectivity: Connectivity,
}

impl Default for FloodFillExtractor {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::C8,
        }
    }
}

impl FloodFillExtractor {
    pub fn new(connectivity: Connectivity) -> Self {
        Self { connectivity }
    }

    /// Runs the fill and also returns the label grid (discovery-order
    /// component ids, 0 = background).
    fn extract_labeled(&self, source: &Grid<bool>) -> Result<(Vec<BoundingRect>, Grid<u32>)> {
        let width = source.width();
        let height = source.height();
        let offsets = self.connectivity.offsets();

        let mut labels: Grid<u32> = Grid::new(width, height)?;
        let mut next_label = 1_u32;
        let mut rects = Vec::new();
        let mut frontier: VecDeque<Candidate> = VecDeque::new();

        for y in 0..height {
            for x in 0..width {
                if !source.is_foreground(x, y) {
                    continue;
                }
                if labels.get(x, y).copied().unwrap_or(0) != 0 {
                    continue;
                }

                // Seed a new component.
                if let Some(label) = labels.get_mut(x, y) {
                    *label = next_label;
                }
                frontier.push_back(Candidate::at(x, y));
                let (mut x1, mut y1, mut x2, mut y2) = (x, y, x, y);

                while let Some(current) = frontier.pop_front() {
                    let (cx, cy) = (current.x(), current.y());
                    x1 = x1.min(cx);
                    x2 = x2.max(cx);
                    y1 = y1.min(cy);
                    y2 = y2.max(cy);

                    for &(dx, dy) in offsets {
                        let candidate =
                            Candidate::bounded(cx as isize + dx, cy as isize + dy, width, height);
                        if !candidate.is_valid() {
                            continue;
                        }

                        let (nx, ny) = (candidate.x(), candidate.y());
                        if !source.is_foreground(nx, ny) {
                            continue;
                        }
                        if labels.get(nx, ny).copied().unwrap_or(0) != 0 {
                            continue;
                        }

                        // Label at discovery so the cell cannot be enqueued
                        // again by another neighbor.
                        if let Some(label) = labels.get_mut(nx, ny) {
                            *label = next_label;
                        }
                        frontier.push_back(candidate);
                    }
                }

                rects.push(BoundingRect {
                    x: x1 as u32,
                    y: y1 as u32,
                    width: (x2 - x1 + 1) as u32,
                    height: (y2 - y1 + 1) as u32,
                });
                next_label += 1;
            }
        }

        debug!(components = rects.len(), "flood fill complete");
        Ok((rects, labels))
    }
}

impl BlobExtractor for FloodFillExtractor {
    fn extract(&self, source: &Grid<bool>) -> Result<Vec<BoundingRect>> {
        let (rects, _labels) = self.extract_labeled(source)?;
        Ok(rects)
    }
}
