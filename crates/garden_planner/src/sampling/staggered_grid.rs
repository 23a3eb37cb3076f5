//! Row-staggered grid used as the hexagonal-like planting lattice.
use glam::Vec2;
use mint::Vector2;
use rand::RngCore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sampling::PositionSampling;

pub const DEFAULT_STEP: f32 = 1.0;
pub const DEFAULT_ROW_OFFSETS: [f32; 2] = [0.0, 0.5];
pub const DEFAULT_EDGE_EPSILON: f32 = 0.1;
/// Largest number of cells a grid may span.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Square-stepped grid where odd rows are shifted by half a step.
///
/// Rows run from `y = 0` up to and including the last multiple of `step` that does
/// not exceed the height. Within a row, columns start at the row offset and run
/// while `x < width + edge_epsilon`, so a column landing on the right edge is kept.
/// Deterministic: the RNG passed to [`PositionSampling::generate`] is ignored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaggeredGridSampling {
    /// Spacing between columns and between rows.
    pub step: f32,
    /// X offsets of even and odd rows.
    pub row_offsets: [f32; 2],
    /// Slack past the right edge.
    pub edge_epsilon: f32,
}

impl Default for StaggeredGridSampling {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            row_offsets: DEFAULT_ROW_OFFSETS,
            edge_epsilon: DEFAULT_EDGE_EPSILON,
        }
    }
}

impl StaggeredGridSampling {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            ..Default::default()
        }
    }

    pub fn with_row_offsets(mut self, row_offsets: [f32; 2]) -> Self {
        self.row_offsets = row_offsets;
        self
    }

    pub fn with_edge_epsilon(mut self, edge_epsilon: f32) -> Self {
        self.edge_epsilon = edge_epsilon;
        self
    }

    /// X offset of grid row `row`.
    #[inline]
    pub fn row_offset(&self, row: usize) -> f32 {
        self.row_offsets[row % 2]
    }

    /// Number of rows covering a `width` x `height` area.
    ///
    /// `None` when the extent or step is not usable, or when the grid would hold
    /// more than [`MAX_GRID_CELLS`] cells.
    pub fn row_count(&self, width: f32, height: f32) -> Option<usize> {
        if !self.step.is_finite()
            || self.step <= 0.0
            || !width.is_finite()
            || !height.is_finite()
            || width < 0.0
            || height < 0.0
        {
            return None;
        }

        let step = f64::from(self.step);
        let rows = (f64::from(height) / step).floor() + 1.0;
        let reach = f64::from(width) + f64::from(self.edge_epsilon).max(0.0);
        let columns = (reach / step).floor() + 1.0;
        if rows * columns > MAX_GRID_CELLS as f64 {
            return None;
        }
        Some(rows as usize)
    }

    /// Grid rows covering a `width` x `height` area, bottom row first.
    ///
    /// Empty when [`Self::row_count`] rejects the area.
    pub fn rows(&self, width: f32, height: f32) -> impl Iterator<Item = GridRow> + '_ {
        let count = self.row_count(width, height).unwrap_or(0);
        let limit = width + self.edge_epsilon;
        (0..count).map(move |index| GridRow {
            index,
            y: index as f32 * self.step,
            offset: self.row_offset(index),
            step: self.step,
            limit,
        })
    }
}

impl PositionSampling for StaggeredGridSampling {
    fn generate(&self, domain_extent: Vector2<f32>, _rng: &mut dyn RngCore) -> Vec<Vector2<f32>> {
        self.rows(domain_extent.x, domain_extent.y)
            .flat_map(GridRow::cells)
            .map(Into::into)
            .collect()
    }
}

/// One row of a [`StaggeredGridSampling`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRow {
    /// Row number, starting at 0 for the bottom row.
    pub index: usize,
    pub y: f32,
    /// X coordinate of the first cell.
    pub offset: f32,
    step: f32,
    limit: f32,
}

impl GridRow {
    /// Cell positions from left to right.
    pub fn cells(self) -> impl Iterator<Item = Vec2> {
        (0usize..)
            .map(move |i| self.offset + i as f32 * self.step)
            .take_while(move |x| *x < self.limit)
            .map(move |x| Vec2::new(x, self.y))
    }
}
