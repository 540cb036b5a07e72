//! Dense flow-field grid over a rectangular world area.
//!
//! # Layout
//!
//! Cells are stored row-major: cell `(row, column)` lives at linear index
//! `row * columns + column`.  Row 0 is the bottom of the bounds rectangle
//! (lowest y), column 0 the left edge (lowest x).
//!
//! # Access policy
//!
//! The indexed accessors ([`get`](FlowField::get) / [`set`](FlowField::set))
//! validate the **linear** index against `[0, rows * columns)` and surface
//! [`SpaceError::InvalidCell`] on failure; a column index past the row end
//! therefore aliases into the next row rather than erroring, which callers
//! doing their own row arithmetic rely on.  The position-keyed accessors
//! ([`get_at`](FlowField::get_at) / [`set_at`](FlowField::set_at)) are
//! lenient instead: reads outside the bounds return zero and writes are
//! silently dropped.  The asymmetry is deliberate — an index names a cell
//! that must exist, a position merely might land on one.

use noise::{NoiseFn, Perlin};
use rand::Rng;
use steer_core::vec2::{random_vec2, rotate_deg};
use steer_core::{Rect, Vec2};

use crate::{SpaceError, SpaceResult};

/// A row/column grid of 2D vectors covering a rectangular world area.
///
/// The covered rectangle is centered on `origin` and spans
/// `columns * cell_size.x` by `rows * cell_size.y` world units.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowField {
    origin: Vec2,
    cell_size: Vec2,
    rows: usize,
    columns: usize,
    /// Row-major cell vectors.  Length always equals `rows * columns`.
    cells: Vec<Vec2>,
}

impl FlowField {
    /// Create a zero-filled field.  `rows` and `columns` clamp below to 1;
    /// `cell_size` components clamp below to a small positive epsilon so the
    /// bounds rectangle is never degenerate.
    pub fn new(origin: Vec2, cell_size: Vec2, rows: i32, columns: i32) -> Self {
        let rows = rows.max(1) as usize;
        let columns = columns.max(1) as usize;
        let cell_size = cell_size.max(Vec2::splat(f32::EPSILON));
        Self {
            origin,
            cell_size,
            rows,
            columns,
            cells: vec![Vec2::ZERO; rows * columns],
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Resize the grid to `rows` rows (clamps below to 1).
    ///
    /// Existing cell values are preserved by linear index — not geometrically
    /// remapped — and any new tail cells start at zero.
    pub fn set_rows(&mut self, rows: i32) {
        let rows = rows.max(1) as usize;
        if rows != self.rows {
            self.rows = rows;
            self.realloc();
        }
    }

    /// Resize the grid to `columns` columns (clamps below to 1).  Same value
    /// preservation as [`set_rows`](Self::set_rows).
    pub fn set_columns(&mut self, columns: i32) {
        let columns = columns.max(1) as usize;
        if columns != self.columns {
            self.columns = columns;
            self.realloc();
        }
    }

    /// Reallocate the backing array after a dimension change, but only if
    /// the total cell count actually changed.
    fn realloc(&mut self) {
        let len = self.rows * self.columns;
        if self.cells.len() != len {
            self.cells.resize(len, Vec2::ZERO);
        }
    }

    // ── Coordinate transform ──────────────────────────────────────────────

    /// The world rectangle covered by this field.
    pub fn bounds(&self) -> Rect {
        let size = Vec2::new(
            self.columns as f32 * self.cell_size.x,
            self.rows as f32 * self.cell_size.y,
        );
        Rect::from_center(self.origin, size)
    }

    /// Convert a world position to `(row, column)`, or `None` if `p` is
    /// outside the bounds rectangle.
    pub fn world_to_cell(&self, p: Vec2) -> Option<(usize, usize)> {
        let bounds = self.bounds();
        if !bounds.contains(p) {
            return None;
        }
        let cell_w = bounds.width() / self.columns as f32;
        let cell_h = bounds.height() / self.rows as f32;
        let local = p - bounds.min;
        let row = (local.y / cell_h) as usize;
        let column = (local.x / cell_w) as usize;
        // Float round-off at the max edge can land exactly on rows/columns.
        Some((row.min(self.rows - 1), column.min(self.columns - 1)))
    }

    // ── Indexed access ────────────────────────────────────────────────────

    /// Linear index for `(row, column)`, validated against the cell count.
    fn linear_index(&self, row: i32, column: i32) -> SpaceResult<usize> {
        let index = row as i64 * self.columns as i64 + column as i64;
        if index < 0 || index >= self.cells.len() as i64 {
            return Err(SpaceError::InvalidCell { row, column });
        }
        Ok(index as usize)
    }

    /// Read cell `(row, column)`.
    pub fn get(&self, row: i32, column: i32) -> SpaceResult<Vec2> {
        Ok(self.cells[self.linear_index(row, column)?])
    }

    /// Write cell `(row, column)`.
    pub fn set(&mut self, row: i32, column: i32, value: Vec2) -> SpaceResult<()> {
        let index = self.linear_index(row, column)?;
        self.cells[index] = value;
        Ok(())
    }

    // ── Position-keyed access ─────────────────────────────────────────────

    /// Value of the cell under `position`, or zero if no cell is there.
    pub fn get_at(&self, position: Vec2) -> Vec2 {
        match self.world_to_cell(position) {
            Some((row, column)) => self.cells[row * self.columns + column],
            None => Vec2::ZERO,
        }
    }

    /// Set the cell under `position`.  A position outside the bounds is
    /// silently a no-op, not an error.
    pub fn set_at(&mut self, position: Vec2, value: Vec2) {
        if let Some((row, column)) = self.world_to_cell(position) {
            self.cells[row * self.columns + column] = value;
        }
    }

    // ── Fill operations ───────────────────────────────────────────────────

    /// Zero every cell.
    pub fn clear_all(&mut self) {
        self.cells.fill(Vec2::ZERO);
    }

    /// Set every cell to `value`.
    pub fn fill_with(&mut self, value: Vec2) {
        self.cells.fill(value);
    }

    /// Fill every cell with an independent uniform random vector, each axis
    /// in `[-100, 100)`.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = random_vec2(rng);
        }
    }

    /// Fill every cell with a unit vector whose angle follows Perlin noise
    /// sampled at `(row / rows, column / columns)`.
    ///
    /// The raw noise value in `[-1, 1]` is remapped to `[0, 1]` before the
    /// 360° spread, so the full circle of directions is reachable.
    pub fn fill_perlin(&mut self, perlin: &Perlin) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let n = perlin.get([
                    row as f64 / self.rows as f64,
                    column as f64 / self.columns as f64,
                ]);
                let angle = 360.0 * ((n as f32) + 1.0) * 0.5;
                self.cells[row * self.columns + column] = rotate_deg(Vec2::X, angle);
            }
        }
    }
}
