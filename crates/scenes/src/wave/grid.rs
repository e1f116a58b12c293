use std::num::NonZeroUsize;

use rayon::prelude::*;

use crate::Vec2;

/// Field values sampled on a regular grid, stored row by row.
///
/// Sample `(column, row)` is taken at `(column · stride, row · stride)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldGrid {
    columns: usize,
    rows: usize,
    stride: usize,
    values: Vec<f64>,
}

impl FieldGrid {
    /// Samples `field` over a `width` by `height` area, one row per task.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn sample<F>(width: usize, height: usize, stride: NonZeroUsize, field: F) -> Self
    where
        F: Fn(Vec2) -> f64 + Sync,
    {
        let stride = stride.get();
        let columns = width.div_ceil(stride);
        let rows = height.div_ceil(stride);
        let mut values = vec![0.0; columns * rows];

        if columns > 0 {
            values
                .par_chunks_mut(columns)
                .enumerate()
                .for_each(|(row, out)| {
                    let y = (row * stride) as f64;
                    for (column, value) in out.iter_mut().enumerate() {
                        *value = field(Vec2::new((column * stride) as f64, y));
                    }
                });
        }

        Self {
            columns,
            rows,
            stride,
            values,
        }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// All samples, row by row.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the sample at `(column, row)`, if it is inside the grid.
    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> Option<f64> {
        if column < self.columns && row < self.rows {
            Some(self.values[row * self.columns + column])
        } else {
            None
        }
    }

    /// Scene position of the sample at `(column, row)`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn point(&self, column: usize, row: usize) -> Vec2 {
        Vec2::new((column * self.stride) as f64, (row * self.stride) as f64)
    }
}
