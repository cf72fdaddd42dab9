use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Row-major 2D grid.
///
/// `(row, col)` addressing throughout; `height` is the number of rows and
/// `width` the number of columns. Every transform allocates a new grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Boolean automaton state.
pub type Board = Grid<bool>;

/// Last-true-index field produced by history compression.
pub type Field = Grid<usize>;

/// Floating point intensities (normalized fields, identicon arrays).
pub type Intensity = Grid<f64>;

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Builds a grid from nested rows. Returns `None` for ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let cells = rows.into_iter().flatten().collect();
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Mirror left-to-right (reverse column order).
    #[must_use]
    pub fn flip_horizontal(&self) -> Self {
        let cells = self
            .rows()
            .flat_map(|row| row.iter().rev().cloned())
            .collect();
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Mirror top-to-bottom (reverse row order).
    #[must_use]
    pub fn flip_vertical(&self) -> Self {
        let cells = self.rows().rev().flat_map(|row| row.iter().cloned()).collect();
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by evaluating `f(row, col)` for every cell, row-major.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Wraps an existing row-major buffer. Returns `None` when the length does
    /// not match `width * height`.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Option<Self> {
        if width.checked_mul(height)? != cells.len() {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.cells.get(self.index_of(row, col))
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Row slices, top to bottom. A zero-width grid yields no rows.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[T]> + ExactSizeIterator + '_ {
        self.cells.chunks_exact(self.width.max(1))
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl Grid<bool> {
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl Grid<usize> {
    pub fn to_intensity(&self) -> Grid<f64> {
        self.map(|&v| v as f64)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[self.index_of(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let idx = self.index_of(row, col);
        &mut self.cells[idx]
    }
}
