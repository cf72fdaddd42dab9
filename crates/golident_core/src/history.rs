//! Simulation history: one contiguous `(frames, rows, cols)` boolean buffer.

use crate::error::{IdenticonError, Result};
use golident_data::{Board, Grid};

/// Append-only sequence of board snapshots. Frame 0 is the initial board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    width: usize,
    height: usize,
    len: usize,
    cells: Vec<bool>,
}

impl History {
    /// Reserves room for `frames` boards up front.
    ///
    /// Fails with `ResourceExhaustion` when the cell count overflows or the
    /// allocator refuses the reservation. Nothing is truncated.
    pub fn allocate(width: usize, height: usize, frames: usize) -> Result<Self> {
        let exhausted = || IdenticonError::exhaustion(frames, height, width);
        let total = frames
            .checked_mul(width)
            .and_then(|n| n.checked_mul(height))
            .ok_or_else(exhausted)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(total).map_err(|_| exhausted())?;

        Ok(Self {
            width,
            height,
            len: 0,
            cells,
        })
    }

    /// Builds a history from explicit snapshots, all of the same shape.
    pub fn from_boards(boards: &[Board]) -> Result<Self> {
        let (height, width) = boards.first().map_or((0, 0), Grid::shape);
        let mut history = Self::allocate(width, height, boards.len())?;
        for board in boards {
            history.push(board)?;
        }
        Ok(history)
    }

    pub fn push(&mut self, board: &Board) -> Result<()> {
        if board.shape() != (self.height, self.width) {
            return Err(IdenticonError::shape(format!(
                "board is {:?}, history frames are {:?}",
                board.shape(),
                (self.height, self.width)
            )));
        }
        self.cells.extend_from_slice(board.cells());
        self.len += 1;
        Ok(())
    }

    /// Number of stored snapshots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn frame_size(&self) -> usize {
        self.width * self.height
    }

    /// Raw row-major cells of snapshot `t`.
    pub fn frame(&self, t: usize) -> Option<&[bool]> {
        if t >= self.len {
            return None;
        }
        let n = self.frame_size();
        self.cells.get(t * n..(t + 1) * n)
    }

    /// Snapshot `t` as an owned board.
    pub fn board(&self, t: usize) -> Option<Board> {
        self.frame(t)
            .and_then(|f| Grid::from_vec(self.width, self.height, f.to_vec()))
    }

    pub fn last(&self) -> Option<Board> {
        self.len.checked_sub(1).and_then(|t| self.board(t))
    }

    /// Snapshots in time order.
    pub fn frames(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.len).filter_map(move |t| self.frame(t))
    }

    /// Live-cell count per snapshot.
    pub fn population(&self) -> Vec<usize> {
        self.frames()
            .map(|f| f.iter().filter(|&&c| c).count())
            .collect()
    }
}
