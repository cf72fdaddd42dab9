//! Conway's Game of Life on a torus.
//!
//! B3/S23 rules:
//! - Birth: a dead cell with exactly 3 live neighbors becomes alive
//! - Survival: a live cell with 2 or 3 live neighbors stays alive
//! - Moore neighborhood: 8 neighbors, wrapping at every edge
//!
//! The neighbor count equals the toroidal 3x3 window sum minus the cell
//! itself, so on boards narrower than 3 the same cell can be counted more
//! than once.

use crate::error::{IdenticonError, Result};
use crate::history::History;
use golident_data::{Board, Grid};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Live neighbors of `(row, col)` with toroidal wraparound.
pub fn count_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let (h, w) = board.shape();
    let rows = [(row + h - 1) % h, row, (row + 1) % h];
    let cols = [(col + w - 1) % w, col, (col + 1) % w];

    let mut count = 0;
    for (i, &r) in rows.iter().enumerate() {
        for (j, &c) in cols.iter().enumerate() {
            // Skip by window position, not coordinate: on tiny boards the
            // wrapped neighbors share coordinates with the center.
            if i == 1 && j == 1 {
                continue;
            }
            count += u8::from(board[(r, c)]);
        }
    }
    count
}

/// Transition rule for a single cell.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// One generation. Pure: `board` is left untouched.
///
/// Rows are filled in parallel; the result is the same board
/// [`step_sequential`] produces.
#[cfg(feature = "parallel")]
pub fn step(board: &Board) -> Board {
    let (h, w) = board.shape();
    let mut next = Grid::new(w, h, false);
    if !next.is_empty() {
        next.cells_mut()
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(row, out)| fill_row(board, row, out));
    }
    next
}

/// One generation. Pure: `board` is left untouched.
#[cfg(not(feature = "parallel"))]
pub fn step(board: &Board) -> Board {
    step_sequential(board)
}

/// Single-threaded [`step`].
pub fn step_sequential(board: &Board) -> Board {
    let (h, w) = board.shape();
    let mut next = Grid::new(w, h, false);
    if !next.is_empty() {
        next.cells_mut()
            .chunks_mut(w)
            .enumerate()
            .for_each(|(row, out)| fill_row(board, row, out));
    }
    next
}

fn fill_row(board: &Board, row: usize, out: &mut [bool]) {
    for (col, cell) in out.iter_mut().enumerate() {
        *cell = next_state(board[(row, col)], count_neighbors(board, row, col));
    }
}

/// Runs `iterations` generations from `board`.
///
/// The returned history holds `iterations + 1` snapshots: index 0 is `board`
/// itself and index `i` is `board` after `i` steps.
pub fn run(board: &Board, iterations: usize) -> Result<History> {
    let frames = iterations
        .checked_add(1)
        .ok_or_else(|| IdenticonError::exhaustion(iterations, board.height(), board.width()))?;
    let mut history = History::allocate(board.width(), board.height(), frames)?;
    history.push(board)?;

    let mut current = board.clone();
    for _ in 0..iterations {
        current = step(&current);
        history.push(&current)?;
    }

    tracing::debug!(
        frames = history.len(),
        final_alive = current.alive_count(),
        "Automaton run complete"
    );
    Ok(history)
}
