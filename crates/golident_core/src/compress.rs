//! History compression into a last-true-index field.

use crate::history::History;
use golident_data::{Field, Grid};

/// For every cell, the last time index at which it was alive, or 0 if never.
///
/// Walks the history in time order, overwriting a running grid wherever the
/// cell is alive and carrying the previous value forward elsewhere.
pub fn compress(history: &History) -> Field {
    let mut field = Grid::new(history.width(), history.height(), 0usize);
    for (t, frame) in history.frames().enumerate() {
        advance(&mut field, t, frame);
    }
    field
}

/// The running field after each time step. Frame `t` only sees history
/// `0..=t`; the last frame equals [`compress`].
pub fn last_true_frames(history: &History) -> Vec<Field> {
    let mut field = Grid::new(history.width(), history.height(), 0usize);
    let mut frames = Vec::with_capacity(history.len());
    for (t, frame) in history.frames().enumerate() {
        advance(&mut field, t, frame);
        frames.push(field.clone());
    }
    frames
}

#[inline]
fn advance(field: &mut Field, t: usize, frame: &[bool]) {
    for (last, &alive) in field.cells_mut().iter_mut().zip(frame) {
        if alive {
            *last = t;
        }
    }
}
