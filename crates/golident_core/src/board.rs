//! Board initialization.

use crate::error::{IdenticonError, Result};
use golident_data::{Board, Grid};
use rand::Rng;

/// Draws a `size` x `size` board, one fair boolean per cell in row-major order.
///
/// Consumes exactly `size * size` draws from `rng`. The cell buffer is
/// reserved before any draw; a board the allocator refuses is
/// `ResourceExhaustion`, not an abort.
pub fn init_board<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Board> {
    if size == 0 {
        return Err(IdenticonError::invalid_configuration(
            "board size must be a positive integer",
        ));
    }
    let exhausted = || IdenticonError::exhaustion(1, size, size);
    let total = size.checked_mul(size).ok_or_else(exhausted)?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(total).map_err(|_| exhausted())?;
    cells.extend((0..total).map(|_| rng.gen::<bool>()));

    Grid::from_vec(size, size, cells).ok_or_else(exhausted)
}
