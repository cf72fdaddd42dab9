//! Mirror tiling.
//!
//! ```text
//! +---------+---------+
//! | H       | field   |
//! +---------+---------+
//! | HV      | V       |
//! +---------+---------+
//! ```
//!
//! `H` reverses columns, `V` reverses rows. Neighboring quadrants mirror each
//! other across the shared edge, so the result is seamless and symmetric
//! about both center lines.

use golident_data::Grid;

/// `(h, w)` in, `(2h, 2w)` out.
pub fn tile<T: Clone>(field: &Grid<T>) -> Grid<T> {
    let (h, w) = field.shape();
    Grid::from_fn(2 * w, 2 * h, |row, col| {
        let src_row = if row < h { row } else { 2 * h - 1 - row };
        let src_col = if col < w { w - 1 - col } else { col - w };
        field[(src_row, src_col)].clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadrant<T: Clone>(g: &Grid<T>, qr: usize, qc: usize, h: usize, w: usize) -> Grid<T> {
        Grid::from_fn(w, h, |r, c| g[(qr * h + r, qc * w + c)].clone())
    }

    #[test]
    fn test_quadrants_are_flips() {
        let field = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let tiled = tile(&field);
        assert_eq!(tiled.shape(), (4, 6));

        assert_eq!(quadrant(&tiled, 0, 0, 2, 3), field.flip_horizontal());
        assert_eq!(quadrant(&tiled, 0, 1, 2, 3), field);
        assert_eq!(
            quadrant(&tiled, 1, 0, 2, 3),
            field.flip_horizontal().flip_vertical()
        );
        assert_eq!(quadrant(&tiled, 1, 1, 2, 3), field.flip_vertical());
    }

    #[test]
    fn test_layout() {
        let field = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(
            tile(&field).to_rows(),
            vec![
                vec![2, 1, 1, 2],
                vec![4, 3, 3, 4],
                vec![4, 3, 3, 4],
                vec![2, 1, 1, 2],
            ]
        );
    }

    #[test]
    fn test_mirror_symmetry() {
        let field = Grid::from_fn(5, 3, |r, c| r * 10 + c);
        let tiled = tile(&field);
        let (rows, cols) = tiled.shape();
        for r in 0..rows {
            for c in 0..cols {
                assert_eq!(tiled[(r, c)], tiled[(r, cols - 1 - c)]);
                assert_eq!(tiled[(r, c)], tiled[(rows - 1 - r, c)]);
            }
        }
    }

    #[test]
    fn test_single_cell() {
        let field = Grid::new(1, 1, 9u8);
        assert_eq!(tile(&field), Grid::new(2, 2, 9u8));
    }
}
