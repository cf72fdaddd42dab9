/// Asserts that the grid reads the same after a left-right flip and after a
/// top-bottom flip. Accepts a grid or a reference to one.
#[macro_export]
macro_rules! assert_mirror_symmetric {
    ($grid:expr) => {
        let grid = &$grid;
        let rows = grid.to_rows();
        assert_eq!(grid.flip_horizontal().to_rows(), rows, "grid is not left-right symmetric");
        assert_eq!(grid.flip_vertical().to_rows(), rows, "grid is not top-bottom symmetric");
    };
}

/// Asserts that every value of the grid lies in the closed interval.
#[macro_export]
macro_rules! assert_all_in_range {
    ($grid:expr, $lo:expr, $hi:expr) => {
        for (i, v) in $grid.iter().enumerate() {
            assert!(
                ($lo..=$hi).contains(v),
                "cell {} value {} outside [{}, {}]",
                i,
                v,
                $lo,
                $hi
            );
        }
    };
}

/// Asserts that two float grids match bit for bit.
#[macro_export]
macro_rules! assert_bit_identical {
    ($a:expr, $b:expr) => {
        let (a, b) = (&$a, &$b);
        assert_eq!(a.shape(), b.shape(), "shape mismatch");
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert_eq!(x.to_bits(), y.to_bits(), "cell {} differs: {} vs {}", i, x, y);
        }
    };
}
