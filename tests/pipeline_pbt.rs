mod common;

use common::brute_force_last_true;
use golident_core::automaton::{count_neighbors, run, step};
use golident_core::compress::{compress, last_true_frames};
use golident_core::tile::tile;
use golident_core::{Identicon, IdenticonConfig};
use golident_data::Board;
use proptest::prelude::*;

prop_compose! {
    fn arb_board(max_side: usize)(
        width in 1..=max_side,
        height in 1..=max_side,
    )(
        cells in prop::collection::vec(any::<bool>(), width * height),
        width in Just(width),
        height in Just(height),
    ) -> Board {
        Board::from_vec(width, height, cells).unwrap()
    }
}

prop_compose! {
    fn arb_config()(
        size in 1usize..12,
        iterations in 0usize..24,
        num_colors in 1usize..7,
    ) -> IdenticonConfig {
        IdenticonConfig::new(size, iterations, num_colors)
    }
}

/// Neighbor count by explicit wrap-around offsets, for boards of side 3+.
fn reference_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let (h, w) = board.shape();
    let mut n = 0;
    for dr in [h - 1, 0, 1] {
        for dc in [w - 1, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            n += u8::from(board[((row + dr) % h, (col + dc) % w)]);
        }
    }
    n
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_build_is_deterministic(seed in ".{0,24}", config in arb_config()) {
        let a = Identicon::build(&seed, &config).unwrap();
        let b = Identicon::build(&seed, &config).unwrap();
        prop_assert_eq!(a.array(), b.array());
        prop_assert_eq!(a.gradient(), b.gradient());
    }

    #[test]
    fn test_shape_range_and_symmetry(seed in ".{0,24}", config in arb_config()) {
        let ident = Identicon::build(&seed, &config).unwrap();
        let array = ident.array();
        let side = 2 * config.size;

        prop_assert_eq!(array.shape(), (side, side));
        prop_assert_eq!(ident.history().len(), config.iterations + 1);
        prop_assert_eq!(ident.gradient().len(), config.num_colors);
        prop_assert!(array.iter().all(|v| (0.0..=255.0).contains(v)));
        prop_assert_eq!(&array.flip_horizontal(), array);
        prop_assert_eq!(&array.flip_vertical(), array);
    }

    #[test]
    fn test_normalized_extremes(seed in ".{0,24}", config in arb_config()) {
        let ident = Identicon::build(&seed, &config).unwrap();
        let field = ident.field();
        let (min, max) = (field.iter().min().copied(), field.iter().max().copied());
        if min != max {
            prop_assert!(ident.array().iter().any(|&v| v == 0.0));
            prop_assert!(ident.array().iter().any(|&v| v == 255.0));
        }
    }

    #[test]
    fn test_gradient_channels_in_unit_interval(seed in ".{0,24}", config in arb_config()) {
        let ident = Identicon::build(&seed, &config).unwrap();
        for point in ident.gradient().points() {
            prop_assert!((0.0..=1.0).contains(&point.position));
            prop_assert!(point.color.iter().all(|c| (0.0..1.0).contains(c)));
        }
    }

    #[test]
    fn test_compress_matches_brute_force(board in arb_board(10), iterations in 0usize..16) {
        let history = run(&board, iterations).unwrap();
        let field = compress(&history);
        prop_assert_eq!(&field, &brute_force_last_true(&history));
        prop_assert!(field.iter().all(|&t| t <= iterations));
    }

    #[test]
    fn test_last_frame_is_compressed_field(board in arb_board(8), iterations in 0usize..10) {
        let history = run(&board, iterations).unwrap();
        let frames = last_true_frames(&history);
        prop_assert_eq!(frames.len(), iterations + 1);
        prop_assert_eq!(frames.last(), Some(&compress(&history)));
    }

    #[test]
    fn test_neighbors_match_wraparound_reference(board in arb_board(9)) {
        prop_assume!(board.width() >= 3 && board.height() >= 3);
        for r in 0..board.height() {
            for c in 0..board.width() {
                prop_assert_eq!(count_neighbors(&board, r, c), reference_neighbors(&board, r, c));
            }
        }
    }

    #[test]
    fn test_step_preserves_shape_and_input(board in arb_board(10)) {
        let before = board.clone();
        let next = step(&board);
        prop_assert_eq!(next.shape(), board.shape());
        prop_assert_eq!(board, before);
    }

    #[test]
    fn test_tile_quadrants(board in arb_board(7)) {
        let tiled = tile(&board);
        let (h, w) = board.shape();
        prop_assert_eq!(tiled.shape(), (2 * h, 2 * w));
        for r in 0..h {
            for c in 0..w {
                let v = board[(r, c)];
                prop_assert_eq!(tiled[(r, w + c)], v);
                prop_assert_eq!(tiled[(r, w - 1 - c)], v);
                prop_assert_eq!(tiled[(2 * h - 1 - r, w + c)], v);
                prop_assert_eq!(tiled[(2 * h - 1 - r, w - 1 - c)], v);
            }
        }
    }
}
