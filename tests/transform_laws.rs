//! Algebraic laws of the grid transforms, checked on random grids.

use proptest::prelude::*;

use arcaug::models::{ExamplePair, Grid, Puzzle};
use arcaug::registry::TransformRegistry;
use arcaug::transforms::{
    apply_puzzle_transform, flip_horizontal, flip_vertical, increase_height, increase_resolution,
    increase_width, reflect_to_the_bottom, reflect_to_the_left, reflect_to_the_right,
    reflect_to_the_top, roll_color, roll_colors, rotate180, rotate270, rotate90, transpose,
};

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..=8, 1usize..=8).prop_flat_map(|(h, w)| {
        prop::collection::vec(prop::collection::vec(0u8..=9, w), h)
            .prop_map(|rows| Grid::new(rows).unwrap())
    })
}

fn pair_strategy() -> impl Strategy<Value = ExamplePair> {
    (grid_strategy(), grid_strategy()).prop_map(|(i, o)| ExamplePair::new(i, o))
}

fn puzzle_strategy() -> impl Strategy<Value = Puzzle> {
    (prop::collection::vec(pair_strategy(), 0..4), prop::collection::vec(pair_strategy(), 0..3))
        .prop_map(|(train, test)| Puzzle::new(train, test))
}

fn colors(grid: &Grid) -> Vec<u8> {
    let mut cells = grid.cells().to_vec();
    cells.sort_unstable();
    cells
}

proptest! {
    #[test]
    fn involutions(g in grid_strategy()) {
        prop_assert_eq!(flip_horizontal(&flip_horizontal(&g)), g.clone());
        prop_assert_eq!(flip_vertical(&flip_vertical(&g)), g.clone());
        prop_assert_eq!(transpose(&transpose(&g)), g.clone());
        prop_assert_eq!(rotate180(&rotate180(&g)), g);
    }

    #[test]
    fn four_quarter_turns_are_identity(g in grid_strategy()) {
        let turned = rotate90(&rotate90(&rotate90(&rotate90(&g))));
        prop_assert_eq!(turned, g);
    }

    #[test]
    fn rotations_compose(g in grid_strategy()) {
        prop_assert_eq!(rotate90(&rotate90(&g)), rotate180(&g));
        prop_assert_eq!(rotate90(&rotate180(&g)), rotate270(&g));
        prop_assert_eq!(rotate90(&rotate270(&g)), g);
    }

    #[test]
    fn rotate90_is_transpose_then_flip(g in grid_strategy()) {
        prop_assert_eq!(rotate90(&g), flip_horizontal(&transpose(&g)));
    }

    #[test]
    fn geometry_preserves_color_multiset(g in grid_strategy()) {
        let expected = colors(&g);
        for out in [rotate90(&g), rotate180(&g), rotate270(&g), flip_horizontal(&g), flip_vertical(&g), transpose(&g)] {
            prop_assert_eq!(colors(&out), expected.clone());
        }
    }

    #[test]
    fn shape_laws(g in grid_strategy()) {
        let (h, w) = g.shape();
        prop_assert_eq!(rotate90(&g).shape(), (w, h));
        prop_assert_eq!(rotate180(&g).shape(), (h, w));
        prop_assert_eq!(transpose(&g).shape(), (w, h));
        prop_assert_eq!(reflect_to_the_right(&g).shape(), (h, 2 * w));
        prop_assert_eq!(reflect_to_the_left(&g).shape(), (h, 2 * w));
        prop_assert_eq!(reflect_to_the_bottom(&g).shape(), (2 * h, w));
        prop_assert_eq!(reflect_to_the_top(&g).shape(), (2 * h, w));
        prop_assert_eq!(increase_resolution(&g, 3).unwrap().shape(), (3 * h, 3 * w));
        prop_assert_eq!(increase_height(&g, 2).unwrap().shape(), (2 * h, w));
        prop_assert_eq!(increase_width(&g, 2).unwrap().shape(), (h, 2 * w));
    }

    #[test]
    fn reflections_contain_the_original(g in grid_strategy()) {
        let (h, w) = g.shape();
        let right = reflect_to_the_right(&g);
        let bottom = reflect_to_the_bottom(&g);
        for r in 0..h {
            for c in 0..w {
                prop_assert_eq!(right.get(r, c), g.get(r, c));
                prop_assert_eq!(right.get(r, 2 * w - 1 - c), g.get(r, c));
                prop_assert_eq!(bottom.get(r, c), g.get(r, c));
                prop_assert_eq!(bottom.get(2 * h - 1 - r, c), g.get(r, c));
            }
        }
    }

    #[test]
    fn left_and_top_reflect_the_mirror_image(g in grid_strategy()) {
        prop_assert_eq!(reflect_to_the_left(&g), reflect_to_the_right(&flip_horizontal(&g)));
        prop_assert_eq!(reflect_to_the_top(&g), reflect_to_the_bottom(&flip_vertical(&g)));
    }

    #[test]
    fn upscaling_copies_blocks(g in grid_strategy(), k in 1usize..4) {
        let up = increase_resolution(&g, k).unwrap();
        let (h, w) = up.shape();
        for r in 0..h {
            for c in 0..w {
                prop_assert_eq!(up.get(r, c), g.get(r / k, c / k));
            }
        }
    }

    #[test]
    fn roll_keeps_background_fixed(g in grid_strategy(), shift in 0u8..=30) {
        let rolled = roll_colors(&g, shift).unwrap();
        prop_assert_eq!(rolled.shape(), g.shape());
        for (&before, &after) in g.cells().iter().zip(rolled.cells()) {
            prop_assert_eq!(before == 0, after == 0);
            prop_assert!(after <= 9);
        }
    }

    #[test]
    fn roll_by_nine_is_identity(g in grid_strategy(), n in 0u8..3) {
        prop_assert_eq!(roll_colors(&g, 9 * n).unwrap(), g);
    }

    #[test]
    fn rolls_add(g in grid_strategy(), a in 0u8..9, b in 0u8..9) {
        let twice = roll_colors(&roll_colors(&g, a).unwrap(), b).unwrap();
        prop_assert_eq!(twice, roll_colors(&g, a + b).unwrap());
    }

    #[test]
    fn roll_has_an_inverse(g in grid_strategy(), s in 0u8..9) {
        let back = roll_colors(&roll_colors(&g, s).unwrap(), (9 - s) % 9).unwrap();
        prop_assert_eq!(back, g);
    }

    #[test]
    fn roll_is_a_permutation_of_foreground(shift in 1u8..9) {
        let mut images: Vec<u8> = (1..=9).map(|v| roll_color(v, shift)).collect();
        images.sort_unstable();
        prop_assert_eq!(images, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn catalog_preserves_partition(p in puzzle_strategy()) {
        for entry in TransformRegistry::standard().iter() {
            let out = apply_puzzle_transform(&p, &entry.transform).unwrap();
            prop_assert_eq!(out.train.len(), p.train.len());
            prop_assert_eq!(out.test.len(), p.test.len());
        }
    }

    #[test]
    fn pairs_see_the_same_transform(p in puzzle_strategy()) {
        let registry = TransformRegistry::standard();
        for entry in registry.iter() {
            let out = apply_puzzle_transform(&p, &entry.transform).unwrap();
            for (src, dst) in p.train.iter().chain(&p.test).zip(out.train.iter().chain(&out.test)) {
                prop_assert_eq!(&dst.input, &entry.transform.apply(&src.input).unwrap());
                prop_assert_eq!(&dst.output, &entry.transform.apply(&src.output).unwrap());
            }
        }
    }
}
