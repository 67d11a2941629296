//! Published catalog snapshot
//!
//! Variant files are keyed by id, so every published id must keep its name
//! and its output forever. These tests pin both on a fixed sample grid.

use arcaug::models::Grid;
use arcaug::registry::{TransformRegistry, CATALOG, LATEST_CATALOG_VERSION};

const NAMES: [&str; 21] = [
    "identity",
    "rotate90",
    "rotate180",
    "rotate270",
    "flip_horizontal",
    "flip_vertical",
    "reflect_to_the_right",
    "reflect_to_the_bottom",
    "reflect_to_the_left",
    "reflect_to_the_top",
    "transpose",
    "increase_resolution",
    "increase_height",
    "increase_width",
    "roll_colors",
    "upscale_rotate90_roll1",
    "rotate90_roll1",
    "transpose_roll3",
    "flip_vertical_reflect_right",
    "rotate180_widen2",
    "flip_horizontal_heighten2_roll5",
];

fn sample_grid() -> Grid {
    Grid::new(vec![vec![1, 2, 3], vec![4, 5, 0]]).unwrap()
}

fn expected(id: u32) -> Vec<Vec<u8>> {
    match id {
        0 => vec![vec![1, 2, 3], vec![4, 5, 0]],
        1 => vec![vec![4, 1], vec![5, 2], vec![0, 3]],
        2 => vec![vec![0, 5, 4], vec![3, 2, 1]],
        3 => vec![vec![3, 0], vec![2, 5], vec![1, 4]],
        4 => vec![vec![3, 2, 1], vec![0, 5, 4]],
        5 => vec![vec![4, 5, 0], vec![1, 2, 3]],
        6 => vec![vec![1, 2, 3, 3, 2, 1], vec![4, 5, 0, 0, 5, 4]],
        7 => vec![vec![1, 2, 3], vec![4, 5, 0], vec![4, 5, 0], vec![1, 2, 3]],
        8 => vec![vec![3, 2, 1, 1, 2, 3], vec![0, 5, 4, 4, 5, 0]],
        9 => vec![vec![4, 5, 0], vec![1, 2, 3], vec![1, 2, 3], vec![4, 5, 0]],
        10 => vec![vec![1, 4], vec![2, 5], vec![3, 0]],
        11 => vec![
            vec![1, 1, 2, 2, 3, 3],
            vec![1, 1, 2, 2, 3, 3],
            vec![4, 4, 5, 5, 0, 0],
            vec![4, 4, 5, 5, 0, 0],
        ],
        12 => vec![vec![1, 2, 3], vec![1, 2, 3], vec![4, 5, 0], vec![4, 5, 0]],
        13 => vec![vec![1, 1, 2, 2, 3, 3], vec![4, 4, 5, 5, 0, 0]],
        14 => vec![vec![2, 3, 4], vec![5, 6, 0]],
        15 => vec![
            vec![5, 5, 2, 2],
            vec![5, 5, 2, 2],
            vec![6, 6, 3, 3],
            vec![6, 6, 3, 3],
            vec![0, 0, 4, 4],
            vec![0, 0, 4, 4],
        ],
        16 => vec![vec![5, 2], vec![6, 3], vec![0, 4]],
        17 => vec![vec![4, 7], vec![5, 8], vec![6, 0]],
        18 => vec![vec![4, 5, 0, 0, 5, 4], vec![1, 2, 3, 3, 2, 1]],
        19 => vec![vec![0, 0, 5, 5, 4, 4], vec![3, 3, 2, 2, 1, 1]],
        20 => vec![vec![8, 7, 6], vec![8, 7, 6], vec![0, 1, 9], vec![0, 1, 9]],
        _ => panic!("no snapshot for id {}", id),
    }
}

#[test]
fn test_catalog_names_are_stable() {
    let names: Vec<&str> = CATALOG.iter().map(|e| e.name).collect();
    assert_eq!(names, NAMES);
}

#[test]
fn test_catalog_outputs_are_stable() {
    let registry = TransformRegistry::for_version(LATEST_CATALOG_VERSION).unwrap();
    assert_eq!(registry.len(), NAMES.len());

    for entry in registry.iter() {
        let out = entry.transform.apply(&sample_grid()).unwrap();
        assert_eq!(out.to_rows(), expected(entry.id), "{} ({})", entry.id, entry.name);
    }
}

#[test]
fn test_version_one_is_a_prefix() {
    let v1 = TransformRegistry::for_version(1).unwrap();
    let latest = TransformRegistry::standard();
    assert_eq!(v1.len(), 15);
    for entry in v1.iter() {
        assert_eq!(latest.get(entry.id), Some(entry));
    }
}
