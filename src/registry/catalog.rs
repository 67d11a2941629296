//! The published augmentation catalog.
//!
//! Ids are positions in [`CATALOG`]. Entries are only ever appended: an id's
//! name and behavior never change once published, because variant files on
//! disk are keyed by id. New entries carry the catalog version that
//! introduced them, and versions never decrease down the table.

use crate::transforms::Transform;

/// Newest catalog version.
pub const LATEST_CATALOG_VERSION: u32 = 2;

/// One row of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Stable name, used in listings and logs
    pub name: &'static str,
    /// Operation applied to every grid
    pub transform: Transform,
    /// Catalog version that introduced this entry
    pub since: u32,
}

const UPSCALE_ROTATE90_ROLL1: &[Transform] = &[
    Transform::IncreaseResolution { factor: 2 },
    Transform::Rotate90,
    Transform::RollColors { shift: 1 },
];
const ROTATE90_ROLL1: &[Transform] = &[Transform::Rotate90, Transform::RollColors { shift: 1 }];
const TRANSPOSE_ROLL3: &[Transform] = &[Transform::Transpose, Transform::RollColors { shift: 3 }];
const FLIP_VERTICAL_REFLECT_RIGHT: &[Transform] =
    &[Transform::FlipVertical, Transform::ReflectRight];
const ROTATE180_WIDEN2: &[Transform] =
    &[Transform::Rotate180, Transform::IncreaseWidth { factor: 2 }];
const FLIP_HORIZONTAL_HEIGHTEN2_ROLL5: &[Transform] = &[
    Transform::FlipHorizontal,
    Transform::IncreaseHeight { factor: 2 },
    Transform::RollColors { shift: 5 },
];

const fn entry(name: &'static str, transform: Transform, since: u32) -> CatalogEntry {
    CatalogEntry { name, transform, since }
}

/// Every transform ever published, indexed by id.
pub const CATALOG: &[CatalogEntry] = &[
    // Version 1
    entry("identity", Transform::Identity, 1),
    entry("rotate90", Transform::Rotate90, 1),
    entry("rotate180", Transform::Rotate180, 1),
    entry("rotate270", Transform::Rotate270, 1),
    entry("flip_horizontal", Transform::FlipHorizontal, 1),
    entry("flip_vertical", Transform::FlipVertical, 1),
    entry("reflect_to_the_right", Transform::ReflectRight, 1),
    entry("reflect_to_the_bottom", Transform::ReflectBottom, 1),
    entry("reflect_to_the_left", Transform::ReflectLeft, 1),
    entry("reflect_to_the_top", Transform::ReflectTop, 1),
    entry("transpose", Transform::Transpose, 1),
    entry("increase_resolution", Transform::IncreaseResolution { factor: 2 }, 1),
    entry("increase_height", Transform::IncreaseHeight { factor: 2 }, 1),
    entry("increase_width", Transform::IncreaseWidth { factor: 2 }, 1),
    entry("roll_colors", Transform::RollColors { shift: 1 }, 1),
    // Version 2: composed chains
    entry("upscale_rotate90_roll1", Transform::Chain(UPSCALE_ROTATE90_ROLL1), 2),
    entry("rotate90_roll1", Transform::Chain(ROTATE90_ROLL1), 2),
    entry("transpose_roll3", Transform::Chain(TRANSPOSE_ROLL3), 2),
    entry("flip_vertical_reflect_right", Transform::Chain(FLIP_VERTICAL_REFLECT_RIGHT), 2),
    entry("rotate180_widen2", Transform::Chain(ROTATE180_WIDEN2), 2),
    entry("flip_horizontal_heighten2_roll5", Transform::Chain(FLIP_HORIZONTAL_HEIGHTEN2_ROLL5), 2),
];

/// Catalog entries available in `version`, in id order.
pub fn entries_for_version(version: u32) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().take_while(move |e| e.since <= version)
}
