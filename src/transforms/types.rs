//! Core transform types and error definitions
//!
//! Contains the `Transform` enum naming every supported grid operation and
//! `TransformError` for failures during application.

use std::fmt;

/// Errors that can occur while applying a transform to a grid
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TransformError {
    /// Output dimensions cannot be represented
    #[error("shape error in {op}: {message}")]
    Shape { op: &'static str, message: String },

    /// A color left the valid domain, or a foreground color became background
    #[error("domain error in {op}: {message}")]
    Domain { op: &'static str, message: String },
}

impl TransformError {
    /// Whether this is a color-domain failure rather than a shape failure.
    pub fn is_domain(&self) -> bool {
        matches!(self, TransformError::Domain { .. })
    }
}

/// A single grid operation, or a fixed chain of them.
///
/// Every variant is a pure function of its input grid. `Chain` applies its
/// steps left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Returns the grid unchanged
    Identity,

    // Rotation (clockwise)
    Rotate90,
    Rotate180,
    Rotate270,

    // Mirroring
    /// Mirror across the vertical axis (reverse each row)
    FlipHorizontal,
    /// Mirror across the horizontal axis (reverse row order)
    FlipVertical,

    // Reflective concatenation: the mirror image is placed on the named side
    ReflectRight,
    ReflectLeft,
    ReflectBottom,
    ReflectTop,

    Transpose,

    // Replication
    IncreaseResolution {
        factor: usize,
    },
    IncreaseHeight {
        factor: usize,
    },
    IncreaseWidth {
        factor: usize,
    },

    /// Cyclic shift of the foreground palette 1..=9; background stays put
    RollColors {
        shift: u8,
    },

    /// Steps applied in order, left to right
    Chain(&'static [Transform]),
}

impl Transform {
    /// Whether this transform is a chain of other transforms.
    pub fn is_composed(&self) -> bool {
        matches!(self, Transform::Chain(_))
    }

    /// Steps this transform runs, in order. Primitives are a single step.
    pub fn steps(&self) -> Vec<Transform> {
        match self {
            Transform::Chain(steps) => steps.iter().flat_map(|s| s.steps()).collect(),
            other => vec![*other],
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Identity => write!(f, "identity"),
            Transform::Rotate90 => write!(f, "rotate90"),
            Transform::Rotate180 => write!(f, "rotate180"),
            Transform::Rotate270 => write!(f, "rotate270"),
            Transform::FlipHorizontal => write!(f, "flip_horizontal"),
            Transform::FlipVertical => write!(f, "flip_vertical"),
            Transform::ReflectRight => write!(f, "reflect_to_the_right"),
            Transform::ReflectLeft => write!(f, "reflect_to_the_left"),
            Transform::ReflectBottom => write!(f, "reflect_to_the_bottom"),
            Transform::ReflectTop => write!(f, "reflect_to_the_top"),
            Transform::Transpose => write!(f, "transpose"),
            Transform::IncreaseResolution { factor } => write!(f, "increase_resolution({})", factor),
            Transform::IncreaseHeight { factor } => write!(f, "increase_height({})", factor),
            Transform::IncreaseWidth { factor } => write!(f, "increase_width({})", factor),
            Transform::RollColors { shift } => write!(f, "roll_colors({})", shift),
            Transform::Chain(steps) => {
                let parts: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
                write!(f, "{}", parts.join(" -> "))
            }
        }
    }
}
