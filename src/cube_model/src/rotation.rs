//! Directions for the slice turns and whole-cube rotations.
//!
//! Each direction names the sense in which the slice is seen to move by a
//! viewer standing in front of the cube.

use std::fmt;

/// Turn of a horizontal slice, seen from above.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RowRotation {
    Clockwise,
    Anticlockwise,
}

/// Turn of a vertical slice parallel to `Left`/`Right`, seen from the front.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColumnRotation {
    /// The front of the slice moves toward `Up`.
    Top,
    /// The front of the slice moves toward `Down`.
    Bottom,
}

/// Turn of a vertical slice parallel to `Front`/`Back`, seen from the front.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LateralColumnRotation {
    /// The top of the slice moves toward `Left`.
    Left,
    /// The top of the slice moves toward `Right`.
    Right,
}

/// Rotation of the whole cube in space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubeRotation {
    /// `Front` rolls up to `Up`.
    Upwise,
    /// `Front` rolls down to `Down`.
    Downwise,
    /// Seen from above; `Right` comes to the front.
    Clockwise,
    /// Seen from above; `Left` comes to the front.
    Anticlockwise,
    /// Seen from the front; `Up` rolls onto `Right`.
    ClockwiseFromFront,
    /// Seen from the front; `Up` rolls onto `Left`.
    AnticlockwiseFromFront,
}

impl RowRotation {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            RowRotation::Clockwise => RowRotation::Anticlockwise,
            RowRotation::Anticlockwise => RowRotation::Clockwise,
        }
    }
}

impl ColumnRotation {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            ColumnRotation::Top => ColumnRotation::Bottom,
            ColumnRotation::Bottom => ColumnRotation::Top,
        }
    }
}

impl LateralColumnRotation {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            LateralColumnRotation::Left => LateralColumnRotation::Right,
            LateralColumnRotation::Right => LateralColumnRotation::Left,
        }
    }
}

impl CubeRotation {
    pub const ALL: [Self; 6] = [
        CubeRotation::Upwise,
        CubeRotation::Downwise,
        CubeRotation::Clockwise,
        CubeRotation::Anticlockwise,
        CubeRotation::ClockwiseFromFront,
        CubeRotation::AnticlockwiseFromFront,
    ];

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            CubeRotation::Upwise => CubeRotation::Downwise,
            CubeRotation::Downwise => CubeRotation::Upwise,
            CubeRotation::Clockwise => CubeRotation::Anticlockwise,
            CubeRotation::Anticlockwise => CubeRotation::Clockwise,
            CubeRotation::ClockwiseFromFront => CubeRotation::AnticlockwiseFromFront,
            CubeRotation::AnticlockwiseFromFront => CubeRotation::ClockwiseFromFront,
        }
    }
}

impl fmt::Display for CubeRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CubeRotation::Upwise => "upwise",
            CubeRotation::Downwise => "downwise",
            CubeRotation::Clockwise => "clockwise",
            CubeRotation::Anticlockwise => "anticlockwise",
            CubeRotation::ClockwiseFromFront => "clockwise from front",
            CubeRotation::AnticlockwiseFromFront => "anticlockwise from front",
        };
        f.write_str(name)
    }
}
