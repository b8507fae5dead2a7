#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

use std::fmt;

use thiserror::Error;

pub mod event;
pub mod face;
pub mod model;
pub mod moves;
pub mod position;
pub mod rotation;
pub mod side;

pub use event::{CubeEvent, Discard, EventSink};
pub use face::Face;
pub use model::Cube;
pub use moves::{Move, MoveKind, ParseMoveError};
pub use position::{Corner, Edge, Facelet};
pub use rotation::{ColumnRotation, CubeRotation, LateralColumnRotation, RowRotation};
pub use side::{Color, Side};

/// Which coordinate an index was checked against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
    LateralColumn,
    FaceletRow,
    FaceletColumn,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Row => "row",
            Axis::Column => "column",
            Axis::LateralColumn => "lateral column",
            Axis::FaceletRow => "facelet row",
            Axis::FaceletColumn => "facelet column",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("A cube must have a dimension of at least 2, got {0}")]
    InvalidDimension(usize),
    #[error("The {axis} index {index} is out of range for a cube of dimension {dimension}")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        dimension: usize,
    },
}
