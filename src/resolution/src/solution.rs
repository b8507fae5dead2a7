use std::fmt;

use cube_model::{Cube, CubeError, EventSink, Move};
use itertools::Itertools;

/// The stages of the layer-by-layer method, in the order they run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    OrientFirstLayer,
    FirstLayerCross,
    FirstLayerCorners,
    SecondLayer,
    LastLayer,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::OrientFirstLayer => "orient first layer",
            Phase::FirstLayerCross => "first layer cross",
            Phase::FirstLayerCorners => "first layer corners",
            Phase::SecondLayer => "second layer",
            Phase::LastLayer => "last layer",
        };
        f.write_str(name)
    }
}

/// The moves a strategy produced for one starting cube.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    moves: Vec<Move>,
    pending: Option<Phase>,
}

impl Solution {
    pub(crate) fn new(moves: Vec<Move>, pending: Option<Phase>) -> Solution {
        Solution { moves, pending }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The first phase the strategy could not carry out, if the cube isn't
    /// solved by these moves.
    pub fn pending_phase(&self) -> Option<Phase> {
        self.pending
    }

    /// Performs every move on `cube`, publishing one event per move.
    ///
    /// # Errors
    ///
    /// Fails if a move doesn't fit the cube.
    pub fn replay(&self, cube: &mut Cube, mut sink: impl EventSink) -> Result<(), CubeError> {
        for mv in &self.moves {
            sink.publish(mv.perform(cube)?);
        }
        Ok(())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}
