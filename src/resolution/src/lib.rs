#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

use std::fmt;

use cube_model::CubeError;
use thiserror::Error;

pub mod config;
pub mod singmaster;
pub mod solution;

pub use config::{ConfigError, SolverConfig};
pub use singmaster::Singmaster;
pub use solution::{Phase, Solution};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

/// A way of computing moves that bring a cube closer to solved.
pub trait ResolutionStrategy {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Computes the moves for the snapshot the strategy was created with.
    ///
    /// # Errors
    ///
    /// Fails if the strategy cannot handle the position or runs out of budget.
    fn next_moves(&self) -> Result<Solution, StrategyError>;
}

/// The limit a solve ran into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Budget {
    Iterations(usize),
    Milliseconds(u64),
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Iterations(count) => write!(f, "{count} iterations"),
            Budget::Milliseconds(ms) => write!(f, "{ms}ms"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("The strategy only handles a cube of dimension 3, got {0}")]
    InvalidDimension(usize),
    #[error("The cube's colors cannot come from a real cube")]
    InsaneColors,
    #[error("No solution: {0}")]
    NoSolution(&'static str),
    #[error("Gave up on the {phase} phase after {budget}")]
    Timeout { phase: Phase, budget: Budget },
    #[error(transparent)]
    Cube(#[from] CubeError),
}

impl StrategyError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, StrategyError::Timeout { .. })
    }
}
