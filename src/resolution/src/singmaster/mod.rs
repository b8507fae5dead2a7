//! A beginner's layer-by-layer method: the green cross and corners first,
//! then the middle layer edges.

use std::time::{Duration, Instant};

use cube_model::{Color, Cube, Edge, Move, MoveKind, Side};
use log::{debug, info, trace, warn};

use crate::{
    Budget, ResolutionStrategy, StrategyError,
    config::SolverConfig,
    solution::{Phase, Solution},
    start, success, working,
};

mod first_layer;
mod second_layer;

/// The color of the first layer.
const REFERENCE: Color = Color::Green;

const U: Move = Move::new(MoveKind::U);
const U_PRIME: Move = Move::inverted(MoveKind::U);
const D: Move = Move::new(MoveKind::D);
const X: Move = Move::new(MoveKind::X);
const X_PRIME: Move = Move::inverted(MoveKind::X);
const Y: Move = Move::new(MoveKind::Y);
const Z: Move = Move::new(MoveKind::Z);
const Z_PRIME: Move = Move::inverted(MoveKind::Z);

#[derive(Debug, Clone)]
pub struct Singmaster {
    cube: Cube,
    config: SolverConfig,
}

impl Singmaster {
    /// Takes a snapshot of `cube` to solve with the default limits.
    ///
    /// # Errors
    ///
    /// Fails unless `cube` is a 3×3×3 with sane colors.
    pub fn new(cube: &Cube) -> Result<Singmaster, StrategyError> {
        Singmaster::with_config(cube, SolverConfig::default())
    }

    /// # Errors
    ///
    /// Fails unless `cube` is a 3×3×3 with sane colors.
    pub fn with_config(cube: &Cube, config: SolverConfig) -> Result<Singmaster, StrategyError> {
        if cube.dimension() != 3 {
            return Err(StrategyError::InvalidDimension(cube.dimension()));
        }
        if !cube.is_with_sane_colors() {
            return Err(StrategyError::InsaneColors);
        }
        Ok(Singmaster {
            cube: cube.clone(),
            config,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs every phase up to and including `through`.
    ///
    /// # Errors
    ///
    /// Fails if a phase meets a position it has no rule for, or a phase runs
    /// out of budget.
    pub fn solve_through(&self, through: Phase) -> Result<Solution, StrategyError> {
        info!(start!("Solving with the Singmaster method"));
        let mut solver = Solver::new(self.cube.clone(), &self.config);

        let mut phase = Some(Phase::OrientFirstLayer);
        while let Some(current) = phase {
            if current > through {
                break;
            }
            debug!(working!("Entering the {} phase"), current);
            let before = solver.moves.len();
            match current {
                Phase::OrientFirstLayer => solver.orient(REFERENCE, Side::Up)?,
                Phase::FirstLayerCross => solver.solve_cross()?,
                Phase::FirstLayerCorners => solver.solve_corners()?,
                Phase::SecondLayer => solver.solve_second_layer()?,
                Phase::LastLayer => {
                    if !solver.cube.is_solved() {
                        warn!("The last layer is not implemented, stopping here");
                    }
                    break;
                }
            }
            debug!(
                working!("The {} phase took {} moves"),
                current,
                solver.moves.len() - before
            );
            phase = next_phase(current);
        }

        let pending = if solver.cube.is_solved() {
            None
        } else {
            phase
        };
        info!(
            success!("Found {} moves in {:.3}s"),
            solver.moves.len(),
            solver.started.elapsed().as_secs_f64()
        );
        Ok(Solution::new(solver.moves, pending))
    }
}

impl ResolutionStrategy for Singmaster {
    fn name(&self) -> &'static str {
        "Singmaster"
    }

    fn description(&self) -> &'static str {
        "Layer by layer: builds the green cross, inserts the green corners, then \
         places the middle layer edges."
    }

    fn next_moves(&self) -> Result<Solution, StrategyError> {
        self.solve_through(Phase::SecondLayer)
    }
}

fn next_phase(phase: Phase) -> Option<Phase> {
    match phase {
        Phase::OrientFirstLayer => Some(Phase::FirstLayerCross),
        Phase::FirstLayerCross => Some(Phase::FirstLayerCorners),
        Phase::FirstLayerCorners => Some(Phase::SecondLayer),
        Phase::SecondLayer => Some(Phase::LastLayer),
        Phase::LastLayer => None,
    }
}

/// Counts loop iterations of one phase against the configured limits.
struct PhaseBudget {
    phase: Phase,
    iterations: usize,
    max_iterations: usize,
    started: Instant,
    time_limit: Option<Duration>,
}

impl PhaseBudget {
    fn tick(&mut self) -> Result<(), StrategyError> {
        self.iterations += 1;
        if self.iterations > self.max_iterations {
            return Err(StrategyError::Timeout {
                phase: self.phase,
                budget: Budget::Iterations(self.max_iterations),
            });
        }
        if let Some(limit) = self.time_limit
            && self.started.elapsed() > limit
        {
            return Err(StrategyError::Timeout {
                phase: self.phase,
                budget: Budget::Milliseconds(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX)),
            });
        }
        Ok(())
    }
}

/// The working copy of the cube along with the moves made on it so far.
struct Solver<'a> {
    cube: Cube,
    moves: Vec<Move>,
    config: &'a SolverConfig,
    started: Instant,
}

impl Solver<'_> {
    fn new(cube: Cube, config: &SolverConfig) -> Solver<'_> {
        Solver {
            cube,
            moves: vec![],
            config,
            started: Instant::now(),
        }
    }

    fn budget(&self, phase: Phase) -> PhaseBudget {
        PhaseBudget {
            phase,
            iterations: 0,
            max_iterations: self.config.max_phase_iterations,
            started: self.started,
            time_limit: self.config.time_limit(),
        }
    }

    fn perform(&mut self, mv: Move) -> Result<(), StrategyError> {
        mv.perform(&mut self.cube)?;
        trace!("{mv}");
        self.moves.push(mv);
        Ok(())
    }

    fn perform_all(&mut self, moves: &[Move]) -> Result<(), StrategyError> {
        moves.iter().try_for_each(|&mv| self.perform(mv))
    }

    /// Makes `quarter_turns` turns of `mv`, using its inverse for three.
    fn turn(&mut self, mv: Move, quarter_turns: usize) -> Result<(), StrategyError> {
        match quarter_turns % 4 {
            0 => Ok(()),
            1 => self.perform(mv),
            2 => self.perform_all(&[mv, mv]),
            _ => self.perform(mv.inverse()),
        }
    }

    /// Turns the whole cube so the side centered on `color` faces `toward`,
    /// which must be `Up` or `Down`.
    fn orient(&mut self, color: Color, toward: Side) -> Result<(), StrategyError> {
        let side = Side::ALL
            .into_iter()
            .find(|&side| self.cube.center(side) == color)
            .ok_or(StrategyError::NoSolution("no side is centered on the color"))?;

        let moves: &[Move] = match (toward, side) {
            (Side::Up, Side::Up) | (Side::Down, Side::Down) => &[],
            (Side::Up, Side::Front) | (Side::Down, Side::Back) => &[X],
            (Side::Up, Side::Back) | (Side::Down, Side::Front) => &[X_PRIME],
            (Side::Up, Side::Down) | (Side::Down, Side::Up) => &[X, X],
            (Side::Up, Side::Left) | (Side::Down, Side::Right) => &[Z],
            (Side::Up, Side::Right) | (Side::Down, Side::Left) => &[Z_PRIME],
            _ => return Err(StrategyError::NoSolution("cannot orient toward a lateral side")),
        };
        debug!("Turning the {side} side {toward}");
        self.perform_all(moves)
    }
}

/// The quarter turn of the outer layer on `side`.
fn face_turn(side: Side) -> Move {
    Move::new(match side {
        Side::Up => MoveKind::U,
        Side::Down => MoveKind::D,
        Side::Front => MoveKind::F,
        Side::Back => MoveKind::B,
        Side::Left => MoveKind::L,
        Side::Right => MoveKind::R,
    })
}

/// How many steps along `cycle` lead from `from` to `to`.
fn steps(cycle: &[Side; 4], from: Side, to: Side) -> Result<usize, StrategyError> {
    let position = |side| {
        cycle
            .iter()
            .position(|&s| s == side)
            .ok_or(StrategyError::NoSolution("a side is not lateral"))
    };
    Ok((position(to)? + 4 - position(from)?) % 4)
}

/// The top edge sitting above a lateral side.
fn upper_edge(side: Side) -> Result<Edge, StrategyError> {
    match side {
        Side::Front => Ok(Edge::Uf),
        Side::Right => Ok(Edge::Ur),
        Side::Back => Ok(Edge::Ub),
        Side::Left => Ok(Edge::Ul),
        Side::Up | Side::Down => Err(StrategyError::NoSolution("a side is not lateral")),
    }
}

#[cfg(test)]
mod tests {
    use cube_model::{Cube, Move, MoveKind, Side};

    use super::{Solver, steps};
    use crate::config::SolverConfig;

    #[test_log::test]
    fn counts_steps_around_the_lateral_ring() {
        let ring = Side::LATERAL;
        assert_eq!(steps(&ring, Side::Front, Side::Front).unwrap(), 0);
        assert_eq!(steps(&ring, Side::Front, Side::Right).unwrap(), 1);
        assert_eq!(steps(&ring, Side::Left, Side::Front).unwrap(), 1);
        assert_eq!(steps(&ring, Side::Right, Side::Front).unwrap(), 3);
        assert!(steps(&ring, Side::Up, Side::Front).is_err());
    }

    #[test_log::test]
    fn orients_any_side_up_or_down() {
        let config = SolverConfig::default();
        for side in Side::ALL {
            for toward in [Side::Up, Side::Down] {
                let cube = Cube::new(3).unwrap();
                let color = side.standard_color();
                let mut solver = Solver::new(cube, &config);
                solver.orient(color, toward).unwrap();
                assert_eq!(solver.cube.center(toward), color);
                assert!(solver.moves.len() <= 2);
            }
        }
    }

    #[test_log::test]
    fn three_quarter_turns_are_one_inverse() {
        let config = SolverConfig::default();
        let mut solver = Solver::new(Cube::new(3).unwrap(), &config);
        solver.turn(Move::new(MoveKind::D), 3).unwrap();
        solver.turn(Move::new(MoveKind::D), 2).unwrap();
        assert_eq!(
            solver.moves,
            vec![
                Move::inverted(MoveKind::D),
                Move::new(MoveKind::D),
                Move::new(MoveKind::D)
            ]
        );
    }
}
