use cube_model::{Color, Corner, Edge, Move, MoveKind, Side};
use log::debug;

use super::{D, REFERENCE, Solver, U, U_PRIME, Y, face_turn, steps, upper_edge};
use crate::{StrategyError, solution::Phase};

const F: Move = Move::new(MoveKind::F);
const F_PRIME: Move = Move::inverted(MoveKind::F);
const B: Move = Move::new(MoveKind::B);
const B_PRIME: Move = Move::inverted(MoveKind::B);
const L: Move = Move::new(MoveKind::L);
const R: Move = Move::new(MoveKind::R);
const R_PRIME: Move = Move::inverted(MoveKind::R);
const D_PRIME: Move = Move::inverted(MoveKind::D);

/// Drops the corner at URF down to DLF.
const EXTRACT_CORNER: [Move; 3] = [R_PRIME, D_PRIME, R];

/// Twists the corner under URF until it comes up seated.
const SEAT_CORNER: [Move; 4] = [R_PRIME, D_PRIME, R, D];

const SEAT_ATTEMPTS: usize = 6;

/// The bottom corners in the order a `D` turn carries them.
const BOTTOM_CORNERS: [Corner; 4] = [Corner::Dlf, Corner::Dfr, Corner::Drb, Corner::Dbl];

impl Solver<'_> {
    fn cross_is_done(&self) -> bool {
        Edge::UPPER.iter().all(|&edge| self.is_seated(edge))
    }

    /// An edge with the reference color on top and its other color matching
    /// the center below it.
    fn is_seated(&self, edge: Edge) -> bool {
        let [top, lateral] = edge.colors(&self.cube);
        Edge::UPPER.contains(&edge)
            && top == REFERENCE
            && lateral == self.cube.center(edge.sides()[1])
    }

    pub(super) fn solve_cross(&mut self) -> Result<(), StrategyError> {
        let mut budget = self.budget(Phase::FirstLayerCross);

        while !self.cross_is_done() {
            budget.tick()?;

            let edge = Edge::ALL
                .into_iter()
                .find(|&edge| edge.has_color(&self.cube, REFERENCE) && !self.is_seated(edge))
                .ok_or(StrategyError::NoSolution("no edge carries the reference color"))?;
            debug!("Bringing {edge} into the cross");

            let (descent, landing): (&[Move], Edge) = match edge {
                Edge::Uf => (&[F, F], Edge::Df),
                Edge::Ur => (&[R, R], Edge::Dr),
                Edge::Ub => (&[B, B], Edge::Db),
                Edge::Ul => (&[L, L], Edge::Dl),
                Edge::Fr => (&[F], Edge::Df),
                Edge::Fl => (&[F_PRIME], Edge::Df),
                Edge::Bl => (&[B], Edge::Db),
                Edge::Br => (&[B_PRIME], Edge::Db),
                Edge::Df | Edge::Dr | Edge::Db | Edge::Dl => (&[], edge),
            };
            self.perform_all(descent)?;

            let [bottom, lateral] = landing.colors(&self.cube);
            let other = if bottom == REFERENCE { lateral } else { bottom };
            let target = self.lateral_side_centered_on(other)?;

            self.turn(D, steps(&Side::LATERAL, landing.sides()[1], target)?)?;
            let face = face_turn(target);
            self.perform_all(&[face, face])?;

            if upper_edge(target)?.colors(&self.cube)[0] != REFERENCE {
                let next = face_turn(carried_by_up(target)?);
                self.perform_all(&[face.inverse(), U, next.inverse(), U_PRIME])?;
            }
        }

        Ok(())
    }

    pub(super) fn solve_corners(&mut self) -> Result<(), StrategyError> {
        let mut budget = self.budget(Phase::FirstLayerCorners);

        while !Corner::UPPER
            .iter()
            .all(|corner| corner.is_in_place(&self.cube))
        {
            budget.tick()?;

            let mut corner = Corner::ALL
                .into_iter()
                .find(|&corner| {
                    !corner.is_in_place(&self.cube) && corner.has_color(&self.cube, REFERENCE)
                })
                .ok_or(StrategyError::NoSolution("no corner carries the reference color"))?;
            debug!("Bringing {corner} into the first layer");

            if Corner::UPPER.contains(&corner) {
                self.turn(Y, turns_to_front_right(corner)?)?;
                self.perform_all(&EXTRACT_CORNER)?;
                corner = Corner::Dlf;
            }

            let mut others = corner
                .colors(&self.cube)
                .into_iter()
                .filter(|&color| color != REFERENCE)
                .collect::<Vec<_>>();
            others.sort();

            let target = Corner::UPPER
                .into_iter()
                .find(|slot| {
                    let [_, a, b] = slot.sides();
                    let mut centers = vec![self.cube.center(a), self.cube.center(b)];
                    centers.sort();
                    centers == others
                })
                .ok_or(StrategyError::NoSolution("no slot matches the corner"))?;

            let beneath = bottom_index(beneath(target)?)?;
            self.turn(D, (beneath + 4 - bottom_index(corner)?) % 4)?;
            self.turn(Y, turns_to_front_right(target)?)?;

            let mut seated = false;
            for _ in 0..SEAT_ATTEMPTS {
                self.perform_all(&SEAT_CORNER)?;
                if Corner::Urf.is_in_place(&self.cube) {
                    seated = true;
                    break;
                }
            }
            if !seated {
                return Err(StrategyError::NoSolution("the corner does not seat"));
            }
        }

        Ok(())
    }

    pub(super) fn lateral_side_centered_on(&self, color: Color) -> Result<Side, StrategyError> {
        Side::LATERAL
            .into_iter()
            .find(|&side| self.cube.center(side) == color)
            .ok_or(StrategyError::NoSolution("no lateral center has the color"))
    }
}

/// The side an `U` turn carries the pieces of `side` onto.
fn carried_by_up(side: Side) -> Result<Side, StrategyError> {
    match side {
        Side::Front => Ok(Side::Left),
        Side::Right => Ok(Side::Front),
        Side::Back => Ok(Side::Right),
        Side::Left => Ok(Side::Back),
        Side::Up | Side::Down => Err(StrategyError::NoSolution("a side is not lateral")),
    }
}

/// How many `Y` turns bring a top corner to URF.
fn turns_to_front_right(corner: Corner) -> Result<usize, StrategyError> {
    match corner {
        Corner::Urf => Ok(0),
        Corner::Ubr => Ok(1),
        Corner::Ulb => Ok(2),
        Corner::Ufl => Ok(3),
        _ => Err(StrategyError::NoSolution("the corner is not in the top layer")),
    }
}

fn beneath(corner: Corner) -> Result<Corner, StrategyError> {
    match corner {
        Corner::Ufl => Ok(Corner::Dlf),
        Corner::Urf => Ok(Corner::Dfr),
        Corner::Ubr => Ok(Corner::Drb),
        Corner::Ulb => Ok(Corner::Dbl),
        _ => Err(StrategyError::NoSolution("the corner is not in the top layer")),
    }
}

fn bottom_index(corner: Corner) -> Result<usize, StrategyError> {
    BOTTOM_CORNERS
        .iter()
        .position(|&c| c == corner)
        .ok_or(StrategyError::NoSolution("the corner is not in the bottom layer"))
}

#[cfg(test)]
mod tests {
    use cube_model::{Corner, Cube, Edge, Move};

    use crate::{Phase, Singmaster};

    fn scrambled(scramble: &str) -> Cube {
        let mut cube = Cube::new(3).unwrap();
        for mv in Move::parse_sequence(scramble).unwrap() {
            mv.perform(&mut cube).unwrap();
        }
        cube
    }

    #[test_log::test]
    fn builds_the_cross() {
        let cube = scrambled("R U F' L D2 B R'");
        let solution = Singmaster::new(&cube)
            .unwrap()
            .solve_through(Phase::FirstLayerCross)
            .unwrap();

        let mut replayed = cube.clone();
        for mv in solution.moves() {
            mv.perform(&mut replayed).unwrap();
        }
        for edge in Edge::UPPER {
            assert!(edge.is_in_place(&replayed), "{edge}");
        }
    }

    #[test_log::test]
    fn lines_up_a_cross_that_is_only_turned() {
        let cube = scrambled("U");
        let solution = Singmaster::new(&cube)
            .unwrap()
            .solve_through(Phase::FirstLayerCross)
            .unwrap();
        assert!(!solution.is_empty());

        let mut replayed = cube.clone();
        for mv in solution.moves() {
            mv.perform(&mut replayed).unwrap();
        }
        for edge in Edge::UPPER {
            assert!(edge.is_in_place(&replayed), "{edge}");
        }
    }

    #[test_log::test]
    fn inserts_the_corners() {
        let cube = scrambled("F2 D' L B' U R2 D F' R");
        let solution = Singmaster::new(&cube)
            .unwrap()
            .solve_through(Phase::FirstLayerCorners)
            .unwrap();

        let mut replayed = cube.clone();
        for mv in solution.moves() {
            mv.perform(&mut replayed).unwrap();
        }
        assert!(replayed.face(cube_model::Side::Up).is_uniform());
        for corner in Corner::UPPER {
            assert!(corner.is_in_place(&replayed), "{corner}");
        }
        for edge in Edge::UPPER {
            assert!(edge.is_in_place(&replayed), "{edge}");
        }
        assert_eq!(solution.pending_phase(), Some(Phase::SecondLayer));
    }
}
