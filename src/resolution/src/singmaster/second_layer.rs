use cube_model::{Edge, Move, MoveKind, Side};
use log::debug;

use super::{REFERENCE, Solver, U, U_PRIME, Y, steps};
use crate::{StrategyError, solution::Phase};

const R: Move = Move::new(MoveKind::R);
const R_PRIME: Move = Move::inverted(MoveKind::R);
const L: Move = Move::new(MoveKind::L);
const L_PRIME: Move = Move::inverted(MoveKind::L);
const F: Move = Move::new(MoveKind::F);
const F_PRIME: Move = Move::inverted(MoveKind::F);

/// Drops the edge at UF into the FR slot.
const INSERT_RIGHT: [Move; 8] = [U, R, U_PRIME, R_PRIME, U_PRIME, F_PRIME, U, F];

/// Drops the edge at UF into the FL slot.
const INSERT_LEFT: [Move; 8] = [U_PRIME, L_PRIME, U, L, U, F, U_PRIME, F_PRIME];

/// The lateral sides in the order a `U'` turn carries them.
const TOP_RING: [Side; 4] = [Side::Left, Side::Front, Side::Right, Side::Back];

/// The middle edges in the order they are searched, with the number of `Y`
/// turns that bring each one to FR.
const MIDDLE_EDGES: [(Edge, usize); 4] = [(Edge::Fr, 0), (Edge::Br, 1), (Edge::Bl, 2), (Edge::Fl, 3)];

impl Solver<'_> {
    fn second_layer_is_done(&self) -> bool {
        Edge::MIDDLE.iter().all(|edge| edge.is_in_place(&self.cube))
    }

    pub(super) fn solve_second_layer(&mut self) -> Result<(), StrategyError> {
        if self.second_layer_is_done() {
            return Ok(());
        }

        self.orient(REFERENCE, Side::Down)?;
        let far = self.cube.center(Side::Up);
        let mut budget = self.budget(Phase::SecondLayer);

        while !self.second_layer_is_done() {
            budget.tick()?;

            let candidate = Edge::UPPER
                .into_iter()
                .find(|edge| !edge.has_color(&self.cube, far));

            if let Some(edge) = candidate {
                debug!("Inserting {edge} into the middle layer");
                let [_, lateral] = edge.colors(&self.cube);
                let target = self.lateral_side_centered_on(lateral)?;

                self.turn(U_PRIME, steps(&TOP_RING, edge.sides()[1], target)?)?;
                self.turn(Y, steps(&Side::LATERAL, Side::Front, target)?)?;

                if Edge::Uf.colors(&self.cube)[0] == self.cube.center(Side::Right) {
                    self.perform_all(&INSERT_RIGHT)?;
                } else {
                    self.perform_all(&INSERT_LEFT)?;
                }
            } else {
                // Every top edge belongs to the last layer, so a middle edge
                // is stuck in the wrong slot or flipped. Lift it out.
                let mut pick = None;
                for (edge, turns) in MIDDLE_EDGES {
                    if edge.has_color(&self.cube, far) {
                        continue;
                    }
                    if !edge.is_in_place(&self.cube) || pick.is_none() {
                        pick = Some((edge, turns));
                    }
                }
                let (edge, turns) =
                    pick.ok_or(StrategyError::NoSolution("no middle edge can be lifted"))?;
                debug!("Lifting {edge} out of the middle layer");

                self.turn(Y, turns)?;
                self.perform_all(&INSERT_RIGHT)?;
            }
        }

        Ok(())
    }
}
