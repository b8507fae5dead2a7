use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::{
    CubeError,
    event::CubeEvent,
    model::Cube,
    rotation::{ColumnRotation, CubeRotation, LateralColumnRotation, RowRotation},
};

/// The face or axis a move acts on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveKind {
    U,
    D,
    F,
    B,
    L,
    R,
    /// Whole cube, in the sense of `R`.
    X,
    /// Whole cube, in the sense of `U`.
    Y,
    /// Whole cube, in the sense of `F`.
    Z,
}

impl MoveKind {
    pub const ALL: [Self; 9] = {
        use MoveKind::*;
        let v = [U, D, F, B, L, R, X, Y, Z];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub const FACES: [Self; 6] = [
        MoveKind::U,
        MoveKind::D,
        MoveKind::F,
        MoveKind::B,
        MoveKind::L,
        MoveKind::R,
    ];

    fn letter(self) -> char {
        match self {
            MoveKind::U => 'U',
            MoveKind::D => 'D',
            MoveKind::F => 'F',
            MoveKind::B => 'B',
            MoveKind::L => 'L',
            MoveKind::R => 'R',
            MoveKind::X => 'X',
            MoveKind::Y => 'Y',
            MoveKind::Z => 'Z',
        }
    }

    fn from_letter(letter: &str) -> Option<Self> {
        Some(match letter {
            "U" => MoveKind::U,
            "D" => MoveKind::D,
            "F" => MoveKind::F,
            "B" => MoveKind::B,
            "L" => MoveKind::L,
            "R" => MoveKind::R,
            "X" | "x" => MoveKind::X,
            "Y" | "y" => MoveKind::Y,
            "Z" | "z" => MoveKind::Z,
            _ => return None,
        })
    }
}

/// A quarter turn: clockwise as seen facing the named side, or the opposite
/// when `inverse` is set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub kind: MoveKind,
    pub inverse: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("Unknown move: `{0}`")]
    UnknownMove(String),
}

impl Move {
    pub const fn new(kind: MoveKind) -> Move {
        Move {
            kind,
            inverse: false,
        }
    }

    pub const fn inverted(kind: MoveKind) -> Move {
        Move {
            kind,
            inverse: true,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move {
            kind: self.kind,
            inverse: !self.inverse,
        }
    }

    /// Applies the move to `cube` as a single quarter turn.
    ///
    /// # Errors
    ///
    /// Face moves never fail on a valid cube; the error is only surfaced from
    /// the underlying slice primitive.
    pub fn perform(self, cube: &mut Cube) -> Result<CubeEvent, CubeError> {
        let last = cube.dimension() - 1;
        let inv = self.inverse;

        match self.kind {
            MoveKind::U => cube.rotate_row(
                0,
                pick(inv, RowRotation::Clockwise, RowRotation::Anticlockwise),
            ),
            MoveKind::D => cube.rotate_row(
                last,
                pick(inv, RowRotation::Anticlockwise, RowRotation::Clockwise),
            ),
            MoveKind::F => cube.rotate_lateral_column(
                0,
                pick(inv, LateralColumnRotation::Right, LateralColumnRotation::Left),
            ),
            MoveKind::B => cube.rotate_lateral_column(
                last,
                pick(inv, LateralColumnRotation::Left, LateralColumnRotation::Right),
            ),
            MoveKind::R => cube.rotate_column(
                last,
                pick(inv, ColumnRotation::Top, ColumnRotation::Bottom),
            ),
            MoveKind::L => cube.rotate_column(
                0,
                pick(inv, ColumnRotation::Bottom, ColumnRotation::Top),
            ),
            MoveKind::X => Ok(cube.rotate_cube(pick(
                inv,
                CubeRotation::Upwise,
                CubeRotation::Downwise,
            ))),
            MoveKind::Y => Ok(cube.rotate_cube(pick(
                inv,
                CubeRotation::Clockwise,
                CubeRotation::Anticlockwise,
            ))),
            MoveKind::Z => Ok(cube.rotate_cube(pick(
                inv,
                CubeRotation::ClockwiseFromFront,
                CubeRotation::AnticlockwiseFromFront,
            ))),
        }
    }

    /// Parses whitespace separated moves such as `R U2 R' y`. A `2` suffix
    /// stands for two quarter turns.
    ///
    /// # Errors
    ///
    /// Fails on the first token that isn't a move.
    pub fn parse_sequence(text: &str) -> Result<Vec<Move>, ParseMoveError> {
        let mut moves = vec![];
        for token in text.split_whitespace() {
            if let Some(single) = token.strip_suffix('2') {
                let mv = single
                    .parse::<Move>()
                    .map_err(|_| ParseMoveError::UnknownMove(token.to_owned()))?;
                moves.extend([mv, mv]);
            } else {
                moves.push(token.parse()?);
            }
        }
        Ok(moves)
    }

    /// The sequence that undoes `moves`.
    pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
        moves.iter().rev().map(|mv| mv.inverse()).collect()
    }

    pub fn render_sequence(moves: &[Move]) -> String {
        moves.iter().join(" ")
    }
}

fn pick<T>(inverse: bool, normal: T, inverted: T) -> T {
    if inverse { inverted } else { normal }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (letter, inverse) = match s.strip_suffix('\'') {
            Some(letter) => (letter, true),
            None => (s, false),
        };
        let kind = MoveKind::from_letter(letter)
            .ok_or_else(|| ParseMoveError::UnknownMove(s.to_owned()))?;
        Ok(Move { kind, inverse })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.letter())?;
        if self.inverse {
            write!(f, "'")?;
        }
        Ok(())
    }
}
