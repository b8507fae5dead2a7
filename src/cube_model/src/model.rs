use std::fmt;

use log::trace;

use crate::{
    Axis, CubeError,
    event::CubeEvent,
    face::Face,
    rotation::{ColumnRotation, CubeRotation, LateralColumnRotation, RowRotation},
    side::{Color, Side},
};

/// A strip of facelets on one side, taking part in a four-way cycle.
type Strip = (Side, Vec<(usize, usize)>);

/// An N×N×N cube stored as six grids of facelet colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    dimension: usize,
    faces: [Face; 6],
}

impl Cube {
    /// Creates a cube in the standard configuration.
    ///
    /// # Errors
    ///
    /// Fails if `dimension` is below 2.
    pub fn new(dimension: usize) -> Result<Cube, CubeError> {
        if dimension < 2 {
            return Err(CubeError::InvalidDimension(dimension));
        }
        Ok(Cube {
            dimension,
            faces: Side::ALL.map(|side| Face::filled(dimension, side.standard_color())),
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn face(&self, side: Side) -> &Face {
        &self.faces[side as usize]
    }

    /// # Errors
    ///
    /// Fails if `row` or `col` are outside the cube.
    pub fn get(&self, side: Side, row: usize, col: usize) -> Result<Color, CubeError> {
        self.check(Axis::FaceletRow, row)?;
        self.check(Axis::FaceletColumn, col)?;
        Ok(self.face(side).get(row, col))
    }

    /// The middle facelet of a side. For an even dimension this is the facelet
    /// just below and right of the true center.
    pub fn center(&self, side: Side) -> Color {
        let middle = self.dimension / 2;
        self.face(side).get(middle, middle)
    }

    /// Paints a single facelet, which may leave the cube in an unreachable state.
    ///
    /// # Errors
    ///
    /// Fails if `row` or `col` are outside the cube.
    pub fn set_facelet(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<CubeEvent, CubeError> {
        self.check(Axis::FaceletRow, row)?;
        self.check(Axis::FaceletColumn, col)?;
        self.faces[side as usize].set(row, col, color);
        Ok(CubeEvent::FaceletChanged { side, row, col })
    }

    /// Changes the dimension, resetting the cube to the standard configuration.
    /// Nothing happens when the dimension is unchanged.
    ///
    /// # Errors
    ///
    /// Fails if `dimension` is below 2.
    pub fn set_dimension(&mut self, dimension: usize) -> Result<Vec<CubeEvent>, CubeError> {
        if dimension == self.dimension {
            return Ok(vec![]);
        }
        *self = Cube::new(dimension)?;

        let mut events = vec![CubeEvent::DimensionChanged { dimension }];
        events.extend(self.facelet_events());
        Ok(events)
    }

    /// Repaints every side with its standard color.
    pub fn reset_to_standard_configuration(&mut self) -> Vec<CubeEvent> {
        self.faces = Side::ALL.map(|side| Face::filled(self.dimension, side.standard_color()));
        self.facelet_events().collect()
    }

    fn facelet_events(&self) -> impl Iterator<Item = CubeEvent> {
        let n = self.dimension;
        Side::ALL.into_iter().flat_map(move |side| {
            (0..n * n).map(move |i| CubeEvent::FaceletChanged {
                side,
                row: i / n,
                col: i % n,
            })
        })
    }

    /// Turns the horizontal slice `index` rows below the top.
    ///
    /// # Errors
    ///
    /// Fails if `index` is outside the cube.
    pub fn rotate_row(
        &mut self,
        index: usize,
        rotation: RowRotation,
    ) -> Result<CubeEvent, CubeError> {
        self.check(Axis::Row, index)?;
        let n = self.dimension;

        let strip = |side: Side| -> Strip { (side, (0..n).map(|i| (index, i)).collect()) };
        self.cycle(
            [
                strip(Side::Front),
                strip(Side::Right),
                strip(Side::Back),
                strip(Side::Left),
            ],
            rotation == RowRotation::Clockwise,
        );

        if index == 0 {
            self.spin(Side::Up, rotation == RowRotation::Clockwise);
        } else if index == n - 1 {
            self.spin(Side::Down, rotation == RowRotation::Anticlockwise);
        }

        trace!("Rotated row {index} {rotation:?}");
        Ok(CubeEvent::RowRotated { index, rotation })
    }

    /// Turns the vertical slice `index` columns from the left, as seen from the
    /// front.
    ///
    /// # Errors
    ///
    /// Fails if `index` is outside the cube.
    pub fn rotate_column(
        &mut self,
        index: usize,
        rotation: ColumnRotation,
    ) -> Result<CubeEvent, CubeError> {
        self.check(Axis::Column, index)?;
        let n = self.dimension;

        let straight = |side: Side| -> Strip { (side, (0..n).map(|i| (i, index)).collect()) };
        let back: Strip = (
            Side::Back,
            (0..n).map(|i| (n - 1 - i, n - 1 - index)).collect(),
        );
        self.cycle(
            [straight(Side::Front), straight(Side::Up), back, straight(Side::Down)],
            rotation == ColumnRotation::Bottom,
        );

        if index == 0 {
            self.spin(Side::Left, rotation == ColumnRotation::Bottom);
        } else if index == n - 1 {
            self.spin(Side::Right, rotation == ColumnRotation::Top);
        }

        trace!("Rotated column {index} {rotation:?}");
        Ok(CubeEvent::ColumnRotated { index, rotation })
    }

    /// Turns the vertical slice `index` layers behind the front.
    ///
    /// # Errors
    ///
    /// Fails if `index` is outside the cube.
    pub fn rotate_lateral_column(
        &mut self,
        index: usize,
        rotation: LateralColumnRotation,
    ) -> Result<CubeEvent, CubeError> {
        self.check(Axis::LateralColumn, index)?;
        let n = self.dimension;

        self.cycle_lateral_column(index, rotation);

        if index == 0 {
            self.spin(Side::Front, rotation == LateralColumnRotation::Right);
        } else if index == n - 1 {
            self.spin(Side::Back, rotation == LateralColumnRotation::Left);
        }

        trace!("Rotated lateral column {index} {rotation:?}");
        Ok(CubeEvent::LateralColumnRotated { index, rotation })
    }

    /// Turns the whole cube in space. The facelets keep their relative
    /// positions, only the viewpoint changes.
    pub fn rotate_cube(&mut self, rotation: CubeRotation) -> CubeEvent {
        use Side::{Back, Down, Front, Left, Right, Up};

        let old = self.faces.clone();
        let face = |side: Side| old[side as usize].clone();

        match rotation {
            CubeRotation::Upwise => {
                self.place(Front, face(Down));
                self.place(Down, face(Back).flipped());
                self.place(Back, face(Up).flipped());
                self.place(Up, face(Front));
                self.spin(Left, false);
                self.spin(Right, true);
            }
            CubeRotation::Downwise => {
                self.place(Front, face(Up));
                self.place(Up, face(Back).flipped());
                self.place(Back, face(Down).flipped());
                self.place(Down, face(Front));
                self.spin(Left, true);
                self.spin(Right, false);
            }
            CubeRotation::Clockwise => {
                self.place(Front, face(Right));
                self.place(Right, face(Back));
                self.place(Back, face(Left));
                self.place(Left, face(Front));
                self.spin(Up, true);
                self.spin(Down, false);
            }
            CubeRotation::Anticlockwise => {
                self.place(Front, face(Left));
                self.place(Left, face(Back));
                self.place(Back, face(Right));
                self.place(Right, face(Front));
                self.spin(Up, false);
                self.spin(Down, true);
            }
            CubeRotation::ClockwiseFromFront => {
                for index in 0..self.dimension {
                    self.cycle_lateral_column(index, LateralColumnRotation::Right);
                }
                self.spin(Front, true);
                self.spin(Back, false);
            }
            CubeRotation::AnticlockwiseFromFront => {
                for index in 0..self.dimension {
                    self.cycle_lateral_column(index, LateralColumnRotation::Left);
                }
                self.spin(Front, false);
                self.spin(Back, true);
            }
        }

        trace!("Rotated cube {rotation}");
        CubeEvent::CubeRotated(rotation)
    }

    /// Returns `true` if each color covers exactly as many facelets as one
    /// side holds and, for an odd dimension, is the center of exactly one side.
    pub fn is_with_sane_colors(&self) -> bool {
        let mut counts = [0; 6];
        for color in self.faces.iter().flat_map(Face::colors) {
            counts[color as usize] += 1;
        }
        if counts.iter().any(|&count| count != self.dimension * self.dimension) {
            return false;
        }

        if self.dimension % 2 == 1 {
            let mut centers = [0; 6];
            for side in Side::ALL {
                centers[self.center(side) as usize] += 1;
            }
            if centers.iter().any(|&count| count != 1) {
                return false;
            }
        }

        true
    }

    /// Returns `true` if every side is covered by its standard color.
    pub fn is_in_standard_configuration(&self) -> bool {
        Side::ALL.into_iter().all(|side| {
            let face = self.face(side);
            face.is_uniform() && face.get(0, 0) == side.standard_color()
        })
    }

    /// Returns `true` if every side is a single color, whichever way the cube
    /// is held.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::is_uniform)
    }

    fn check(&self, axis: Axis, index: usize) -> Result<(), CubeError> {
        if index < self.dimension {
            Ok(())
        } else {
            Err(CubeError::IndexOutOfRange {
                axis,
                index,
                dimension: self.dimension,
            })
        }
    }

    fn place(&mut self, side: Side, face: Face) {
        self.faces[side as usize] = face;
    }

    fn spin(&mut self, side: Side, clockwise: bool) {
        let turned = self.face(side).rotated(clockwise);
        self.place(side, turned);
    }

    fn cycle_lateral_column(&mut self, index: usize, rotation: LateralColumnRotation) {
        let n = self.dimension;
        self.cycle(
            [
                (Side::Up, (0..n).map(|i| (n - 1 - index, i)).collect()),
                (Side::Right, (0..n).map(|i| (i, index)).collect()),
                (Side::Down, (0..n).map(|i| (index, n - 1 - i)).collect()),
                (
                    Side::Left,
                    (0..n).map(|i| (n - 1 - i, n - 1 - index)).collect(),
                ),
            ],
            rotation == LateralColumnRotation::Left,
        );
    }

    /// Moves four strips around a ring. With `take_next` each strip receives
    /// the colors of the strip after it, otherwise those of the strip before.
    fn cycle(&mut self, strips: [Strip; 4], take_next: bool) {
        let old = strips.each_ref().map(|(side, cells)| {
            cells
                .iter()
                .map(|&(row, col)| self.face(*side).get(row, col))
                .collect::<Vec<_>>()
        });

        for (k, (side, cells)) in strips.iter().enumerate() {
            let source = if take_next { (k + 1) % 4 } else { (k + 3) % 4 };
            for (&(row, col), &color) in cells.iter().zip(&old[source]) {
                self.faces[*side as usize].set(row, col, color);
            }
        }
    }
}

impl fmt::Display for Cube {
    /// Renders the unfolded net: `Up` on top, then `Left`, `Front`, `Right`
    /// and `Back` side by side, then `Down`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension;
        let row = |side: Side, row: usize| -> String {
            (0..n).map(|col| self.face(side).get(row, col).letter()).collect()
        };
        let indent = " ".repeat(n + 1);

        for r in 0..n {
            writeln!(f, "{indent}{}", row(Side::Up, r))?;
        }
        for r in 0..n {
            writeln!(
                f,
                "{} {} {} {}",
                row(Side::Left, r),
                row(Side::Front, r),
                row(Side::Right, r),
                row(Side::Back, r)
            )?;
        }
        for r in 0..n {
            writeln!(f, "{indent}{}", row(Side::Down, r))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Cube;
    use crate::{
        Axis, CubeError, CubeEvent,
        rotation::{ColumnRotation, CubeRotation, LateralColumnRotation, RowRotation},
        side::{Color, Side},
    };

    fn scrambled(dimension: usize, seed: u64) -> Cube {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut cube = Cube::new(dimension).unwrap();
        for _ in 0..60 {
            let index = rng.usize(0..dimension);
            match rng.u8(0..4) {
                0 => {
                    cube.rotate_row(index, RowRotation::Clockwise).unwrap();
                }
                1 => {
                    cube.rotate_column(index, ColumnRotation::Top).unwrap();
                }
                2 => {
                    cube.rotate_lateral_column(index, LateralColumnRotation::Right)
                        .unwrap();
                }
                _ => {
                    cube.rotate_cube(CubeRotation::ALL[rng.usize(0..6)]);
                }
            }
        }
        cube
    }

    #[test_log::test]
    fn rejects_small_dimensions() {
        assert_eq!(Cube::new(1), Err(CubeError::InvalidDimension(1)));
        assert_eq!(Cube::new(0), Err(CubeError::InvalidDimension(0)));
        assert!(Cube::new(2).is_ok());
    }

    #[test_log::test]
    fn rejects_out_of_range_indices() {
        let mut cube = Cube::new(3).unwrap();
        assert_eq!(
            cube.rotate_row(3, RowRotation::Clockwise),
            Err(CubeError::IndexOutOfRange {
                axis: Axis::Row,
                index: 3,
                dimension: 3
            })
        );
        assert!(matches!(
            cube.rotate_column(7, ColumnRotation::Top),
            Err(CubeError::IndexOutOfRange {
                axis: Axis::Column,
                ..
            })
        ));
        assert!(
            cube.rotate_lateral_column(3, LateralColumnRotation::Left)
                .is_err()
        );
        assert_eq!(
            cube.get(Side::Up, 0, 3),
            Err(CubeError::IndexOutOfRange {
                axis: Axis::FaceletColumn,
                index: 3,
                dimension: 3
            })
        );
        assert_eq!(cube.get(Side::Back, 2, 2), Ok(Side::Back.standard_color()));
        assert!(cube.set_facelet(Side::Up, 3, 0, Color::Red).is_err());
        assert!(cube.is_in_standard_configuration());
    }

    #[test_log::test]
    fn every_primitive_is_inverted_by_its_opposite() {
        for dimension in 2..=5 {
            let start = scrambled(dimension, dimension as u64);
            for index in 0..dimension {
                for rotation in [RowRotation::Clockwise, RowRotation::Anticlockwise] {
                    let mut cube = start.clone();
                    cube.rotate_row(index, rotation).unwrap();
                    cube.rotate_row(index, rotation.inverse()).unwrap();
                    assert_eq!(cube, start);
                }
                for rotation in [ColumnRotation::Top, ColumnRotation::Bottom] {
                    let mut cube = start.clone();
                    cube.rotate_column(index, rotation).unwrap();
                    cube.rotate_column(index, rotation.inverse()).unwrap();
                    assert_eq!(cube, start);
                }
                for rotation in [LateralColumnRotation::Left, LateralColumnRotation::Right] {
                    let mut cube = start.clone();
                    cube.rotate_lateral_column(index, rotation).unwrap();
                    cube.rotate_lateral_column(index, rotation.inverse())
                        .unwrap();
                    assert_eq!(cube, start);
                }
            }
            for rotation in CubeRotation::ALL {
                let mut cube = start.clone();
                cube.rotate_cube(rotation);
                cube.rotate_cube(rotation.inverse());
                assert_eq!(cube, start);
            }
        }
    }

    #[test_log::test]
    fn quarter_turns_have_order_four() {
        for dimension in 2..=4 {
            let start = scrambled(dimension, 7);
            for rotation in CubeRotation::ALL {
                let mut cube = start.clone();
                for _ in 0..4 {
                    cube.rotate_cube(rotation);
                }
                assert_eq!(cube, start, "{rotation} on dimension {dimension}");
            }
            for index in 0..dimension {
                let mut cube = start.clone();
                for _ in 0..4 {
                    cube.rotate_lateral_column(index, LateralColumnRotation::Right)
                        .unwrap();
                }
                assert_eq!(cube, start);
            }
        }
    }

    #[test_log::test]
    fn whole_cube_rotation_keeps_the_cube_solved() {
        let mut cube = Cube::new(3).unwrap();
        for rotation in CubeRotation::ALL {
            cube.rotate_cube(rotation);
            assert!(cube.is_solved());
            assert!(cube.is_with_sane_colors());
        }
    }

    #[test_log::test]
    fn whole_cube_rotations_move_sides() {
        let mut cube = Cube::new(3).unwrap();
        cube.rotate_cube(CubeRotation::Upwise);
        assert_eq!(cube.center(Side::Up), Color::Yellow);
        assert_eq!(cube.center(Side::Front), Color::Blue);

        let mut cube = Cube::new(3).unwrap();
        cube.rotate_cube(CubeRotation::Clockwise);
        assert_eq!(cube.center(Side::Front), Color::Red);
        assert_eq!(cube.center(Side::Left), Color::Yellow);

        let mut cube = Cube::new(3).unwrap();
        cube.rotate_cube(CubeRotation::ClockwiseFromFront);
        assert_eq!(cube.center(Side::Right), Color::Green);
        assert_eq!(cube.center(Side::Up), Color::Orange);
    }

    #[test_log::test]
    fn top_row_turn_carries_front_to_left() {
        let mut cube = Cube::new(3).unwrap();
        cube.rotate_row(0, RowRotation::Clockwise).unwrap();
        for col in 0..3 {
            assert_eq!(cube.get(Side::Front, 0, col), Ok(Color::Red));
            assert_eq!(cube.get(Side::Left, 0, col), Ok(Color::Yellow));
            assert_eq!(cube.get(Side::Front, 1, col), Ok(Color::Yellow));
        }
        assert!(cube.face(Side::Up).is_uniform());
        assert!(cube.is_with_sane_colors());
        assert!(!cube.is_in_standard_configuration());
    }

    #[test_log::test]
    fn sanity_rejects_repainted_facelets() {
        let mut cube = Cube::new(3).unwrap();
        let event = cube.set_facelet(Side::Front, 0, 0, Color::Green).unwrap();
        assert_eq!(
            event,
            CubeEvent::FaceletChanged {
                side: Side::Front,
                row: 0,
                col: 0
            }
        );
        assert!(!cube.is_with_sane_colors());

        // Swapping two centers keeps the counts but duplicates no center.
        let mut cube = Cube::new(3).unwrap();
        cube.set_facelet(Side::Up, 1, 1, Color::Blue).unwrap();
        cube.set_facelet(Side::Down, 1, 1, Color::Green).unwrap();
        assert!(cube.is_with_sane_colors());

        let mut cube = Cube::new(3).unwrap();
        cube.set_facelet(Side::Up, 1, 1, Color::Blue).unwrap();
        cube.set_facelet(Side::Down, 0, 0, Color::Green).unwrap();
        assert!(!cube.is_with_sane_colors());
    }

    #[test_log::test]
    fn dimension_changes_reset_the_cube() {
        let mut cube = scrambled(3, 11);
        assert_eq!(cube.set_dimension(3), Ok(vec![]));

        let events = cube.set_dimension(4).unwrap();
        assert_eq!(events[0], CubeEvent::DimensionChanged { dimension: 4 });
        assert_eq!(events.len(), 1 + 6 * 16);
        assert_eq!(cube.dimension(), 4);
        assert!(cube.is_in_standard_configuration());

        assert_eq!(cube.set_dimension(1), Err(CubeError::InvalidDimension(1)));
        assert_eq!(cube.dimension(), 4);

        let mut cube = scrambled(3, 12);
        assert_eq!(cube.reset_to_standard_configuration().len(), 54);
        assert!(cube.is_in_standard_configuration());
    }

    #[test_log::test]
    fn renders_the_net() {
        let cube = Cube::new(2).unwrap();
        assert_eq!(
            cube.to_string(),
            "   GG\n   GG\nOO YY RR WW\nOO YY RR WW\n   BB\n   BB\n"
        );
    }
}
