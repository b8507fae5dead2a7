use crate::side::Color;

/// A square grid of facelets belonging to one side of the cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    dimension: usize,
    cells: Vec<Color>,
}

impl Face {
    /// Creates a face where every facelet has the same color.
    #[must_use]
    pub fn filled(dimension: usize, color: Color) -> Face {
        Face {
            dimension,
            cells: vec![color; dimension * dimension],
        }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Indices are checked by `Cube` before they reach the grid.
    pub(crate) fn get(&self, row: usize, col: usize) -> Color {
        assert!(row < self.dimension && col < self.dimension);
        self.cells[row * self.dimension + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, color: Color) {
        assert!(row < self.dimension && col < self.dimension);
        self.cells[row * self.dimension + col] = color;
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().copied()
    }

    /// Returns `true` if every facelet on this face has the same color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.cells.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// The face turned a quarter, seen from outside the cube. The result is
    /// built in a fresh buffer so no facelet is read after it was written.
    #[must_use]
    pub fn rotated(&self, clockwise: bool) -> Face {
        let n = self.dimension;
        let mut out = self.clone();
        for row in 0..n {
            for col in 0..n {
                let color = self.get(row, col);
                if clockwise {
                    out.set(col, n - 1 - row, color);
                } else {
                    out.set(n - 1 - col, row, color);
                }
            }
        }
        out
    }

    /// The face turned half way round.
    #[must_use]
    pub fn flipped(&self) -> Face {
        let mut cells = self.cells.clone();
        cells.reverse();
        Face {
            dimension: self.dimension,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Face;
    use crate::side::Color;

    fn numbered() -> Face {
        // Distinct colors along the first row make orientation visible.
        let mut face = Face::filled(3, Color::White);
        face.set(0, 0, Color::Red);
        face.set(0, 1, Color::Green);
        face.set(0, 2, Color::Blue);
        face
    }

    #[test_log::test]
    fn clockwise_moves_top_row_to_right_column() {
        let face = numbered().rotated(true);
        assert_eq!(face.get(0, 2), Color::Red);
        assert_eq!(face.get(1, 2), Color::Green);
        assert_eq!(face.get(2, 2), Color::Blue);
        assert_eq!(face.get(0, 0), Color::White);
    }

    #[test_log::test]
    fn anticlockwise_moves_top_row_to_left_column() {
        let face = numbered().rotated(false);
        assert_eq!(face.get(2, 0), Color::Red);
        assert_eq!(face.get(1, 0), Color::Green);
        assert_eq!(face.get(0, 0), Color::Blue);
    }

    #[test_log::test]
    fn rotations_compose() {
        let face = numbered();
        assert_eq!(face.rotated(true).rotated(false), face);
        assert_eq!(face.rotated(true).rotated(true), face.flipped());
        assert_eq!(face.flipped().flipped(), face);
        assert!(!face.is_uniform());
        assert!(Face::filled(4, Color::Orange).is_uniform());
    }
}
