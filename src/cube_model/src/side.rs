use std::fmt;

/// One of the six facelet colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [White, Yellow, Green, Blue, Red, Orange];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The single-letter name used when rendering a cube net.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A face of the cube, named by where it sits relative to the viewer.
///
/// Every side stores its facelets as a row-major grid. The four lateral sides
/// are viewed from outside with row zero nearest `Up`. `Up` is viewed from
/// above with row zero nearest `Back`, and `Down` from below with row zero
/// nearest `Front`; in both, column zero is nearest `Left`. Laid flat this is
/// the usual unfolded net.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Self; 6] = {
        use Side::*;
        let v = [Up, Down, Front, Back, Left, Right];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The sides around the `Up`/`Down` axis, in the order a clockwise `D`
    /// turn carries pieces.
    pub const LATERAL: [Self; 4] = [Side::Front, Side::Right, Side::Back, Side::Left];

    /// The color this side shows in the solved, standard configuration.
    #[must_use]
    pub fn standard_color(self) -> Color {
        match self {
            Side::Up => Color::Green,
            Side::Down => Color::Blue,
            Side::Front => Color::Yellow,
            Side::Back => Color::White,
            Side::Left => Color::Orange,
            Side::Right => Color::Red,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Up => Side::Down,
            Side::Down => Side::Up,
            Side::Front => Side::Back,
            Side::Back => Side::Front,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Up => "up",
            Side::Down => "down",
            Side::Front => "front",
            Side::Back => "back",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}
