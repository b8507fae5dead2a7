//! Named corner and edge positions and the facelets they cover.

use std::fmt;

use crate::{
    model::Cube,
    side::{Color, Side},
};

/// The address of a single facelet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub side: Side,
    pub row: usize,
    pub col: usize,
}

impl Facelet {
    pub fn color(self, cube: &Cube) -> Color {
        cube.face(self.side).get(self.row, self.col)
    }

    /// Returns `true` if the facelet shows the color of the side it sits on.
    pub fn is_in_place(self, cube: &Cube) -> bool {
        self.color(cube) == cube.center(self.side)
    }
}

#[derive(Debug, Copy, Clone)]
enum Extent {
    First,
    Middle,
    Last,
}

impl Extent {
    fn at(self, dimension: usize) -> usize {
        match self {
            Extent::First => 0,
            Extent::Middle => dimension / 2,
            Extent::Last => dimension - 1,
        }
    }
}

type Coordinate = (Side, Extent, Extent);

fn resolve((side, row, col): Coordinate, dimension: usize) -> Facelet {
    Facelet {
        side,
        row: row.at(dimension),
        col: col.at(dimension),
    }
}

/// A corner slot, named by its sides with the `Up`/`Down` side first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Corner {
    Ufl,
    Urf,
    Ubr,
    Ulb,
    Dlf,
    Dfr,
    Drb,
    Dbl,
}

/// An edge slot. Top and bottom edges start with their `Up`/`Down` side, the
/// middle edges with their `Front`/`Back` side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Uf,
    Ur,
    Ub,
    Ul,
    Df,
    Dr,
    Db,
    Dl,
    Fr,
    Fl,
    Br,
    Bl,
}

impl Corner {
    pub const ALL: [Self; 8] = {
        use Corner::*;
        let v = [Ufl, Urf, Ubr, Ulb, Dlf, Dfr, Drb, Dbl];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub const UPPER: [Self; 4] = [Corner::Ufl, Corner::Urf, Corner::Ubr, Corner::Ulb];

    fn coordinates(self) -> [Coordinate; 3] {
        use Extent::{First, Last};
        use Side::{Back, Down, Front, Left, Right, Up};

        match self {
            Corner::Ufl => [(Up, Last, First), (Front, First, First), (Left, First, Last)],
            Corner::Urf => [(Up, Last, Last), (Right, First, First), (Front, First, Last)],
            Corner::Ubr => [(Up, First, Last), (Back, First, First), (Right, First, Last)],
            Corner::Ulb => [(Up, First, First), (Left, First, First), (Back, First, Last)],
            Corner::Dlf => [(Down, First, First), (Left, Last, Last), (Front, Last, First)],
            Corner::Dfr => [(Down, First, Last), (Front, Last, Last), (Right, Last, First)],
            Corner::Drb => [(Down, Last, Last), (Right, Last, Last), (Back, Last, First)],
            Corner::Dbl => [(Down, Last, First), (Back, Last, Last), (Left, Last, First)],
        }
    }

    pub fn facelets(self, dimension: usize) -> [Facelet; 3] {
        self.coordinates()
            .map(|coordinate| resolve(coordinate, dimension))
    }

    pub fn sides(self) -> [Side; 3] {
        self.coordinates().map(|(side, _, _)| side)
    }

    pub fn colors(self, cube: &Cube) -> [Color; 3] {
        self.facelets(cube.dimension()).map(|facelet| facelet.color(cube))
    }

    /// Returns `true` if every facelet of the slot matches its side's center.
    pub fn is_in_place(self, cube: &Cube) -> bool {
        self.facelets(cube.dimension())
            .into_iter()
            .all(|facelet| facelet.is_in_place(cube))
    }

    pub fn has_color(self, cube: &Cube, color: Color) -> bool {
        self.colors(cube).contains(&color)
    }
}

impl Edge {
    pub const ALL: [Self; 12] = {
        use Edge::*;
        let v = [Uf, Ur, Ub, Ul, Df, Dr, Db, Dl, Fr, Fl, Br, Bl];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub const UPPER: [Self; 4] = [Edge::Uf, Edge::Ur, Edge::Ub, Edge::Ul];

    pub const MIDDLE: [Self; 4] = [Edge::Fr, Edge::Fl, Edge::Br, Edge::Bl];

    fn coordinates(self) -> [Coordinate; 2] {
        use Extent::{First, Last, Middle};
        use Side::{Back, Down, Front, Left, Right, Up};

        match self {
            Edge::Uf => [(Up, Last, Middle), (Front, First, Middle)],
            Edge::Ur => [(Up, Middle, Last), (Right, First, Middle)],
            Edge::Ub => [(Up, First, Middle), (Back, First, Middle)],
            Edge::Ul => [(Up, Middle, First), (Left, First, Middle)],
            Edge::Df => [(Down, First, Middle), (Front, Last, Middle)],
            Edge::Dr => [(Down, Middle, Last), (Right, Last, Middle)],
            Edge::Db => [(Down, Last, Middle), (Back, Last, Middle)],
            Edge::Dl => [(Down, Middle, First), (Left, Last, Middle)],
            Edge::Fr => [(Front, Middle, Last), (Right, Middle, First)],
            Edge::Fl => [(Front, Middle, First), (Left, Middle, Last)],
            Edge::Br => [(Back, Middle, First), (Right, Middle, Last)],
            Edge::Bl => [(Back, Middle, Last), (Left, Middle, First)],
        }
    }

    pub fn facelets(self, dimension: usize) -> [Facelet; 2] {
        self.coordinates()
            .map(|coordinate| resolve(coordinate, dimension))
    }

    pub fn sides(self) -> [Side; 2] {
        self.coordinates().map(|(side, _, _)| side)
    }

    pub fn colors(self, cube: &Cube) -> [Color; 2] {
        self.facelets(cube.dimension()).map(|facelet| facelet.color(cube))
    }

    /// Returns `true` if every facelet of the slot matches its side's center.
    pub fn is_in_place(self, cube: &Cube) -> bool {
        self.facelets(cube.dimension())
            .into_iter()
            .all(|facelet| facelet.is_in_place(cube))
    }

    pub fn has_color(self, cube: &Cube, color: Color) -> bool {
        self.colors(cube).contains(&color)
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Corner::Ufl => "UFL",
            Corner::Urf => "URF",
            Corner::Ubr => "UBR",
            Corner::Ulb => "ULB",
            Corner::Dlf => "DLF",
            Corner::Dfr => "DFR",
            Corner::Drb => "DRB",
            Corner::Dbl => "DBL",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Uf => "UF",
            Edge::Ur => "UR",
            Edge::Ub => "UB",
            Edge::Ul => "UL",
            Edge::Df => "DF",
            Edge::Dr => "DR",
            Edge::Db => "DB",
            Edge::Dl => "DL",
            Edge::Fr => "FR",
            Edge::Fl => "FL",
            Edge::Br => "BR",
            Edge::Bl => "BL",
        };
        f.write_str(name)
    }
}
