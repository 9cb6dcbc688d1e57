use crate::error::{Result, XyPlotError};
use serde::Deserialize;
use std::str::FromStr;
use strum_macros::{Display, EnumIter};

/// Lattice coordinates `(x, y, z)`
pub type Coord3 = (usize, usize, usize);

/// Flat index -> `(x, y, z)`, row-major with x fastest.
///
/// No bounds checking: an index `>= L^3` yields `z >= L`. `l` must be non-zero.
#[inline]
pub fn to_3d(index: usize, l: usize) -> Coord3 {
    let plane = l * l;
    let z = index / plane;
    let rest = index - z * plane;
    (rest % l, rest / l, z)
}

/// `(x, y, z)` -> flat index, `x + y*L + z*L^2`.
///
/// Out-of-range coordinates alias other sites (or wrap) rather than fail.
#[inline]
pub fn to_1d(x: usize, y: usize, z: usize, l: usize) -> usize {
    x.wrapping_add(y.wrapping_mul(l))
        .wrapping_add(z.wrapping_mul(l).wrapping_mul(l))
}

/// Axis held at zero by a cross-section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// Flat index of the in-plane site at 2D position `(i, j)`
    pub fn plane_site(self, i: usize, j: usize, l: usize) -> usize {
        match self {
            Axis::X => to_1d(0, i, j, l),
            Axis::Y => to_1d(i, 0, j, l),
            Axis::Z => to_1d(i, j, 0, l),
        }
    }

    pub fn coordinate(self, (x, y, z): Coord3) -> usize {
        match self {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        }
    }

    /// True if the site lies in this axis' zero plane
    pub fn contains(self, index: usize, l: usize) -> bool {
        self.coordinate(to_3d(index, l)) == 0
    }
}

impl FromStr for Axis {
    type Err = XyPlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(XyPlotError::InvalidAxis(other.to_string())),
        }
    }
}
