//! Core geo-triangle data structures.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Identifies a triangular cell of the subdivided icosahedron.
///
/// The 64-bit `code` holds the root face in its top 6 bits, followed by one
/// 2-bit `Tile` per level. Bits below `depth` are always zero. A `depth` of
/// `None` is the whole sphere: no root face selected.
///
/// Cells are plain values. Every operation returns a new `GeoTri`.
///
/// Deserializing rejects any `(code, depth)` pair that `is_valid_cell` would.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoTri"))]
pub struct GeoTri {
  pub(crate) code: u64,
  pub(crate) depth: Option<u8>,
}

/// Unchecked wire form of a `GeoTri`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGeoTri {
  code: u64,
  depth: Option<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoTri> for GeoTri {
  type Error = GeoTriError;

  fn try_from(raw: RawGeoTri) -> Result<Self, Self::Error> {
    let g = GeoTri {
      code: raw.code,
      depth: raw.depth,
    };
    if crate::geo_tri::inspection::is_valid_cell(g) {
      Ok(g)
    } else if raw.depth > Some(crate::constants::MAX_DEPTH) {
      Err(GeoTriError::InvalidDepth)
    } else {
      Err(GeoTriError::InvalidSelector)
    }
  }
}

impl GeoTri {
  /// The whole sphere. Also the "no common ancestor" result of the ancestor search.
  pub const SPHERE: GeoTri = GeoTri { code: 0, depth: None };

  /// Depth of the cell below its root face, or `None` for the whole sphere.
  #[inline]
  #[must_use]
  pub const fn depth(self) -> Option<u8> {
    self.depth
  }

  /// The packed 64-bit code.
  #[inline]
  #[must_use]
  pub const fn code(self) -> u64 {
    self.code
  }

  /// Returns true for the whole-sphere cell.
  #[inline]
  #[must_use]
  pub const fn is_sphere(self) -> bool {
    self.depth.is_none()
  }
}

/// Which of the four children of a subdivided triangle a cell occupies.
///
/// Splitting a triangle gives three corner children with the parent's
/// orientation (`Vert`, `Left`, `Right`) and one inverted `Center` child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Tile {
  /// Corner child at the parent's apex.
  #[default]
  Vert = 0,
  /// Corner child on the left.
  Left = 1,
  /// Inverted central child.
  Center = 2,
  /// Corner child on the right.
  Right = 3,
}

impl Tile {
  /// All tiles in code order.
  pub const ALL: [Tile; 4] = [Tile::Vert, Tile::Left, Tile::Center, Tile::Right];

  /// Decodes the low two bits of `bits`. Every 2-bit value is a tile.
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u8) -> Tile {
    match bits & 0x3 {
      0 => Tile::Vert,
      1 => Tile::Left,
      2 => Tile::Center,
      _ => Tile::Right,
    }
  }
}

impl TryFrom<u8> for Tile {
  type Error = GeoTriError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0..=3 => Ok(Tile::from_bits(value)),
      _ => Err(GeoTriError::InvalidSelector),
    }
  }
}

impl fmt::Display for Tile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Tile::Vert => "VERT",
      Tile::Left => "LEFT",
      Tile::Center => "CENTER",
      Tile::Right => "RIGHT",
    };
    f.pad(name)
  }
}

/// Compass-style label for an edge of a triangle in the grid's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  #[default]
  East = 0,
  North = 1,
  West = 2,
  /// Adjacency in this direction is derived by symmetry; neighbors found this way are unverified.
  South = 3,
}

impl Direction {
  /// All directions in code order.
  pub const ALL: [Direction; 4] = [Direction::East, Direction::North, Direction::West, Direction::South];
}

impl TryFrom<u8> for Direction {
  type Error = GeoTriError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Direction::East),
      1 => Ok(Direction::North),
      2 => Ok(Direction::West),
      3 => Ok(Direction::South),
      _ => Err(GeoTriError::InvalidSelector),
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Direction::East => "EAST",
      Direction::North => "NORTH",
      Direction::West => "WEST",
      Direction::South => "SOUTH",
    };
    f.pad(name)
  }
}

/// Represents a geo-triangle error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GeoTriError {
  /// Depth argument was outside of acceptable range, or there is no depth to work at.
  #[error("invalid depth, max depth is 29")]
  InvalidDepth = 1,
  /// Root face or tile value was outside of acceptable range.
  #[error("invalid selector, root faces are 0-19 and tiles are 0-3")]
  InvalidSelector = 2,
  /// Path string could not be parsed.
  #[error("invalid geo-triangle path string")]
  InvalidString = 3,
}
