// src/tables.rs

//! Icosahedron topology tables used by the neighbor traversal.
//!
//! Rows are indexed by `Tile` (or root face), columns by `Direction`:
//! East, North, West, South. The South column of every table is derived by
//! symmetry with North and has not been checked against the sphere geometry.

use crate::constants::{NUM_DIRECTIONS, NUM_ROOT_FACES, NUM_TILES};
use crate::types::{Direction, Tile};

/// Whether the edge of a child in a direction is interior to its parent.
///
/// `true` means the neighbor across that edge is a sibling, so the ancestor
/// search stops at this level.
#[rustfmt::skip]
pub(crate) static STOP_TABLE: [[bool; NUM_DIRECTIONS]; NUM_TILES] = [
    // EAST  NORTH  WEST   SOUTH
    [false, false, false, true ],  // VERT
    [true,  false, false, false],  // LEFT
    [true,  true,  true,  true ],  // CENTER
    [false, false, true,  false],  // RIGHT
];

/// Tile of the cell across an edge, inside the adjacent subtree.
///
/// Used both for the sibling step and, on same-chirality crossings, for
/// every level below it.
#[rustfmt::skip]
pub(crate) static SIBLING_TABLE: [[Tile; NUM_DIRECTIONS]; NUM_TILES] = [
    // EAST          NORTH         WEST          SOUTH
    [Tile::Left,   Tile::Center, Tile::Right,  Tile::Center],  // VERT
    [Tile::Center, Tile::Right,  Tile::Vert,   Tile::Right ],  // LEFT
    [Tile::Right,  Tile::Vert,   Tile::Left,   Tile::Vert  ],  // CENTER
    [Tile::Vert,   Tile::Left,   Tile::Center, Tile::Left  ],  // RIGHT
];

/// Neighboring root face in each direction.
///
/// Faces 0-4 form the north cap, 5-9 and 10-14 the equatorial rings, 15-19
/// the south cap.
#[rustfmt::skip]
pub(crate) static ROOT_NEIGHBORS: [[u8; NUM_DIRECTIONS]; NUM_ROOT_FACES as usize] = [
    // EAST NORTH WEST SOUTH
    [1,   3,  4,  5],   // face 0
    [2,   4,  0,  6],   // face 1
    [3,   0,  1,  7],   // face 2
    [4,   1,  2,  8],   // face 3
    [0,   2,  3,  9],   // face 4
    [10,  0, 14, 10],   // face 5
    [11,  1, 10, 11],   // face 6
    [12,  2, 11, 12],   // face 7
    [13,  3, 12, 13],   // face 8
    [14,  4, 13, 14],   // face 9
    [6,   5,  5, 15],   // face 10
    [7,   6,  6, 16],   // face 11
    [8,   7,  7, 17],   // face 12
    [9,   8,  8, 18],   // face 13
    [5,   9,  9, 19],   // face 14
    [16, 10, 19,  0],   // face 15
    [17, 11, 15,  1],   // face 16
    [18, 12, 16,  2],   // face 17
    [19, 13, 17,  3],   // face 18
    [15, 14, 18,  4],   // face 19
];

/// Tile remapping for crossings that flip chirality (through the polar caps).
///
/// `None` means the tile has no image across the edge; the level is left as is.
#[rustfmt::skip]
pub(crate) static REFLECTION_TABLE: [[Option<Tile>; NUM_DIRECTIONS]; NUM_TILES] = [
    // EAST              NORTH               WEST               SOUTH
    [Some(Tile::Vert), Some(Tile::Vert),   Some(Tile::Vert),  Some(Tile::Vert)  ],  // VERT
    [None,             Some(Tile::Left),   Some(Tile::Right), Some(Tile::Left)  ],  // LEFT
    [None,             Some(Tile::Center), None,              Some(Tile::Center)],  // CENTER
    [Some(Tile::Left), Some(Tile::Right),  None,              Some(Tile::Right) ],  // RIGHT
];

#[inline]
pub(crate) fn stops_at(tile: Tile, dir: Direction) -> bool {
  STOP_TABLE[tile as usize][dir as usize]
}

#[inline]
pub(crate) fn sibling_of(tile: Tile, dir: Direction) -> Tile {
  SIBLING_TABLE[tile as usize][dir as usize]
}

#[inline]
pub(crate) fn reflection_of(tile: Tile, dir: Direction) -> Option<Tile> {
  REFLECTION_TABLE[tile as usize][dir as usize]
}

/// Root face across `dir` from `face`, or `None` if `face` is not a root face.
#[inline]
pub(crate) fn root_neighbor(face: u8, dir: Direction) -> Option<u8> {
  ROOT_NEIGHBORS.get(face as usize).map(|row| row[dir as usize])
}
