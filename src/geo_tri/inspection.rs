// src/geo_tri/inspection.rs

use crate::constants::{
  EQUATORIAL_FIRST_FACE, EQUATORIAL_LAST_FACE, FACES_PER_ROW, MAX_DEPTH, NUM_ROOT_FACES, POLE_BAND_FIRST_FACE,
  POLE_BAND_LAST_FACE,
};
use crate::geo_tri::{get_root_face, path_mask};
use crate::types::GeoTri;

/// Returns whether `g` is a well-formed cell: depth at most 29, a root face
/// in range and no bits below its depth.
///
/// The sphere is valid only with a zero code.
#[must_use]
pub fn is_valid_cell(g: GeoTri) -> bool {
  match g.depth {
    None => g.code == 0,
    Some(depth) if depth > MAX_DEPTH => false,
    Some(depth) => get_root_face(g) < NUM_ROOT_FACES && g.code & !path_mask(depth) == 0,
  }
}

/// Gets the latitudinal ring of the cell's root face: 0 north cap, 1 and 2
/// equatorial, 3 south cap. `None` for the sphere.
#[must_use]
pub fn get_root_row(g: GeoTri) -> Option<u8> {
  g.depth.map(|_| get_root_face(g) / FACES_PER_ROW)
}

/// Returns whether `face` lies in the equatorial band (faces 5-14).
#[inline]
#[must_use]
pub const fn is_equatorial_face(face: u8) -> bool {
  EQUATORIAL_FIRST_FACE <= face && face <= EQUATORIAL_LAST_FACE
}

/// Returns whether `face` borders the southern polar cap (faces 10-14).
#[inline]
#[must_use]
pub const fn is_pole_band_face(face: u8) -> bool {
  POLE_BAND_FIRST_FACE <= face && face <= POLE_BAND_LAST_FACE
}

/// Gets the 20 depth-0 cells, one per icosahedron face, in face order.
#[must_use]
pub fn get_root_cells() -> [GeoTri; NUM_ROOT_FACES as usize] {
  let mut cells = [GeoTri::SPHERE; NUM_ROOT_FACES as usize];
  for (face, cell) in (0u8..).zip(cells.iter_mut()) {
    *cell = GeoTri::from_path(&[face]);
  }
  cells
}
