// src/traversal/sibling.rs

use tracing::trace;

use crate::constants::FACES_PER_ROW;
use crate::geo_tri::inspection::is_pole_band_face;
use crate::geo_tri::{get_root_face, get_tile, with_tile_at};
use crate::tables::{root_neighbor, sibling_of};
use crate::types::{Direction, GeoTri, GeoTriError, Tile};

/// Next face in the same 5-face ring, wrapping from the last face back to the first.
#[inline]
const fn next_face_in_ring(face: u8) -> u8 {
  let ring_start = face - face % FACES_PER_ROW;
  ring_start + (face - ring_start + 1) % FACES_PER_ROW
}

/// Replaces the field at `depth` with the subtree adjacent across `dir`.
///
/// Below the root this is the sibling tile. At depth 0 it is the neighboring
/// root face. The five faces around the southern pole vertex need a
/// correction there: a north crossing from their `Right` child lands one face
/// further along the ring.
///
/// # Returns
/// `InvalidDepth` if `g` is the sphere or `depth` is below its leaf,
/// `InvalidSelector` if the root field does not hold a root face.
pub fn step_to_sibling(g: GeoTri, dir: Direction, depth: u8) -> Result<GeoTri, GeoTriError> {
  if g.depth.map_or(true, |leaf| depth > leaf) {
    return Err(GeoTriError::InvalidDepth);
  }
  let next = if depth > 0 {
    let tile = get_tile(g, depth)?;
    let sibling = sibling_of(tile, dir);
    trace!(depth, %tile, %sibling, %dir, "step_to_sibling");
    sibling as u8
  } else {
    let face = get_root_face(g);
    let mut neighbor = root_neighbor(face, dir).ok_or(GeoTriError::InvalidSelector)?;
    if is_pole_band_face(face) && dir == Direction::North && g.depth > Some(0) && get_tile(g, 1)? == Tile::Right {
      neighbor = next_face_in_ring(neighbor);
      trace!(face, neighbor, "pole vertex correction");
    }
    trace!(face, neighbor, %dir, "step_to_sibling at root");
    neighbor
  };
  with_tile_at(g, depth, next)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_next_face_in_ring() {
    assert_eq!(next_face_in_ring(5), 6);
    assert_eq!(next_face_in_ring(8), 9);
    assert_eq!(next_face_in_ring(9), 5);
    assert_eq!(next_face_in_ring(14), 10);
  }

  #[test]
  fn test_interior_step() {
    let g = GeoTri::from_path(&[0, 1, 0, 2, 3, 0, 0]);
    assert_eq!(
      step_to_sibling(g, Direction::East, 3),
      Ok(GeoTri::from_path(&[0, 1, 0, 3, 3, 0, 0]))
    );
  }

  #[test]
  fn test_root_step() {
    assert_eq!(
      step_to_sibling(GeoTri::from_path(&[0, 0]), Direction::North, 0),
      Ok(GeoTri::from_path(&[3, 0]))
    );
    assert_eq!(
      step_to_sibling(GeoTri::from_path(&[16, 2]), Direction::East, 0),
      Ok(GeoTri::from_path(&[17, 2]))
    );
  }

  #[test]
  fn test_pole_correction_on_north_crossing() {
    assert_eq!(
      step_to_sibling(GeoTri::from_path(&[12, 3]), Direction::North, 0),
      Ok(GeoTri::from_path(&[8, 3]))
    );
    assert_eq!(
      step_to_sibling(GeoTri::from_path(&[14, 3]), Direction::North, 0),
      Ok(GeoTri::from_path(&[5, 3]))
    );
    // Only the RIGHT child is corrected.
    assert_eq!(
      step_to_sibling(GeoTri::from_path(&[12, 0]), Direction::North, 0),
      Ok(GeoTri::from_path(&[7, 0]))
    );
  }

  #[test]
  fn test_no_pole_correction_on_east_crossing() {
    assert_eq!(
      step_to_sibling(GeoTri::from_path(&[12, 3]), Direction::East, 0),
      Ok(GeoTri::from_path(&[8, 3]))
    );
  }

  #[test]
  fn test_no_pole_correction_outside_the_band() {
    assert_eq!(
      step_to_sibling(GeoTri::from_path(&[7, 3]), Direction::North, 0),
      Ok(GeoTri::from_path(&[2, 3]))
    );
  }

  #[test]
  fn test_bad_root_face() {
    let g = GeoTri::from_path(&[25, 0]);
    assert_eq!(step_to_sibling(g, Direction::East, 0), Err(GeoTriError::InvalidSelector));
  }

  #[test]
  fn test_depth_out_of_range() {
    let g = GeoTri::from_path(&[0, 0]);
    assert_eq!(step_to_sibling(g, Direction::East, 30), Err(GeoTriError::InvalidDepth));
  }

  #[test]
  fn test_depth_below_leaf_is_rejected() {
    let g = GeoTri::from_path(&[0, 0]);
    assert_eq!(step_to_sibling(g, Direction::East, 3), Err(GeoTriError::InvalidDepth));
    assert_eq!(step_to_sibling(g, Direction::East, 1), Ok(GeoTri::from_path(&[0, 1])));
    assert_eq!(
      step_to_sibling(GeoTri::SPHERE, Direction::East, 0),
      Err(GeoTriError::InvalidDepth)
    );
  }
}
