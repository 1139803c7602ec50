// src/traversal/ancestor.rs

use tracing::trace;

use crate::constants::FACES_PER_ROW;
use crate::geo_tri::{cell_at_depth, get_root_face, get_tile};
use crate::tables::stops_at;
use crate::types::{Direction, GeoTri, GeoTriError};

/// Finds the nearest common ancestor of `g` and its neighbor in `dir`.
///
/// Walks up from the leaf while the edge in `dir` is also an edge of the
/// parent. If some level's edge is interior, the ancestor is that level's
/// parent. If the walk reaches the root face, the face itself is the ancestor
/// when the crossing stays inside its ring (odd rows going north, even rows
/// going south); otherwise the crossing passes a pole and the ancestor is the
/// whole sphere.
///
/// # Returns
/// `InvalidDepth` if `g` is the sphere, which has no leaf to start from.
pub fn find_ancestor(g: GeoTri, dir: Direction) -> Result<GeoTri, GeoTriError> {
  let mut depth = g.depth.ok_or(GeoTriError::InvalidDepth)?;
  trace!(cell = ?g, %dir, "find_ancestor");

  while depth > 0 && !stops_at(get_tile(g, depth)?, dir) {
    depth -= 1;
  }
  if depth > 0 {
    return Ok(cell_at_depth(g, depth - 1));
  }

  let top_row = get_root_face(g) / FACES_PER_ROW;
  trace!(top_row, "ancestor search reached the root face");
  let stays_in_ring = match dir {
    Direction::North => top_row % 2 == 1,
    Direction::South => top_row % 2 == 0,
    Direction::East | Direction::West => false,
  };
  if stays_in_ring {
    Ok(cell_at_depth(g, 0))
  } else {
    Ok(GeoTri::SPHERE)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_interior_edge_stops_the_walk() {
    let g = GeoTri::from_path(&[0, 1, 0, 2, 3, 0, 0]);
    assert_eq!(find_ancestor(g, Direction::East), Ok(GeoTri::from_path(&[0, 1, 0])));
  }

  #[test]
  fn test_leaf_edge_interior_gives_parent() {
    // CENTER is interior in every direction, so its parent is always the ancestor.
    let g = GeoTri::from_path(&[6, 0, 2]);
    for dir in [Direction::East, Direction::North, Direction::West] {
      assert_eq!(find_ancestor(g, dir), Ok(GeoTri::from_path(&[6, 0])));
    }
  }

  #[test]
  fn test_north_from_even_row_crosses_the_pole() {
    assert_eq!(find_ancestor(GeoTri::from_path(&[0, 0]), Direction::North), Ok(GeoTri::SPHERE));
    assert_eq!(find_ancestor(GeoTri::from_path(&[12, 3]), Direction::North), Ok(GeoTri::SPHERE));
  }

  #[test]
  fn test_north_from_odd_row_stays_in_face() {
    assert_eq!(
      find_ancestor(GeoTri::from_path(&[16, 0]), Direction::North),
      Ok(GeoTri::from_path(&[16]))
    );
    assert_eq!(
      find_ancestor(GeoTri::from_path(&[7, 3, 0]), Direction::North),
      Ok(GeoTri::from_path(&[7]))
    );
  }

  #[test]
  fn test_east_west_at_root_is_sphere() {
    for face in [0, 7, 12, 19] {
      let g = GeoTri::from_path(&[face, 0]);
      assert_eq!(find_ancestor(g, Direction::East), Ok(GeoTri::SPHERE), "face {face}");
      assert_eq!(find_ancestor(g, Direction::West), Ok(GeoTri::SPHERE), "face {face}");
    }
  }

  #[test]
  fn test_bare_root_face() {
    assert_eq!(find_ancestor(GeoTri::from_path(&[3]), Direction::East), Ok(GeoTri::SPHERE));
    assert_eq!(
      find_ancestor(GeoTri::from_path(&[8]), Direction::North),
      Ok(GeoTri::from_path(&[8]))
    );
  }

  #[test]
  fn test_sphere_has_no_ancestor() {
    assert_eq!(find_ancestor(GeoTri::SPHERE, Direction::East), Err(GeoTriError::InvalidDepth));
  }
}
