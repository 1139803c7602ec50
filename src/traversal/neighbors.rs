// src/traversal/neighbors.rs

use tracing::{debug, warn};

use crate::traversal::ancestor::find_ancestor;
use crate::traversal::descend::descend_to_neighbor;
use crate::traversal::sibling::step_to_sibling;
use crate::types::{Direction, GeoTri, GeoTriError};

/// Returns the cell sharing the edge of `g` in `dir`, at the same depth.
///
/// Never fails. If any stage reports an error (only possible for the sphere or
/// a malformed cell) the input is returned unchanged and a warning is logged.
#[must_use]
pub fn find_neighbor(g: GeoTri, dir: Direction) -> GeoTri {
  match try_find_neighbor(g, dir) {
    Ok(neighbor) => neighbor,
    Err(err) => {
      warn!(cell = ?g, %dir, %err, "neighbor lookup failed, returning the input cell");
      g
    }
  }
}

/// Same as [`find_neighbor`] but reports internal failures instead of hiding them.
pub fn try_find_neighbor(g: GeoTri, dir: Direction) -> Result<GeoTri, GeoTriError> {
  let ancestor = find_ancestor(g, dir)?;
  // The field to step is the one just below the ancestor; the sphere steps the root face.
  let mut depth = ancestor.depth.map_or(0, |d| d + 1);
  if g.depth < Some(depth) {
    // A bare root face is its own ancestor but has no level to step.
    depth = 0;
  }

  let stepped = step_to_sibling(g, dir, depth)?;
  let neighbor = descend_to_neighbor(stepped, dir, depth)?;
  debug!(cell = ?g, %dir, ancestor = ?ancestor, neighbor = ?neighbor, "found neighbor");
  Ok(neighbor)
}

/// Gets the neighbor of `g` in every direction, indexed by `Direction as usize`.
///
/// The `South` entry comes from unverified adjacency data.
#[must_use]
pub fn neighbors(g: GeoTri) -> [GeoTri; 4] {
  Direction::ALL.map(|dir| find_neighbor(g, dir))
}

/// Returns whether `destination` shares an edge with `origin` in one of the
/// verified directions (east, north, west).
///
/// # Returns
/// `InvalidDepth` if the cells are at different depths or either is the sphere.
pub fn are_neighbor_cells(origin: GeoTri, destination: GeoTri) -> Result<bool, GeoTriError> {
  if origin.depth.is_none() || origin.depth != destination.depth {
    return Err(GeoTriError::InvalidDepth);
  }
  if origin == destination {
    return Ok(false);
  }
  for dir in [Direction::East, Direction::North, Direction::West] {
    if try_find_neighbor(origin, dir)? == destination {
      return Ok(true);
    }
  }
  Ok(false)
}
