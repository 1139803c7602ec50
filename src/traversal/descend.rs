// src/traversal/descend.rs

use tracing::trace;

use crate::geo_tri::inspection::is_equatorial_face;
use crate::geo_tri::{get_tile, get_tile_at, with_tile_at};
use crate::tables::{reflection_of, sibling_of};
use crate::types::{Direction, GeoTri, GeoTriError};

/// Remaps every level below `depth` into the subtree that `step_to_sibling` moved to.
///
/// Crossings inside a root face, or into an equatorial face, keep their
/// chirality and reuse the sibling table. Crossings through the polar caps
/// flip it and go through the reflection table, where unmapped tiles stay put.
///
/// # Returns
/// `InvalidDepth` if `g` is the sphere or `depth` is below its leaf.
pub fn descend_to_neighbor(g: GeoTri, dir: Direction, depth: u8) -> Result<GeoTri, GeoTriError> {
  let leaf_depth = g.depth.ok_or(GeoTriError::InvalidDepth)?;
  if depth > leaf_depth {
    return Err(GeoTriError::InvalidDepth);
  }
  let ancestor_field = get_tile_at(g, depth)?;
  let same_chirality = depth > 0 || is_equatorial_face(ancestor_field);
  trace!(cell = ?g, depth, %dir, same_chirality, "descend_to_neighbor");

  let mut next = g;
  for r in (depth + 1)..=leaf_depth {
    let tile = get_tile(next, r)?;
    let mapped = if same_chirality {
      Some(sibling_of(tile, dir))
    } else {
      reflection_of(tile, dir)
    };
    if let Some(mapped) = mapped {
      next = with_tile_at(next, r, mapped as u8)?;
    }
  }
  Ok(next)
}
