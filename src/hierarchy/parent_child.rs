// src/hierarchy/parent_child.rs

use crate::constants::{GEOTRI_LEVEL_MASK, GEOTRI_PER_LEVEL_OFFSET, MAX_DEPTH};
use crate::geo_tri::inspection::{get_root_cells, is_valid_cell};
use crate::geo_tri::{cell_at_depth, path_mask, with_tile_at};
use crate::types::{GeoTri, GeoTriError, Tile};

/// Depth of the children of `g`, checking that it has any.
fn child_depth(g: GeoTri) -> Result<u8, GeoTriError> {
  match g.depth {
    Some(depth) if depth < MAX_DEPTH => Ok(depth + 1),
    _ => Err(GeoTriError::InvalidDepth),
  }
}

/// Produces the ancestor of `g` at `parent_depth`.
///
/// A cell is its own parent at its own depth.
pub fn cell_to_parent(g: GeoTri, parent_depth: u8) -> Result<GeoTri, GeoTriError> {
  match g.depth {
    Some(depth) if parent_depth <= depth => Ok(cell_at_depth(g, parent_depth)),
    _ => Err(GeoTriError::InvalidDepth),
  }
}

/// Returns the children of `g` in tile order.
///
/// The children of the sphere are the 20 root faces. Cells at depth 29 have none.
pub fn cell_to_children(g: GeoTri) -> Result<Vec<GeoTri>, GeoTriError> {
  if g.is_sphere() {
    return Ok(get_root_cells().to_vec());
  }
  let depth = child_depth(g)?;
  let parent = GeoTri { depth: Some(depth), ..g };
  Tile::ALL
    .iter()
    .map(|&tile| with_tile_at(parent, depth, tile as u8))
    .collect()
}

/// Returns the `Center` child of `g`.
pub fn cell_to_center_child(g: GeoTri) -> Result<GeoTri, GeoTriError> {
  let depth = child_depth(g)?;
  with_tile_at(GeoTri { depth: Some(depth), ..g }, depth, Tile::Center as u8)
}

/// Returns the position of `child` among all descendants of its ancestor at
/// `parent_depth`, counting in path order.
///
/// There are `4^(depth - parent_depth)` positions, so the position is just
/// the tile bits between the two depths.
pub fn cell_to_child_pos(child: GeoTri, parent_depth: u8) -> Result<u64, GeoTriError> {
  if !is_valid_cell(child) {
    return Err(GeoTriError::InvalidSelector);
  }
  let depth = child.depth.ok_or(GeoTriError::InvalidDepth)?;
  if parent_depth > depth {
    return Err(GeoTriError::InvalidDepth);
  }
  let below = child.code & !path_mask(parent_depth);
  Ok(below >> (GEOTRI_PER_LEVEL_OFFSET * u32::from(MAX_DEPTH - depth)))
}

/// Returns the descendant of `parent` at `child_depth` with position `child_pos`.
///
/// Inverse of [`cell_to_child_pos`].
pub fn child_pos_to_cell(child_pos: u64, parent: GeoTri, child_depth: u8) -> Result<GeoTri, GeoTriError> {
  let depth = parent.depth.ok_or(GeoTriError::InvalidDepth)?;
  if child_depth < depth || child_depth > MAX_DEPTH {
    return Err(GeoTriError::InvalidDepth);
  }
  let levels = u32::from(child_depth - depth);
  if child_pos > level_bits(levels) {
    return Err(GeoTriError::InvalidSelector);
  }
  let mut child = GeoTri {
    depth: Some(child_depth),
    ..parent
  };
  for r in (depth + 1)..=child_depth {
    let shift = GEOTRI_PER_LEVEL_OFFSET * u32::from(child_depth - r);
    let tile = ((child_pos >> shift) & GEOTRI_LEVEL_MASK) as u8;
    child = with_tile_at(child, r, tile)?;
  }
  Ok(child)
}

/// Mask of the low `2 * levels` bits.
#[inline]
const fn level_bits(levels: u32) -> u64 {
  if levels >= 32 {
    u64::MAX
  } else {
    (1u64 << (GEOTRI_PER_LEVEL_OFFSET * levels)) - 1
  }
}
