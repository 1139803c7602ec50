// src/geo_tri/mod.rs

pub mod inspection;
pub mod string_conv;

use crate::constants::{
  GEOTRI_LEVEL_MASK, GEOTRI_PER_LEVEL_OFFSET, GEOTRI_ROOT_MASK, GEOTRI_ROOT_OFFSET, GEOTRI_ROOT_VALUE_MASK, MAX_DEPTH,
  NUM_ROOT_FACES, NUM_TILES,
};
use crate::types::{Direction, GeoTri, GeoTriError, Tile};

pub use inspection::{get_root_cells, is_valid_cell};
pub use string_conv::{geo_tri_to_string, string_to_geo_tri};

// GeoTri bit layout accessors/mutators

/// Bit offset of the level field at `depth` (1-based level number).
#[inline(always)]
const fn level_offset(depth: u8) -> u32 {
  GEOTRI_PER_LEVEL_OFFSET * (MAX_DEPTH - depth) as u32
}

/// Reads a field without range checks. `depth` must be at most `MAX_DEPTH`.
#[inline(always)]
const fn field_at(code: u64, depth: u8) -> u8 {
  if depth == 0 {
    ((code >> GEOTRI_ROOT_OFFSET) & GEOTRI_ROOT_VALUE_MASK) as u8
  } else {
    ((code >> level_offset(depth)) & GEOTRI_LEVEL_MASK) as u8
  }
}

/// Mask keeping the root field and every level field down to `depth`.
///
/// The top `6 + 2 * depth` bits are set; at or past `MAX_DEPTH` every bit is set.
#[inline]
#[must_use]
pub const fn path_mask(depth: u8) -> u64 {
  if depth >= MAX_DEPTH {
    return u64::MAX;
  }
  u64::MAX << level_offset(depth)
}

/// Gets the root face (icosahedron face 0-19) of the cell. Zero for the sphere.
#[inline(always)]
#[must_use]
pub const fn get_root_face(g: GeoTri) -> u8 {
  field_at(g.code, 0)
}

/// Gets the raw value stored at `depth`: the root face at depth 0, the 2-bit tile otherwise.
pub fn get_tile_at(g: GeoTri, depth: u8) -> Result<u8, GeoTriError> {
  if depth > MAX_DEPTH {
    return Err(GeoTriError::InvalidDepth);
  }
  Ok(field_at(g.code, depth))
}

/// Gets the `Tile` at level `depth` (1-29). Depth 0 holds a face, not a tile.
pub fn get_tile(g: GeoTri, depth: u8) -> Result<Tile, GeoTriError> {
  if depth == 0 {
    return Err(GeoTriError::InvalidDepth);
  }
  get_tile_at(g, depth).map(Tile::from_bits)
}

/// Returns a copy of `g` with the field at `depth` replaced by `value`.
///
/// Depth 0 writes the 6-bit root field, deeper levels their 2-bit field. No
/// other bit changes, including the depth.
pub(crate) fn with_tile_at(g: GeoTri, depth: u8, value: u8) -> Result<GeoTri, GeoTriError> {
  if depth > MAX_DEPTH {
    return Err(GeoTriError::InvalidDepth);
  }
  let (mask, bits) = if depth == 0 {
    (GEOTRI_ROOT_MASK, u64::from(value) << GEOTRI_ROOT_OFFSET)
  } else {
    let offset = level_offset(depth);
    (GEOTRI_LEVEL_MASK << offset, u64::from(value) << offset)
  };
  Ok(GeoTri {
    code: (g.code & !mask) | (bits & mask),
    depth: g.depth,
  })
}

/// Builds a cell from its path: root face first, then one tile per level.
///
/// An empty path is the whole sphere. Entries past depth 29 are ignored.
/// Values are not range checked, only masked to their field width; see
/// `geo_tri_try_from_path` for the checked form.
#[must_use]
pub fn geo_tri_from_path(path: &[u8]) -> GeoTri {
  let Some((&root, levels)) = path.split_first() else {
    return GeoTri::SPHERE;
  };
  let levels = &levels[..levels.len().min(MAX_DEPTH as usize)];

  let mut code = u64::from(root) & GEOTRI_ROOT_VALUE_MASK;
  for &tile in levels {
    code = (code << GEOTRI_PER_LEVEL_OFFSET) | (u64::from(tile) & GEOTRI_LEVEL_MASK);
  }
  let depth = levels.len() as u8;
  code <<= level_offset(depth);

  GeoTri { code, depth: Some(depth) }
}

/// Builds a cell from its path, rejecting out of range values.
///
/// # Errors
/// `InvalidSelector` for a root face past 19 or a tile past 3, `InvalidDepth`
/// for a path longer than 30 entries.
pub fn geo_tri_try_from_path(path: &[u8]) -> Result<GeoTri, GeoTriError> {
  if path.len() > MAX_DEPTH as usize + 1 {
    return Err(GeoTriError::InvalidDepth);
  }
  if let Some((&root, levels)) = path.split_first() {
    if root >= NUM_ROOT_FACES || levels.iter().any(|&t| t as usize >= NUM_TILES) {
      return Err(GeoTriError::InvalidSelector);
    }
  }
  Ok(geo_tri_from_path(path))
}

/// Truncates `g` to the coarser `depth`, clearing every deeper level.
///
/// Returns `g` unchanged if it is the sphere or already at or above `depth`.
#[must_use]
pub fn cell_at_depth(g: GeoTri, depth: u8) -> GeoTri {
  match g.depth {
    Some(current) if depth < current => GeoTri {
      code: g.code & path_mask(depth),
      depth: Some(depth),
    },
    _ => g,
  }
}

/// Gets the path of `g`: root face, then the tile of each level. Empty for the sphere.
#[must_use]
pub fn get_path(g: GeoTri) -> Vec<u8> {
  match g.depth {
    Some(depth) => (0..=depth.min(MAX_DEPTH)).map(|r| field_at(g.code, r)).collect(),
    None => Vec::new(),
  }
}

impl GeoTri {
  /// See [`geo_tri_from_path`].
  #[must_use]
  pub fn from_path(path: &[u8]) -> GeoTri {
    geo_tri_from_path(path)
  }

  /// See [`geo_tri_try_from_path`].
  pub fn try_from_path(path: &[u8]) -> Result<GeoTri, GeoTriError> {
    geo_tri_try_from_path(path)
  }

  /// See [`get_tile_at`].
  pub fn tile_at(self, depth: u8) -> Result<u8, GeoTriError> {
    get_tile_at(self, depth)
  }

  /// See [`get_root_face`].
  #[must_use]
  pub const fn root_face(self) -> u8 {
    get_root_face(self)
  }

  /// See [`cell_at_depth`].
  #[must_use]
  pub fn truncate(self, depth: u8) -> GeoTri {
    cell_at_depth(self, depth)
  }

  /// See [`get_path`].
  #[must_use]
  pub fn path(self) -> Vec<u8> {
    get_path(self)
  }

  /// Neighbor across the edge in `dir`. See [`crate::traversal::find_neighbor`].
  #[must_use]
  pub fn find_neighbor(self, dir: Direction) -> GeoTri {
    crate::traversal::find_neighbor(self, dir)
  }
}
