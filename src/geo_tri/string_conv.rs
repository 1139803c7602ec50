// src/geo_tri/string_conv.rs

use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_DEPTH, NUM_ROOT_FACES};
use crate::geo_tri::{geo_tri_from_path, get_path};
use crate::types::{GeoTri, GeoTriError};

/// Path string of the whole sphere.
pub const SPHERE_STR: &str = "SPHERE";

/// Converts a `GeoTri` into its path string.
///
/// The root face is printed as two decimal digits and each level as two
/// binary digits, joined by dots: `12.11.00`. The sphere prints as `SPHERE`.
#[must_use]
pub fn geo_tri_to_string(g: GeoTri) -> String {
  let path = get_path(g);
  let Some((root, levels)) = path.split_first() else {
    return SPHERE_STR.to_string();
  };
  let mut s = format!("{root:02}");
  for tile in levels {
    s.push_str(&format!(".{tile:02b}"));
  }
  s
}

/// Parses a path string as produced by `geo_tri_to_string`.
///
/// # Returns
/// `InvalidString` for malformed text, `InvalidSelector` for a root face
/// past 19, `InvalidDepth` for more than 30 fields.
pub fn string_to_geo_tri(s: &str) -> Result<GeoTri, GeoTriError> {
  if s == SPHERE_STR {
    return Ok(GeoTri::SPHERE);
  }

  let mut fields = s.split('.');
  let root_str = fields.next().unwrap_or_default();
  if root_str.is_empty() || root_str.len() > 2 || !root_str.bytes().all(|b| b.is_ascii_digit()) {
    return Err(GeoTriError::InvalidString);
  }
  let root: u8 = root_str.parse().map_err(|_| GeoTriError::InvalidString)?;
  if root >= NUM_ROOT_FACES {
    return Err(GeoTriError::InvalidSelector);
  }

  let mut path = vec![root];
  for field in fields {
    if field.len() != 2 || !field.bytes().all(|b| b == b'0' || b == b'1') {
      return Err(GeoTriError::InvalidString);
    }
    let tile = u8::from_str_radix(field, 2).map_err(|_| GeoTriError::InvalidString)?;
    path.push(tile);
  }
  if path.len() > MAX_DEPTH as usize + 1 {
    return Err(GeoTriError::InvalidDepth);
  }

  Ok(geo_tri_from_path(&path))
}

impl fmt::Display for GeoTri {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&geo_tri_to_string(*self))
  }
}

impl FromStr for GeoTri {
  type Err = GeoTriError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    string_to_geo_tri(s)
  }
}

/// `{ depth:  1, code: 0x3300000000000000, path: 12.11 }`.
///
/// The depth is two digits wide, except for the sphere: it has no numeric
/// depth, so that slot prints `--` (`{ depth: --, code: 0x0000000000000000, path: SPHERE }`).
impl fmt::Debug for GeoTri {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.depth {
      Some(depth) => write!(f, "{{ depth: {depth:2}, ")?,
      None => f.write_str("{ depth: --, ")?,
    }
    write!(f, "code: {:#018X}, path: {} }}", self.code, geo_tri_to_string(*self))
  }
}
