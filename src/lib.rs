#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Error cases are listed in the function docs
#![allow(clippy::cast_possible_truncation)] // Field values are masked before narrowing
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended
#![allow(clippy::unreadable_literal)] // Bit layouts read better unseparated
#![allow(clippy::wildcard_imports)] // Allow for re-exporting from modules

//! `xs-geotri` is a hierarchical triangular index of the sphere.
//!
//! The sphere is split into the 20 faces of an icosahedron and each face is
//! recursively split into 4 triangles, down to depth 29. A cell is a packed
//! 64-bit code that can be truncated to its ancestors and walked to the cell
//! across any of its edges, including across face boundaries and the poles.

// Declare modules
pub mod constants;
pub mod geo_tri;
pub mod hierarchy;
mod tables;
pub mod traversal;
pub mod types;

// Re-export key public types and functions for easier use
pub use constants::{MAX_DEPTH, NUM_ROOT_FACES};
pub use types::{Direction, GeoTri, GeoTriError, Tile};

pub use geo_tri::inspection::{get_root_cells, get_root_row, is_equatorial_face, is_pole_band_face, is_valid_cell};
pub use geo_tri::string_conv::{geo_tri_to_string, string_to_geo_tri};
pub use geo_tri::{
  cell_at_depth, geo_tri_from_path, geo_tri_try_from_path, get_path, get_root_face, get_tile, get_tile_at, path_mask,
};
pub use hierarchy::{cell_to_center_child, cell_to_child_pos, cell_to_children, cell_to_parent, child_pos_to_cell};
pub use traversal::{are_neighbor_cells, find_ancestor, find_neighbor, neighbors, try_find_neighbor};
