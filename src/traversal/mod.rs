// src/traversal/mod.rs
#![allow(clippy::module_name_repetitions)]

// Neighbor lookup runs in three stages over the same cell value:
// ancestor search, sibling step, then descent back to the leaf depth.
pub mod ancestor;
pub mod descend;
pub mod neighbors;
pub mod sibling;

// Re-export public API functions

pub use ancestor::find_ancestor;
pub use descend::descend_to_neighbor;
pub use neighbors::{are_neighbor_cells, find_neighbor, neighbors, try_find_neighbor};
pub use sibling::step_to_sibling;
