// demos/neighbor_walk.rs

use tracing_subscriber::EnvFilter;
use xs_geotri::{cell_to_children, find_ancestor, neighbors, Direction, GeoTri, GeoTriError};

fn main() -> Result<(), GeoTriError> {
  // RUST_LOG=xs_geotri=trace shows every traversal stage.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  println!("--- Geo-Triangle Neighbor Walk ---");

  let cell: GeoTri = "12.11".parse()?;
  println!("Cell: {cell:?}");

  for dir in [Direction::East, Direction::North, Direction::West] {
    let ancestor = find_ancestor(cell, dir)?;
    println!("  {dir:<5} ancestor: {ancestor}");
  }

  let around = neighbors(cell);
  for dir in [Direction::East, Direction::North, Direction::West] {
    println!("  {dir:<5} neighbor: {:?}", around[dir as usize]);
  }

  // Walk east around the north cap: five steps return to the start.
  let start = GeoTri::from_path(&[0, 0]);
  let mut current = start;
  print!("East around the north cap: {current}");
  for _ in 0..5 {
    current = current.find_neighbor(Direction::East);
    print!(" -> {current}");
  }
  println!();
  println!("Back at start: {}", current == start);

  println!("Children of {}:", current.truncate(0));
  for child in cell_to_children(current.truncate(0))? {
    println!("  {child:?}");
  }

  Ok(())
}
