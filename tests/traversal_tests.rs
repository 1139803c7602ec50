// tests/traversal_tests.rs

use xs_geotri::*;

fn cell(path: &[u8]) -> GeoTri {
  GeoTri::from_path(path)
}

#[test]
fn test_find_ancestor_examples() {
  assert_eq!(find_ancestor(cell(&[0, 1, 0, 2, 3, 0, 0]), Direction::East), Ok(cell(&[0, 1, 0])));
  assert_eq!(find_ancestor(cell(&[0, 0]), Direction::North), Ok(GeoTri::SPHERE));
  assert_eq!(find_ancestor(cell(&[16, 0]), Direction::North), Ok(cell(&[16])));
  assert_eq!(find_ancestor(cell(&[12, 3]), Direction::North), Ok(GeoTri::SPHERE));
}

#[test]
fn test_neighbors_of_north_cap_face_0() {
  let g = cell(&[0, 0]);
  assert_eq!(g.find_neighbor(Direction::East), cell(&[1, 0]));
  assert_eq!(g.find_neighbor(Direction::North), cell(&[3, 0]));
  assert_eq!(g.find_neighbor(Direction::West), cell(&[4, 0]));
}

#[test]
fn test_neighbors_of_north_cap_face_1() {
  let g = cell(&[1, 0]);
  assert_eq!(g.find_neighbor(Direction::East), cell(&[2, 0]));
  assert_eq!(g.find_neighbor(Direction::North), cell(&[4, 0]));
  assert_eq!(g.find_neighbor(Direction::West), cell(&[0, 0]));
}

#[test]
fn test_neighbors_across_the_southern_band() {
  let g = cell(&[12, 3]);
  assert_eq!(g.find_neighbor(Direction::East), cell(&[8, 0]));
  assert_eq!(g.find_neighbor(Direction::North), cell(&[8, 1]));
}

#[test]
fn test_neighbor_inside_a_face() {
  let g = cell(&[0, 1, 0, 2, 3, 0, 0]);
  assert_eq!(find_neighbor(g, Direction::East), cell(&[0, 1, 0, 3, 0, 1, 1]));
}

#[test]
fn test_center_and_corner_siblings_round_trip() {
  let center = cell(&[0, 1, 2]);
  let right = cell(&[0, 1, 3]);
  let left = cell(&[0, 1, 1]);
  assert_eq!(center.find_neighbor(Direction::East), right);
  assert_eq!(right.find_neighbor(Direction::West), center);
  assert_eq!(left.find_neighbor(Direction::East), center);
  assert_eq!(center.find_neighbor(Direction::West), left);
  assert_eq!(center.find_neighbor(Direction::North), cell(&[0, 1, 0]));
}

#[test]
fn test_neighbor_keeps_depth() {
  let mut path = vec![5];
  path.extend([2; 29]);
  let g = cell(&path);
  let mut expected = vec![5];
  expected.extend([2; 28]);
  expected.push(3);
  let neighbor = g.find_neighbor(Direction::East);
  assert_eq!(neighbor, cell(&expected));
  assert_eq!(neighbor.depth(), Some(29));
}

#[test]
fn test_verified_neighbors_stay_valid() {
  for face in 0..NUM_ROOT_FACES {
    for tile in 0..4 {
      for g in [cell(&[face, tile]), cell(&[face, tile, tile])] {
        for dir in [Direction::East, Direction::North, Direction::West] {
          let n = g.find_neighbor(dir);
          assert!(is_valid_cell(n), "{g:?} {dir} -> {n:?}");
          assert_eq!(n.depth(), g.depth(), "{g:?} {dir}");
        }
      }
    }
  }
}

#[test]
fn test_find_neighbor_fails_safe() {
  assert_eq!(GeoTri::SPHERE.find_neighbor(Direction::West), GeoTri::SPHERE);
  let garbage = cell(&[40, 0]);
  assert_eq!(garbage.find_neighbor(Direction::East), garbage);
  assert!(try_find_neighbor(garbage, Direction::East).is_err());
}

#[test]
fn test_are_neighbor_cells() {
  assert_eq!(are_neighbor_cells(cell(&[12, 3]), cell(&[8, 1])), Ok(true));
  assert_eq!(are_neighbor_cells(cell(&[1, 0]), cell(&[3, 0])), Ok(false));
}
