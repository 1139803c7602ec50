//! Geo-triangle core library constants.

// Grid system constants

/// Maximum subdivision depth; cells have 30 depths, numbered 0 through 29.
pub const MAX_DEPTH: u8 = 29;
/// The number of faces on an icosahedron, which are the root cells.
pub const NUM_ROOT_FACES: u8 = 20;
/// Root faces per latitudinal ring (north cap, two equatorial rings, south cap).
pub const FACES_PER_ROW: u8 = 5;
/// The number of children of a subdivided triangle.
pub const NUM_TILES: usize = 4;
/// The number of local edge directions.
pub const NUM_DIRECTIONS: usize = 4;

/// First root face of the equatorial band (rows 1 and 2).
pub const EQUATORIAL_FIRST_FACE: u8 = 5;
/// Last root face of the equatorial band.
pub const EQUATORIAL_LAST_FACE: u8 = 14;
/// First root face of the ring bordering the southern polar cap.
pub const POLE_BAND_FIRST_FACE: u8 = 10;
/// Last root face of the ring bordering the southern polar cap.
pub const POLE_BAND_LAST_FACE: u8 = 14;

// Code bit layout constants

/// Width in bits of the root face field.
pub const GEOTRI_ROOT_BITS: u32 = 6;
/// Width in bits of each level field.
pub const GEOTRI_PER_LEVEL_OFFSET: u32 = 2;
/// Offset of the root face field (the top 6 bits).
pub const GEOTRI_ROOT_OFFSET: u32 = GEOTRI_PER_LEVEL_OFFSET * MAX_DEPTH as u32;
/// Root face field value mask (unshifted).
pub const GEOTRI_ROOT_VALUE_MASK: u64 = (1 << GEOTRI_ROOT_BITS) - 1;
/// Root face field mask, in place.
pub const GEOTRI_ROOT_MASK: u64 = GEOTRI_ROOT_VALUE_MASK << GEOTRI_ROOT_OFFSET;
/// Level field value mask (unshifted).
pub const GEOTRI_LEVEL_MASK: u64 = 0x3;
