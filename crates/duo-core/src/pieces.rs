//! Pieces module - the 21-piece Blokus shape catalog
//!
//! Every piece exposes up to 8 orientations: bit 0 selects the mirrored
//! variant, bits 1-2 count clockwise quarter turns. Symmetric pieces produce
//! fewer distinct patterns (the X pentomino has one, a straight piece two);
//! duplicates are removed at build time so enumeration never visits the same
//! cell pattern twice.
//!
//! Offsets are kept raw (possibly negative, as the rotation transform leaves
//! them) together with an anchor-correction offset that shifts the bounding
//! box to start at the anchor. An absolute board cell is
//! `anchor + correction + offset`, so a placement's anchor is always the
//! minimum corner of its bounding box.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use duo_types::{Coord, Move, MAX_PIECE_CELLS, ORIENTATIONS, PIECE_COUNT};

/// Relative cell offsets of one orientation
pub type CellOffsets = ArrayVec<Coord, MAX_PIECE_CELLS>;

/// Base shapes, cells listed in catalog order. Index = piece id.
///
/// Sizes run 1..=5: monomino, domino, two triominoes, the five tetrominoes,
/// then the twelve pentominoes in conventional F..Z naming order.
const BASE_SHAPES: [&[(i8, i8)]; PIECE_COUNT] = [
    &[(0, 0)],                                 // 0: O1
    &[(0, 0), (1, 0)],                         // 1: I2
    &[(0, 0), (1, 0), (2, 0)],                 // 2: I3
    &[(0, 0), (1, 0), (0, 1)],                 // 3: V3
    &[(0, 0), (1, 0), (2, 0), (3, 0)],         // 4: I4
    &[(0, 0), (1, 0), (0, 1), (1, 1)],         // 5: O4
    &[(0, 0), (1, 0), (2, 0), (1, 1)],         // 6: T4
    &[(0, 0), (1, 0), (2, 0), (0, 1)],         // 7: L4
    &[(1, 0), (2, 0), (0, 1), (1, 1)],         // 8: S4
    &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)], // 9: F5
    &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], // 10: I5
    &[(0, 0), (1, 0), (2, 0), (3, 0), (0, 1)], // 11: L5
    &[(2, 0), (3, 0), (0, 1), (1, 1), (2, 1)], // 12: N5
    &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)], // 13: P5
    &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)], // 14: T5
    &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)], // 15: U5
    &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)], // 16: V5
    &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)], // 17: W5
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)], // 18: X5
    &[(1, 0), (0, 1), (1, 1), (2, 1), (3, 1)], // 19: Y5
    &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)], // 20: Z5
];

/// One distinct orientation of a piece
#[derive(Debug, Clone)]
pub struct Orientation {
    /// Canonical orientation id (the lowest id producing this pattern)
    pub dir: u8,
    /// Raw cell offsets in catalog order, possibly negative
    pub cells: CellOffsets,
    /// Anchor correction: shifts the minimum corner onto the anchor
    pub correction: Coord,
    /// Bounding box width after correction
    pub width: i8,
    /// Bounding box height after correction
    pub height: i8,
}

impl Orientation {
    /// Absolute cells of this orientation placed at `anchor`
    pub fn cells_at(&self, anchor: Coord) -> CellOffsets {
        self.cells
            .iter()
            .map(|c| {
                Coord::new(
                    anchor.x + self.correction.x + c.x,
                    anchor.y + self.correction.y + c.y,
                )
            })
            .collect()
    }
}

/// One piece: its size and the distinct orientations it can be placed in
#[derive(Debug, Clone)]
pub struct Piece {
    pub id: u8,
    pub size: usize,
    orientations: Vec<Orientation>,
    /// Maps every orientation id 0-7 to its canonical entry
    canonical: [u8; ORIENTATIONS],
}

impl Piece {
    /// Distinct orientations (duplicates removed)
    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }

    /// Orientation data for any id 0-7, following symmetry aliases
    pub fn orientation(&self, dir: u8) -> &Orientation {
        &self.orientations[self.canonical[dir as usize & 0x7] as usize]
    }
}

/// The process-lifetime shape catalog
#[derive(Debug)]
pub struct Catalog {
    pieces: Vec<Piece>,
}

impl Catalog {
    pub fn piece(&self, id: u8) -> &Piece {
        &self.pieces[id as usize]
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Ordered relative offsets of one piece orientation
    pub fn offsets(&self, piece: u8, dir: u8) -> &CellOffsets {
        &self.piece(piece).orientation(dir).cells
    }

    /// Anchor-correction offset of one piece orientation
    pub fn anchor_correction(&self, piece: u8, dir: u8) -> Coord {
        self.piece(piece).orientation(dir).correction
    }

    /// Absolute board cells of a placement move, in catalog offset order
    pub fn absolute_cells(&self, mv: Move) -> CellOffsets {
        debug_assert!(mv.is_placement());
        self.piece(mv.piece())
            .orientation(mv.orientation())
            .cells_at(mv.anchor())
    }
}

/// Access the shared catalog, building it on first use
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

fn build_catalog() -> Catalog {
    let pieces = BASE_SHAPES
        .iter()
        .enumerate()
        .map(|(id, base)| build_piece(id as u8, base))
        .collect();
    Catalog { pieces }
}

fn build_piece(id: u8, base: &[(i8, i8)]) -> Piece {
    let mut orientations: Vec<Orientation> = Vec::new();
    let mut canonical = [0u8; ORIENTATIONS];
    // Normalized-and-sorted cell sets already seen, for symmetry dedup
    let mut seen: Vec<Vec<Coord>> = Vec::new();

    for dir in 0..ORIENTATIONS as u8 {
        let cells: CellOffsets = base
            .iter()
            .map(|&(x, y)| transform(Coord::new(x, y), dir))
            .collect();

        let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
        let max_x = cells.iter().map(|c| c.x).max().unwrap_or(0);
        let max_y = cells.iter().map(|c| c.y).max().unwrap_or(0);

        let mut key: Vec<Coord> = cells
            .iter()
            .map(|c| Coord::new(c.x - min_x, c.y - min_y))
            .collect();
        key.sort();

        if let Some(idx) = seen.iter().position(|k| *k == key) {
            canonical[dir as usize] = idx as u8;
            continue;
        }

        canonical[dir as usize] = orientations.len() as u8;
        seen.push(key);
        orientations.push(Orientation {
            dir,
            cells,
            correction: Coord::new(-min_x, -min_y),
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        });
    }

    Piece {
        id,
        size: base.len(),
        orientations,
        canonical,
    }
}

/// Apply orientation `dir` to a base offset: mirror first (bit 0), then
/// clockwise quarter turns (bits 1-2).
fn transform(c: Coord, dir: u8) -> Coord {
    let mut x = c.x;
    let mut y = c.y;
    if dir & 1 != 0 {
        x = -x;
    }
    for _ in 0..(dir >> 1) {
        let (nx, ny) = (-y, x);
        x = nx;
        y = ny;
    }
    Coord::new(x, y)
}
