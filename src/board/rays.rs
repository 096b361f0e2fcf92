//! Precomputed ray and knight-jump tables.
//!
//! Every entry lists on-board squares only, nearest first, so movement code
//! never has to bounds-check.

use once_cell::sync::Lazy;

use super::{Coordinate, Direction};

/// Squares walked from each square toward each direction, nearest first.
static RAYS: Lazy<Vec<[Vec<Coordinate>; 8]>> = Lazy::new(|| {
    Coordinate::all()
        .map(|from| {
            std::array::from_fn(|d| {
                let dir = Direction::ALL[d];
                let mut ray = Vec::new();
                let mut cursor = from;
                while let Some(next) = cursor.step(dir) {
                    ray.push(next);
                    cursor = next;
                }
                ray
            })
        })
        .collect()
});

/// Knight destinations from each square: two steps along a primary axis,
/// then one step along each perpendicular axis.
static KNIGHT_JUMPS: Lazy<Vec<Vec<Coordinate>>> = Lazy::new(|| {
    const PRIMARY_STEP: i8 = 2;
    const SECONDARY_STEP: i8 = 1;

    Coordinate::all()
        .map(|from| {
            let mut jumps = Vec::with_capacity(8);
            for primary in Direction::ORTHOGONAL {
                let (px, py) = primary.delta();
                for secondary in perpendicular(primary) {
                    let (sx, sy) = secondary.delta();
                    let dx = px * PRIMARY_STEP + sx * SECONDARY_STEP;
                    let dy = py * PRIMARY_STEP + sy * SECONDARY_STEP;
                    if let Some(to) = from.offset(dx, dy) {
                        jumps.push(to);
                    }
                }
            }
            jumps
        })
        .collect()
});

fn perpendicular(dir: Direction) -> [Direction; 2] {
    if matches!(dir, Direction::North | Direction::South) {
        [Direction::East, Direction::West]
    } else {
        [Direction::North, Direction::South]
    }
}

#[inline]
pub(crate) fn ray(from: Coordinate, dir: Direction) -> &'static [Coordinate] {
    &RAYS[from.index()][dir.index()]
}

#[inline]
pub(crate) fn knight_jumps(from: Coordinate) -> &'static [Coordinate] {
    &KNIGHT_JUMPS[from.index()]
}
