use std::fmt;

use crate::{NR_MOVES, hole::Hole, position::Position};

/// A jump of the peg in `from` over the peg in `over` into the empty `to`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub from: Hole,
    pub to: Hole,
    pub over: Hole,
}

impl Move {
    /// `from` and `over` hold pegs and `to` is free. The three holes are in a
    /// line by construction of the catalog.
    pub fn is_valid(&self, pos: &Position) -> bool {
        pos.is_empty(self.to) && pos.is_full(self.from) && pos.is_full(self.over)
    }

    pub fn rotate(self) -> Move {
        Move {
            from: self.from.rotate(),
            to: self.to.rotate(),
            over: self.over.rotate(),
        }
    }

    pub fn mirror(self) -> Move {
        Move {
            from: self.from.mirror(),
            to: self.to.mirror(),
            over: self.over.mirror(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.from, self.to)
    }
}

const fn mv(from: u8, to: u8, over: u8) -> Move {
    Move {
        from: Hole::nth(from),
        to: Hole::nth(to),
        over: Hole::nth(over),
    }
}

/// Every jump the board allows, ordered by `(from, to)`. The search explores
/// moves in this order, so it fixes the order in which solutions are found.
#[rustfmt::skip]
pub static MOVE_CATALOG: [Move; NR_MOVES] = [
    mv(0, 3, 1), mv(0, 5, 2),
    mv(1, 6, 3), mv(1, 8, 4),
    mv(2, 7, 4), mv(2, 9, 5),
    mv(3, 0, 1), mv(3, 5, 4), mv(3, 10, 6), mv(3, 12, 7),
    mv(4, 11, 7), mv(4, 13, 8),
    mv(5, 0, 2), mv(5, 3, 4), mv(5, 12, 8), mv(5, 14, 9),
    mv(6, 1, 3), mv(6, 8, 7),
    mv(7, 2, 4), mv(7, 9, 8),
    mv(8, 1, 4), mv(8, 6, 7),
    mv(9, 2, 5), mv(9, 7, 8),
    mv(10, 3, 6), mv(10, 12, 11),
    mv(11, 4, 7), mv(11, 13, 12),
    mv(12, 3, 7), mv(12, 5, 8), mv(12, 10, 11), mv(12, 14, 13),
    mv(13, 4, 8), mv(13, 11, 12),
    mv(14, 5, 9), mv(14, 12, 13),
];

/// Derive the jump table from the board geometry: three holes in a straight
/// line along one of the six directions of the triangular grid.
pub fn compute_all_moves() -> [Move; NR_MOVES] {
    const DIRECTIONS: [(i8, i8); 6] = [(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (-1, -1)];

    let mut v: Vec<Move> = Hole::all()
        .flat_map(|from| {
            DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
                let over = from.shift(dr, dc)?;
                let to = from.shift(2 * dr, 2 * dc)?;
                Some(Move { from, to, over })
            })
        })
        .collect();
    v.sort_by_key(|m| (m.from, m.to));

    v.try_into().expect("should find exactly 36 jumps")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_geometry() {
        assert_eq!(MOVE_CATALOG, compute_all_moves());
    }

    #[test]
    fn test_catalog_contains_all_unique_moves() {
        for i in 0..MOVE_CATALOG.len() {
            for j in 0..i {
                assert_ne!(MOVE_CATALOG[i], MOVE_CATALOG[j]);
            }
        }
    }

    #[test]
    // the board symmetries map jumps onto jumps
    fn test_catalog_is_closed_under_symmetry() {
        for m in MOVE_CATALOG {
            assert!(MOVE_CATALOG.contains(&m.rotate()));
            assert!(MOVE_CATALOG.contains(&m.mirror()));
        }
    }

    #[test]
    fn test_validity() {
        let pos = Position::with_vacancy(Hole::apex());
        let valid: Vec<_> = MOVE_CATALOG.iter().filter(|m| m.is_valid(&pos)).collect();
        assert_eq!(valid, vec![&mv(3, 0, 1), &mv(5, 0, 2)]);
    }
}
