use rustc_hash::FxHashSet;

use crate::position::Position;

/// Positions that were proven to have no continuation to the goal.
///
/// Keyed by [`Position::encode`], so membership is exact cell-wise equality.
/// Entries are never removed during a run.
#[derive(Debug, Default, Clone)]
pub struct UnsolvableMemo {
    positions: FxHashSet<u16>,
}

impl UnsolvableMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.positions.contains(&pos.encode())
    }

    /// Returns `false` if the position was already present.
    pub fn insert(&mut self, pos: &Position) -> bool {
        self.positions.insert(pos.encode())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().map(|&bits| Position::decode(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::Hole;

    #[test]
    fn test_membership_is_cell_wise() {
        let mut memo = UnsolvableMemo::new();
        let a = Position::with_vacancy(Hole::apex());
        let b = Position::with_vacancy(Hole::new(1).unwrap());

        assert!(memo.is_empty());
        assert!(memo.insert(&a));
        assert!(!memo.insert(&Position::decode(a.encode())));
        assert_eq!(memo.len(), 1);

        assert!(memo.contains(&a));
        assert!(!memo.contains(&b));
        assert_eq!(memo.iter().collect::<Vec<_>>(), vec![a]);

        memo.clear();
        assert!(!memo.contains(&a));
    }
}
