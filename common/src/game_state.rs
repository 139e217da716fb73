use crate::{
    BoardError, NR_HOLES,
    hole::Hole,
    jumps::{MOVE_CATALOG, Move},
    position::Position,
};

/// Is the current position solvable, i.e. does a path exist from the
/// current position to the goal?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solvability {
    /// Not known yet, or the search was stopped before it could tell.
    #[default]
    Unknown,
    /// Yes, at least one continuation reaches the goal.
    Solvable,
    /// No, every continuation was explored and none reaches the goal.
    Unsolvable,
}

/// The board together with the moves that led to it.
///
/// Cloning gives a fully independent copy, path included.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    position: Position,
    path: Vec<Move>,
    solvability: Solvability,
}

impl GameState {
    pub fn new(vacancy: Hole) -> Self {
        Self {
            position: Position::with_vacancy(vacancy),
            path: Vec::with_capacity(NR_HOLES - 2),
            solvability: Solvability::Unknown,
        }
    }

    pub fn with_vacancy(index: usize) -> Result<Self, BoardError> {
        Ok(Self::new(Hole::new(index)?))
    }

    /// Start from an arbitrary position with an empty path.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            path: vec![],
            solvability: Solvability::Unknown,
        }
    }

    /// Back to a full board with a single vacancy, independent of any
    /// earlier moves.
    pub fn initialize(&mut self, vacancy: Hole) {
        self.position.reset(vacancy);
        self.path.clear();
        self.solvability = Solvability::Unknown;
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves applied since the starting vacancy, in order.
    pub fn path(&self) -> &[Move] {
        &self.path
    }

    pub fn remaining_pegs(&self) -> usize {
        self.position.count_full()
    }

    /// The catalog entries that are legal in the current position, in
    /// catalog order.
    pub fn available_moves(&self) -> Vec<Move> {
        MOVE_CATALOG
            .iter()
            .filter(|m| m.is_valid(&self.position))
            .copied()
            .collect()
    }

    /// Perform a jump. The move has to be legal; this is only checked in
    /// debug builds.
    pub fn apply(&mut self, mv: Move) {
        debug_assert!(mv.is_valid(&self.position), "illegal move {mv}");
        self.position.mark_full(mv.to);
        self.position.mark_empty(mv.from);
        self.position.mark_empty(mv.over);
    }

    /// Take back a jump that was just applied.
    pub fn undo(&mut self, mv: Move) {
        debug_assert!(
            self.position.is_full(mv.to)
                && self.position.is_empty(mv.from)
                && self.position.is_empty(mv.over),
            "cannot take back {mv}"
        );
        self.position.mark_empty(mv.to);
        self.position.mark_full(mv.from);
        self.position.mark_full(mv.over);
    }

    /// Append to the path. Does not touch the board, see [`GameState::apply`].
    pub fn record_move(&mut self, mv: Move) {
        self.path.push(mv);
    }

    /// Check, apply and record a move.
    pub fn play(&mut self, mv: Move) -> Result<(), BoardError> {
        if !mv.is_valid(&self.position) {
            return Err(BoardError::IllegalMove { mv });
        }
        self.apply(mv);
        self.record_move(mv);
        Ok(())
    }

    /// The state after `mv`, with its own copy of the path and a fresh
    /// solvability marker.
    pub fn successor(&self, mv: Move) -> GameState {
        let mut child = self.clone();
        child.apply(mv);
        child.record_move(mv);
        child.solvability = Solvability::Unknown;
        child
    }

    /// The default goal: a single peg left, wherever it is.
    pub fn is_goal(&self) -> bool {
        self.position.is_single_peg()
    }

    pub fn solvability(&self) -> Solvability {
        self.solvability
    }

    pub fn set_solvability(&mut self, solvability: Solvability) {
        self.solvability = solvability;
    }

    pub fn is_solvable(&self) -> bool {
        self.solvability == Solvability::Solvable
    }

    pub fn set_solvable(&mut self, solvable: bool) {
        self.solvability = if solvable {
            Solvability::Solvable
        } else {
            Solvability::Unsolvable
        };
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn h(idx: usize) -> Hole {
        Hole::new(idx).unwrap()
    }

    fn jump(from: usize, to: usize, over: usize) -> Move {
        Move {
            from: h(from),
            to: h(to),
            over: h(over),
        }
    }

    #[test]
    fn test_initial_moves() {
        let state = GameState::new(h(4));
        assert_eq!(state.available_moves(), vec![jump(11, 4, 7), jump(13, 4, 8)]);
        assert_eq!(state.remaining_pegs(), 14);
        assert!(!state.is_goal());
    }

    #[test]
    fn test_initialize_twice_resets_state() {
        let mut state = GameState::new(h(0));
        let mv = state.available_moves()[0];
        state.play(mv).unwrap();
        state.set_solvable(false);
        assert_eq!(state.remaining_pegs(), 13);

        state.initialize(h(4));
        assert_eq!(state.remaining_pegs(), 14);
        assert!(state.path().is_empty());
        assert_eq!(state.solvability(), Solvability::Unknown);
        assert!(state.position().is_empty(h(4)));

        let mv = state.available_moves()[0];
        state.play(mv).unwrap();
        state.initialize(h(12));
        assert_eq!(state.remaining_pegs(), 14);
        assert!(state.path().is_empty());
        assert!(state.position().is_empty(h(12)));
    }

    #[test]
    fn test_apply_moves_pegs() {
        let mut state = GameState::new(h(0));
        let mv = jump(3, 0, 1);
        state.apply(mv);
        assert!(state.position().is_full(h(0)));
        assert!(state.position().is_empty(h(1)));
        assert!(state.position().is_empty(h(3)));
        assert!(state.path().is_empty());

        state.undo(mv);
        assert_eq!(state, GameState::new(h(0)));
    }

    #[test]
    fn test_play_rejects_illegal_move() {
        let mut state = GameState::new(h(0));
        let mv = jump(0, 3, 1);
        assert_eq!(state.play(mv), Err(BoardError::IllegalMove { mv }));
        assert_eq!(state, GameState::new(h(0)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "illegal move")]
    fn test_apply_illegal_move_panics() {
        let mut state = GameState::new(h(0));
        state.apply(jump(0, 3, 1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot take back")]
    fn test_undo_without_apply_panics() {
        let mut state = GameState::new(h(0));
        state.undo(jump(3, 0, 1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut parent = GameState::new(h(0));
        parent.set_solvable(true);
        let mut copy = parent.clone();
        assert_eq!(copy, parent);

        let mv = copy.available_moves()[0];
        copy.play(mv).unwrap();
        assert_eq!(parent.path().len(), 0);
        assert_eq!(parent.remaining_pegs(), 14);
        assert_eq!(copy.solvability(), Solvability::Solvable);

        let child = parent.successor(mv);
        assert_eq!(child.position(), copy.position());
        assert_eq!(child.path(), &[mv]);
        assert_eq!(child.solvability(), Solvability::Unknown);
    }

    #[test]
    fn test_custom_position_goal() {
        let pos = Position::from_ascii(
            r#"
                .
               . .
              . . .
             . . . .
            . . # # .
            "#,
        )
        .unwrap();
        let mut state = GameState::from_position(pos);
        let moves = state.available_moves();
        assert_eq!(moves, vec![jump(12, 14, 13), jump(13, 11, 12)]);
        state.play(moves[0]).unwrap();
        assert!(state.is_goal());
        assert!(state.available_moves().is_empty());
    }

    proptest! {
        // Play random games and check the peg count and the apply/undo law
        // at every step.
        #[test]
        fn random_playouts_keep_invariants(
            vacancy in 0usize..NR_HOLES,
            choices in prop::collection::vec(any::<usize>(), 13),
        ) {
            let mut state = GameState::with_vacancy(vacancy).unwrap();
            for choice in choices {
                prop_assert_eq!(state.remaining_pegs(), NR_HOLES - 1 - state.path().len());

                let moves = state.available_moves();
                for &mv in &moves {
                    let before = *state.position();
                    state.apply(mv);
                    prop_assert_eq!(state.remaining_pegs(), before.count_full() - 1);
                    state.undo(mv);
                    prop_assert_eq!(*state.position(), before);
                }

                if moves.is_empty() {
                    break;
                }
                state.play(moves[choice % moves.len()]).unwrap();
            }
        }
    }
}
