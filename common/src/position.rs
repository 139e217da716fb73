use std::{
    fmt,
    hash::{Hash, Hasher},
};

use bitvec::{BitArr, array::BitArray, order::Lsb0};

use crate::{BoardError, NR_HOLES, NR_ROWS, hole::Hole};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PegStatus {
    Empty,
    Full,
}

type Cells = BitArr!(for NR_HOLES, in u16, Lsb0);

const CELL_MASK: u16 = (1 << NR_HOLES) - 1;

/// Peg occupancy of the 15 holes, one bit per hole.
///
/// Two positions are equal iff every hole has the same status. The starting
/// vacancy recorded by [`Position::reset`] does not take part in comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Position {
    cells: Cells,
    vacancy: Option<Hole>,
}

impl Position {
    /// A board with every hole empty.
    pub fn empty() -> Self {
        Self {
            cells: BitArray::new([0]),
            vacancy: None,
        }
    }

    /// A full board with a single starting vacancy.
    pub fn with_vacancy(vacancy: Hole) -> Self {
        let mut pos = Self::empty();
        pos.reset(vacancy);
        pos
    }

    /// Fill every hole, then empty `vacancy` and remember it as the
    /// starting vacancy.
    pub fn reset(&mut self, vacancy: Hole) {
        self.cells = BitArray::new([CELL_MASK]);
        self.mark_empty(vacancy);
        self.vacancy = Some(vacancy);
    }

    pub fn starting_vacancy(&self) -> Option<Hole> {
        self.vacancy
    }

    pub fn get(&self, hole: Hole) -> PegStatus {
        if self.cells[hole.index()] {
            PegStatus::Full
        } else {
            PegStatus::Empty
        }
    }

    pub fn set(&mut self, hole: Hole, status: PegStatus) {
        self.cells.set(hole.index(), status == PegStatus::Full);
    }

    pub fn mark_full(&mut self, hole: Hole) {
        self.set(hole, PegStatus::Full);
    }

    pub fn mark_empty(&mut self, hole: Hole) {
        self.set(hole, PegStatus::Empty);
    }

    pub fn is_full(&self, hole: Hole) -> bool {
        self.get(hole) == PegStatus::Full
    }

    pub fn is_empty(&self, hole: Hole) -> bool {
        self.get(hole) == PegStatus::Empty
    }

    /// Number of occupied holes in this position
    pub fn count_full(&self) -> usize {
        self.cells[..NR_HOLES].count_ones()
    }

    pub fn is_single_peg(&self) -> bool {
        self.count_full() == 1
    }

    pub fn iter_full(&self) -> impl Iterator<Item = Hole> + '_ {
        self.cells[..NR_HOLES]
            .iter_ones()
            .map(|idx| Hole::nth(idx as u8))
    }

    /// Bit `i` is set iff hole `i` holds a peg.
    pub fn encode(&self) -> u16 {
        self.cells.as_raw_slice()[0] & CELL_MASK
    }

    pub fn decode(bits: u16) -> Self {
        Self {
            cells: BitArray::new([bits & CELL_MASK]),
            vacancy: None,
        }
    }

    fn map_holes(&self, f: impl Fn(Hole) -> Hole) -> Position {
        let mut out = Position::empty();
        for hole in self.iter_full() {
            out.mark_full(f(hole));
        }
        out.vacancy = self.vacancy.map(f);
        out
    }

    pub fn rotate(&self) -> Position {
        self.map_holes(Hole::rotate)
    }

    pub fn mirror(&self) -> Position {
        self.map_holes(Hole::mirror)
    }

    /// The representative of this position under the six board symmetries:
    /// the image with the smallest encoding.
    pub fn normalize(&self) -> Position {
        let mut candidates = [*self; 6];

        for i in 1..3 {
            candidates[i] = candidates[i - 1].rotate();
        }
        for i in 3..6 {
            candidates[i] = candidates[i - 3].mirror();
        }

        candidates
            .into_iter()
            .min_by_key(Position::encode)
            .unwrap_or(*self)
    }

    /// Parse a board drawn with `#` for pegs and `.` for holes, in hole order.
    /// Whitespace is ignored, so the triangle may be indented freely.
    pub fn from_ascii(ascii: &str) -> Result<Self, BoardError> {
        let mut pos = Position::empty();
        let mut counted = 0;
        for c in ascii.chars().filter(|c| !c.is_whitespace()) {
            let status = match c {
                '#' => PegStatus::Full,
                '.' => PegStatus::Empty,
                _ => return Err(BoardError::InvalidAscii(format!("unexpected char {c:?}"))),
            };
            let hole = Hole::new(counted)
                .map_err(|_| BoardError::InvalidAscii("too many holes".to_string()))?;
            pos.set(hole, status);
            counted += 1;
        }
        if counted < NR_HOLES {
            return Err(BoardError::InvalidAscii(format!(
                "expected {NR_HOLES} holes, found {counted}"
            )));
        }
        Ok(pos)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::with_vacancy(Hole::apex())
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.encode() == other.encode()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.encode().hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut holes = Hole::all();
        for row in 0..NR_ROWS {
            write!(f, "{:width$}", "", width = NR_ROWS - 1 - row)?;
            for col in 0..=row {
                let Some(hole) = holes.next() else {
                    return Err(fmt::Error);
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                let c = if self.is_full(hole) { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            if row + 1 < NR_ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
