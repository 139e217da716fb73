use std::fmt;

use crate::{BoardError, NR_HOLES, NR_ROWS};

/// A hole on the triangular board. Holes are numbered row by row, starting
/// at the apex:
///
/// ```text
///         0
///        1 2
///       3 4 5
///      6 7 8 9
///    10 11 12 13 14
/// ```
///
/// Invariant: can only represent valid holes
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Hole(u8);

impl Hole {
    pub fn new(index: usize) -> Result<Self, BoardError> {
        if index < NR_HOLES {
            Ok(Hole(index as u8))
        } else {
            Err(BoardError::InvalidIndex { index })
        }
    }

    /// Const constructor for the built-in tables. Panics on an invalid index,
    /// which makes a bad table entry a compile error.
    pub(crate) const fn nth(index: u8) -> Self {
        assert!((index as usize) < NR_HOLES, "hole index out of range");
        Hole(index)
    }

    pub fn from_row_col(row: i8, col: i8) -> Option<Self> {
        if row < 0 || col < 0 || col > row || row as usize >= NR_ROWS {
            return None;
        }
        let (row, col) = (row as u8, col as u8);
        Some(Hole(row * (row + 1) / 2 + col))
    }

    pub const fn apex() -> Self {
        Hole(0)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> i8 {
        let mut row = 0;
        while (row + 1) * (row + 2) / 2 <= self.0 {
            row += 1;
        }
        row as i8
    }

    pub fn col(self) -> i8 {
        let row = self.row() as u8;
        (self.0 - row * (row + 1) / 2) as i8
    }

    pub fn shift(self, rows: i8, cols: i8) -> Option<Hole> {
        Self::from_row_col(self.row() + rows, self.col() + cols)
    }

    /// Rotate by 120 degrees: apex -> bottom left corner -> bottom right corner.
    pub fn rotate(self) -> Hole {
        let (row, col) = (self.row(), self.col());
        Self::from_row_col(NR_ROWS as i8 - 1 - col, row - col)
            .expect("rotation maps the board onto itself")
    }

    /// Reflect about the vertical axis through the apex.
    pub fn mirror(self) -> Hole {
        let (row, col) = (self.row(), self.col());
        Self::from_row_col(row, row - col).expect("reflection maps the board onto itself")
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..NR_HOLES as u8).map(Hole)
    }
}

impl TryFrom<usize> for Hole {
    type Error = BoardError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Hole::new(index)
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The starting vacancies grouped by board symmetry. Vacancies in the same
/// class have the same number of solutions.
pub fn symmetry_classes() -> Vec<Vec<Hole>> {
    let mut classes: Vec<Vec<Hole>> = Vec::new();
    for hole in Hole::all() {
        if classes.iter().any(|class| class.contains(&hole)) {
            continue;
        }

        let mut class = vec![];
        let mut image = hole;
        for _ in 0..3 {
            for h in [image, image.mirror()] {
                if !class.contains(&h) {
                    class.push(h);
                }
            }
            image = image.rotate();
        }
        class.sort();
        classes.push(class);
    }
    classes
}
