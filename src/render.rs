use colored::Colorize;
use common::{GameState, Hole, Move, NR_ROWS, Position, SolutionSink};

/// Draw the board, highlighting the holes touched by `jump` (if any): the
/// landing peg in red, the emptied holes in blue.
pub fn draw_with_jump(pos: &Position, jump: Option<Move>) -> String {
    let mut out = String::new();
    let mut holes = Hole::all();

    for row in 0..NR_ROWS {
        out.push_str(&" ".repeat(NR_ROWS - 1 - row));
        for col in 0..=row {
            let Some(hole) = holes.next() else {
                break;
            };
            if col > 0 {
                out.push(' ');
            }

            let landed = jump.is_some_and(|j| j.to == hole);
            let emptied = jump.is_some_and(|j| j.from == hole || j.over == hole);
            let cell = if pos.is_full(hole) {
                if landed {
                    "#".on_red().to_string()
                } else {
                    "#".to_string()
                }
            } else if emptied {
                ".".on_blue().to_string()
            } else {
                ".".to_string()
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out
}

pub fn format_path(path: &[Move]) -> String {
    path.iter()
        .map(|mv| format!("{mv}; "))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Prints solutions as they are found.
pub struct ConsoleSink {
    vacancy: Hole,
    draw: bool,
}

impl ConsoleSink {
    pub fn new(vacancy: Hole, draw: bool) -> Self {
        Self { vacancy, draw }
    }
}

impl SolutionSink for ConsoleSink {
    fn on_solution(&mut self, number: u64, path: &[Move]) {
        println!("[{number}] {}", format_path(path));

        if !self.draw {
            return;
        }

        let mut state = GameState::new(self.vacancy);
        println!("{}", draw_with_jump(state.position(), None));
        for &mv in path {
            if let Err(err) = state.play(mv) {
                log::warn!("cannot replay solution {number}: {err}");
                return;
            }
            println!("{mv}");
            println!("{}", draw_with_jump(state.position(), Some(mv)));
        }
    }

    fn on_memo_insert(&mut self, memo_size: usize) {
        if memo_size % 10_000 == 0 {
            log::debug!("{memo_size} unsolvable positions so far");
        }
    }
}
