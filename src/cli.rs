use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use common::{Hole, SolverConfig, symmetry_classes};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SolverKind {
    /// Explore the whole game tree
    Plain,
    /// Skip positions that were already proven unsolvable
    Memoized,
}

impl SolverKind {
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Plain => "plain",
            SolverKind::Memoized => "memoized",
        }
    }
}

/// Enumerate every way to clear the 15-hole triangle peg board down to one peg.
#[derive(Parser, Debug)]
#[command(name = "crackerbarrel", version)]
pub struct Args {
    /// Starting vacancy (0..15, numbered row by row from the apex). Can be
    /// given several times. Defaults to one vacancy per symmetry class.
    #[arg(short, long = "vacancy")]
    pub vacancies: Vec<usize>,

    /// Solve every starting vacancy
    #[arg(long, conflicts_with = "vacancies")]
    pub all: bool,

    #[arg(long, value_enum, default_value_t = SolverKind::Memoized)]
    pub solver: SolverKind,

    /// Stop after the first solution
    #[arg(long)]
    pub first: bool,

    /// Don't print the solutions, only the statistics
    #[arg(short, long)]
    pub quiet: bool,

    /// Draw the board after every move of each printed solution
    #[arg(long, conflicts_with = "quiet")]
    pub draw: bool,

    /// Solve everything this many times, for timing
    #[arg(long, default_value_t = 1)]
    pub repeat: u32,

    /// Print one JSON object per solve instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Print the unsolvable positions collected by the memoized solver
    #[arg(long)]
    pub show_memo: bool,
}

impl Args {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            stop_at_first_solution: self.first,
            emit_solutions: !self.quiet,
        }
    }

    pub fn starting_vacancies(&self) -> Result<Vec<Hole>> {
        if self.all {
            return Ok(Hole::all().collect());
        }
        if self.vacancies.is_empty() {
            return Ok(symmetry_classes()
                .into_iter()
                .map(|class| class[0])
                .collect());
        }

        self.vacancies
            .iter()
            .map(|&idx| {
                Hole::new(idx).with_context(|| format!("invalid --vacancy {idx}"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vacancies_are_class_representatives() {
        let args = Args::parse_from(["crackerbarrel"]);
        let vacancies: Vec<usize> = args
            .starting_vacancies()
            .unwrap()
            .into_iter()
            .map(Hole::index)
            .collect();
        assert_eq!(vacancies, vec![0, 1, 3, 4]);
        assert_eq!(args.solver, SolverKind::Memoized);
        assert_eq!(args.solver_config(), SolverConfig::default());
    }

    #[test]
    fn test_invalid_vacancy_is_reported() {
        let args = Args::parse_from(["crackerbarrel", "-v", "3", "-v", "15"]);
        let err = args.starting_vacancies().unwrap_err();
        assert!(format!("{err:#}").contains("not on the board"));
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "crackerbarrel",
            "--all",
            "--first",
            "-q",
            "--solver",
            "plain",
        ]);
        assert_eq!(args.starting_vacancies().unwrap().len(), 15);
        assert_eq!(args.solver, SolverKind::Plain);
        assert_eq!(
            args.solver_config(),
            SolverConfig {
                stop_at_first_solution: true,
                emit_solutions: false,
            }
        );
    }
}
