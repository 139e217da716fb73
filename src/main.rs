mod cli;
mod render;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use common::{GameState, Hole, Solver};

use crate::{
    cli::{Args, SolverKind},
    render::ConsoleSink,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let vacancies = args.starting_vacancies()?;
    let mut solver = Solver::new(args.solver_config());

    log::info!(
        "{} solver, vacancies {:?}",
        args.solver.name(),
        vacancies.iter().map(|h| h.index()).collect::<Vec<_>>()
    );

    for round in 0..args.repeat {
        if args.repeat > 1 {
            log::info!("round {}/{}", round + 1, args.repeat);
        }
        for &vacancy in &vacancies {
            solve_one(&mut solver, &args, vacancy)?;
        }
        if !args.json {
            println!();
        }
    }

    Ok(())
}

fn solve_one(solver: &mut Solver, args: &Args, vacancy: Hole) -> Result<()> {
    let mut state = GameState::new(vacancy);
    let mut sink = ConsoleSink::new(vacancy, args.draw);

    let start = Instant::now();
    let stats = match args.solver {
        SolverKind::Plain => solver.solve_all(&state, &mut sink),
        SolverKind::Memoized => solver.solve_all_memoized(&mut state, &mut sink),
    };
    let duration = start.elapsed().as_secs_f32();

    if args.json {
        let report = serde_json::json!({
            "vacancy": vacancy.index(),
            "solver": args.solver.name(),
            "config": solver.config(),
            "duration_secs": duration,
            "stats": stats,
        });
        println!(
            "{}",
            serde_json::to_string(&report).context("cannot serialize stats")?
        );
    } else {
        println!();
        println!("{stats}");
        println!("{vacancy} Duration: {duration}");
    }

    if args.show_memo && args.solver == SolverKind::Memoized {
        for pos in solver.memo().iter() {
            println!("{pos}\n");
        }
    }

    Ok(())
}
