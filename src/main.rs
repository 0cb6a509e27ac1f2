#![warn(rust_2018_idioms)]

#[macro_use]
extern crate prettytable;

use std::error::Error;
use std::process;

use clap::{value_t, App, Arg, ArgMatches};
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use sokoban_lrta::config::{HeuristicKind, Method};
use sokoban_lrta::solver::{Solver, SolverErr, DEFAULT_BEAM_WIDTH};
use sokoban_lrta::LoadLevel;

fn main() {
    env_logger::init();

    let default_width = DEFAULT_BEAM_WIDTH.to_string();
    let matches = App::new("sokoban-lrta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sokoban with pulls - LRTA* and beam search")
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .value_name("NAME")
                .default_value("lrta_star")
                .help("lrta_star or beam_search"),
        )
        .arg(
            Arg::with_name("beam-width")
                .short("k")
                .long("beam-width")
                .takes_value(true)
                .value_name("K")
                .default_value(&default_width)
                .help("states kept each round by beam search"),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["h1", "h2", "h3"])
                .default_value("h3")
                .help("heuristic and the matching cost function"),
        )
        .arg(
            Arg::with_name("max-steps")
                .short("m")
                .long("max-steps")
                .takes_value(true)
                .value_name("N")
                .help("give up after N moves (LRTA*) or rounds (beam search)"),
        )
        .arg(
            Arg::with_name("print-states")
                .short("s")
                .long("print-states")
                .help("print every state on the way"),
        )
        .arg(
            Arg::with_name("compare")
                .long("compare")
                .help("run LRTA* with h1 and h3 on all levels and print a table (ignores -a, -k and -H)"),
        )
        .arg(Arg::with_name("file").required(true).multiple(true))
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let beam_width = value_t!(matches, "beam-width", usize).unwrap_or_else(|e| e.exit());
    let max_steps = if matches.is_present("max-steps") {
        Some(value_t!(matches, "max-steps", usize).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };
    // both have defaults or possible values
    let algorithm = matches.value_of("algorithm").unwrap();
    let kind: HeuristicKind = matches.value_of("heuristic").unwrap().parse()?;
    let paths: Vec<&str> = matches.values_of("file").unwrap().collect();

    if matches.is_present("compare") {
        return compare(&paths, max_steps);
    }

    for path in paths {
        println!("Solving {}...", path);
        let level = path.load_level()?;

        let mut solver = Solver::new(level, algorithm)?;
        let (h, c) = kind.functions();
        solver.h = h;
        solver.c = c;
        solver.beam_width = beam_width;
        solver.max_steps = max_steps;

        let solution = match solver.solve(true) {
            Ok(solution) => solution,
            Err(err @ SolverErr::EmptyFrontier) => {
                // the other levels still get a chance
                println!("No solution: {}", err);
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if let Some(ref moves) = solution.moves {
            println!("Moves: {}", moves);
        }
        println!("{}", solution.stats);

        if matches.is_present("print-states") {
            let map = &solver.level().map;
            for state in &solution.path_states {
                println!("{}", map.format_with_state(state));
            }
        }
    }
    Ok(())
}

fn compare(paths: &[&str], max_steps: Option<usize>) -> Result<(), Box<dyn Error>> {
    let kinds = [HeuristicKind::H1, HeuristicKind::H3];

    let mut table = Table::new();
    table.add_row(row![
        "Map",
        "h1 steps",
        "h1 duration",
        "h1 pulls",
        "h3 steps",
        "h3 duration",
        "h3 pulls"
    ]);

    for &path in paths {
        let level = path.load_level()?;
        let mut cells = vec![Cell::new(path)];
        for &kind in &kinds {
            let mut solver = Solver::with_method(level.clone(), Method::LrtaStar);
            let (h, c) = kind.functions();
            solver.h = h;
            solver.c = c;
            solver.max_steps = max_steps;

            let solution = solver.solve(false)?;
            let steps = if solution.solved {
                solution.steps.separated_string()
            } else {
                format!("{} (unsolved)", solution.steps.separated_string())
            };
            cells.push(Cell::new(&steps));
            cells.push(Cell::new(&format!("{:.4}", solution.duration_secs())));
            cells.push(Cell::new(&solution.pulls.separated_string()));
        }
        table.add_row(Row::new(cells));
    }

    table.printstd();
    Ok(())
}
