pub(crate) mod beam_search;
pub mod heuristics;
pub(crate) mod lrta_star;
pub mod table;
pub mod utils;

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::time::{Duration, Instant};

use separator::Separatable;

use crate::config::{HeuristicKind, Method};
use crate::level::Level;
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

use self::beam_search::beam_search;
use self::heuristics::{Cost, Heuristic};
use self::lrta_star::lrta_star;

pub const DEFAULT_BEAM_WIDTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverErr {
    InvalidAlgorithm(String),
    InvalidBeamWidth,
    EmptyFrontier,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::InvalidAlgorithm(ref name) => write!(
                f,
                "Unknown algorithm: {} (expected lrta_star or beam_search)",
                name
            ),
            SolverErr::InvalidBeamWidth => write!(f, "Beam width must be at least 1"),
            SolverErr::EmptyFrontier => write!(
                f,
                "Empty frontier - no new states left to explore before reaching a solution"
            ),
        }
    }
}

impl Error for SolverErr {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Entries in the learned estimate table (LRTA* only).
    pub estimates: usize,
    /// Distinct (box, cell) placements seen (LRTA* only).
    pub visited_placements: usize,
    /// Beam search only.
    pub rounds: usize,
    /// States generated and scored (beam search only).
    pub created: usize,
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Learned estimates: {}", self.estimates.separated_string())?;
        writeln!(
            f,
            "Visited box placements: {}",
            self.visited_placements.separated_string()
        )?;
        writeln!(f, "Beam rounds: {}", self.rounds.separated_string())?;
        writeln!(f, "States created: {}", self.created.separated_string())
    }
}

/// What an engine hands back to the facade.
#[derive(Debug)]
pub(crate) struct Outcome {
    pub(crate) path_states: Vec<State>,
    pub(crate) moves: Option<Moves>,
    pub(crate) steps: usize,
    pub(crate) pulls: usize,
    pub(crate) stats: Stats,
}

impl Outcome {
    fn single(state: State, steps: usize, stats: Stats) -> Self {
        Self {
            path_states: vec![state],
            moves: None,
            steps,
            pulls: 0,
            stats,
        }
    }
}

pub struct SolverOk {
    /// From the initial state to the last one reached. Beam search only keeps the last state.
    pub path_states: Vec<State>,
    /// Only LRTA* records moves.
    pub moves: Option<Moves>,
    pub steps: usize,
    pub duration: Duration,
    pub pulls: usize,
    pub solved: bool,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs() as f64 + f64::from(self.duration.subsec_nanos()) * 1e-9
    }
}

impl Display for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.method)?;
        writeln!(f, "States explored: {}", self.steps.separated_string())?;
        writeln!(f, "Duration: {:.4} seconds", self.duration_secs())?;
        writeln!(f, "Pulls: {}", self.pulls.separated_string())?;
        writeln!(f, "Solution found: {}", self.solved)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)?;
        if let Some(ref moves) = self.moves {
            writeln!(f, "Moves: {}", moves)?;
        }
        write!(f, "{}", self.stats)
    }
}

/// Picks one of the engines for a level. The functions and limits can be changed
/// after construction.
pub struct Solver {
    level: Level,
    method: Method,
    pub h: Heuristic,
    pub c: Cost,
    pub beam_width: usize,
    /// Moves for LRTA*, rounds for beam search. `None` runs until the engine stops on its own.
    pub max_steps: Option<usize>,
}

impl Solver {
    pub fn new(level: Level, algorithm: &str) -> Result<Self, SolverErr> {
        let method = algorithm
            .parse()
            .map_err(|_| SolverErr::InvalidAlgorithm(algorithm.to_owned()))?;
        Ok(Self::with_method(level, method))
    }

    pub fn with_method(level: Level, method: Method) -> Self {
        let (h, c) = HeuristicKind::H3.functions();
        Self {
            level,
            method,
            h,
            c,
            beam_width: DEFAULT_BEAM_WIDTH,
            max_steps: None,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn solve(&self, display: bool) -> Result<SolverOk, SolverErr> {
        info!("Solving using {}", self.method);
        let map = &self.level.map;
        // every run starts from its own copy so solving twice gives the same result
        let initial_state = self.level.state.clone();

        let started = Instant::now();
        let outcome = match self.method {
            Method::LrtaStar => lrta_star(map, &initial_state, self.h, self.c, self.max_steps),
            Method::BeamSearch => beam_search(
                map,
                &initial_state,
                self.beam_width,
                self.h,
                self.c,
                self.max_steps,
            )?,
        };
        let duration = started.elapsed();

        let solved = outcome
            .path_states
            .last()
            .map_or(false, |state| map.is_solved(state));
        let solver_ok = SolverOk {
            path_states: outcome.path_states,
            moves: outcome.moves,
            steps: outcome.steps,
            duration,
            pulls: outcome.pulls,
            solved,
            stats: outcome.stats,
            method: self.method,
        };
        info!(
            "Finished using {} after {} steps, solved: {}",
            self.method, solver_ok.steps, solver_ok.solved
        );

        if display {
            print!("{}", solver_ok);
        }
        Ok(solver_ok)
    }
}

impl Debug for Solver {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("level", &self.level)
            .field("method", &self.method)
            .field("beam_width", &self.beam_width)
            .field("max_steps", &self.max_steps)
            .finish()
    }
}

impl Solve for Level {
    fn solve(&self, method: Method, print_status: bool) -> Result<SolverOk, SolverErr> {
        Solver::with_method(self.clone(), method).solve(print_status)
    }
}

#[cfg(test)]
mod tests {
    use super::heuristics::{c1, h1};
    use super::*;

    fn level(s: &str) -> Level {
        s.parse().unwrap()
    }

    #[test]
    fn unknown_algorithm() {
        let err = Solver::new(level("@$."), "dijkstra").err().unwrap();
        assert_eq!(err, SolverErr::InvalidAlgorithm("dijkstra".to_owned()));
    }

    #[test]
    fn defaults() {
        let solver = Solver::new(level("@$."), "beam_search").unwrap();
        assert_eq!(solver.method(), Method::BeamSearch);
        assert_eq!(solver.beam_width, 6);
        assert_eq!(solver.max_steps, None);
        let (h3, _) = HeuristicKind::H3.functions();
        assert_eq!(solver.h as usize, h3 as usize);
    }

    #[test]
    fn lrta_star_one_push() {
        let mut solver = Solver::new(
            level(
                r"
---
@$.
---
",
            ),
            "lrta_star",
        )
        .unwrap();
        solver.h = h1;
        solver.c = c1;
        let solution = solver.solve(false).unwrap();
        assert_eq!(solution.steps, 1);
        assert_eq!(solution.path_states.len(), 2);
        assert_eq!(solution.pulls, 0);
        assert!(solution.solved);
        assert_eq!(solution.method, Method::LrtaStar);
    }

    #[test]
    fn no_boxes() {
        for &method in &[Method::LrtaStar, Method::BeamSearch] {
            let solution = level("@--.").solve(method, false).unwrap();
            assert!(solution.solved);
            assert_eq!(solution.path_states.len(), 1);
            assert_eq!(solution.steps, 0);
        }
    }

    #[test]
    fn solving_twice() {
        let mut solver = Solver::new(level("@-$-."), "lrta_star").unwrap();
        solver.max_steps = Some(50);
        let first = solver.solve(false).unwrap();
        let second = solver.solve(false).unwrap();
        assert_eq!(first.path_states, second.path_states);
        assert_eq!(solver.level().state, first.path_states[0]);
    }

    #[test]
    fn beam_search_failure() {
        let err = level("@$#.").solve(Method::BeamSearch, false).unwrap_err();
        assert_eq!(err, SolverErr::EmptyFrontier);
    }

    #[test]
    fn lrta_star_stuck_is_not_an_error() {
        let solution = level("@$#.").solve(Method::LrtaStar, false).unwrap();
        assert!(!solution.solved);
        assert_eq!(solution.steps, 0);
    }

    #[test]
    fn summary() {
        let solution = level("@$.").solve(Method::LrtaStar, false).unwrap();
        let summary = solution.to_string();
        assert!(summary.starts_with("Algorithm: lrta_star\nStates explored: 1\nDuration: "));
        assert!(summary.ends_with("Pulls: 0\nSolution found: true\n"));
        assert!(format!("{:?}", solution).contains("Moves: R\n"));
    }
}
