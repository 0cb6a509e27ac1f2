use fnv::FnvHashSet;

use crate::map::GoalMap;
use crate::state::State;

use super::heuristics::{Cost, Heuristic};
use super::{Outcome, SolverErr, Stats};

/// Keeps only the `width` most promising new states each round. Doesn't learn anything
/// and doesn't remember paths - the result only contains the solved state.
pub(crate) fn beam_search(
    map: &GoalMap,
    initial_state: &State,
    width: usize,
    h: Heuristic,
    c: Cost,
    max_rounds: Option<usize>,
) -> Result<Outcome, SolverErr> {
    debug!("Beam search called with width {}", width);

    if width == 0 {
        return Err(SolverErr::InvalidBeamWidth);
    }

    let mut stats = Stats::default();
    let mut steps = 0;

    if map.is_solved(initial_state) {
        return Ok(Outcome::single(initial_state.clone(), steps, stats));
    }

    // the initial state isn't marked so a later round can come back to it
    let mut visited = FnvHashSet::default();
    let mut beam = vec![initial_state.clone()];

    loop {
        if max_rounds.map_or(false, |max| stats.rounds >= max) {
            warn!("Giving up after {} rounds", stats.rounds);
            let last = beam.swap_remove(0);
            return Ok(Outcome::single(last, steps, stats));
        }
        stats.rounds += 1;

        let mut candidates = Vec::new();
        for cur in &beam {
            for mov in map.possible_moves(cur) {
                let next = map.apply_move(cur, mov);
                if !visited.insert(next.key()) {
                    continue;
                }
                stats.created += 1;

                if map.is_solved(&next) {
                    debug!("Solved in round {}", stats.rounds);
                    return Ok(Outcome::single(next, steps, stats));
                }

                let score = h(map, &next, None) + c(map, cur, mov, Some(&next), None);
                candidates.push((next, score));
            }
        }

        if candidates.is_empty() {
            debug!("Nothing left to expand in round {}", stats.rounds);
            return Err(SolverErr::EmptyFrontier);
        }

        // stable so equal scores keep the order they were generated in
        candidates.sort_by_key(|&(_, score)| score);

        let mut seen = FnvHashSet::default();
        beam = candidates
            .into_iter()
            .filter(|(state, _)| seen.insert(state.key()))
            .map(|(state, _)| state)
            .take(width)
            .collect();

        steps += beam.len();
        trace!("Round {}: kept {} states", stats.rounds, beam.len());
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;
    use crate::solver::heuristics::{c1, c3, h1, h3};

    use super::*;

    #[test]
    fn one_push() {
        let level: Level = r"
---
@$.
---
"
        .parse()
        .unwrap();
        let outcome = beam_search(&level.map, &level.state, 6, h3, c3, None).unwrap();
        assert_eq!(outcome.path_states.len(), 1);
        assert!(level.map.is_solved(&outcome.path_states[0]));
        assert_eq!(outcome.steps, 0);
        assert_eq!(outcome.pulls, 0);
        assert!(outcome.moves.is_none());
    }

    #[test]
    fn already_solved() {
        let level: Level = "@*".parse().unwrap();
        let outcome = beam_search(&level.map, &level.state, 6, h3, c3, None).unwrap();
        assert_eq!(outcome.path_states, vec![level.state.clone()]);
        assert_eq!(outcome.stats.rounds, 0);
    }

    #[test]
    fn width_one_keeps_one_per_round() {
        let level: Level = "@-$-.".parse().unwrap();
        let outcome = beam_search(&level.map, &level.state, 1, h1, c1, None).unwrap();
        assert!(level.map.is_solved(&outcome.path_states[0]));
        assert_eq!(outcome.stats.rounds, 3);
        // solved during the last round, every round before kept exactly one state
        assert_eq!(outcome.steps, outcome.stats.rounds - 1);
    }

    #[test]
    fn wider_beam() {
        let level: Level = "@-$-.".parse().unwrap();
        let outcome = beam_search(&level.map, &level.state, 6, h1, c1, None).unwrap();
        assert!(level.map.is_solved(&outcome.path_states[0]));
        assert_eq!(outcome.stats.rounds, 3);
        // 1 state after the first round, all 3 successors of it after the second
        assert_eq!(outcome.steps, 4);
        assert_eq!(outcome.stats.created, 5);
    }

    #[test]
    fn empty_frontier() {
        let level: Level = "@$#.".parse().unwrap();
        let err = beam_search(&level.map, &level.state, 6, h3, c3, None).unwrap_err();
        assert_eq!(err, SolverErr::EmptyFrontier);
    }

    #[test]
    fn zero_width() {
        let level: Level = "@$.".parse().unwrap();
        let err = beam_search(&level.map, &level.state, 0, h3, c3, None).unwrap_err();
        assert_eq!(err, SolverErr::InvalidBeamWidth);
    }
}
