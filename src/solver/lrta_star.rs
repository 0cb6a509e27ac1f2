//! Learning Real-Time A*: one local decision per step,
//! with the table of learned estimates as the only memory.

use std::mem;

use crate::map::GoalMap;
use crate::moves::{Move, Moves};
use crate::state::State;

use super::heuristics::{Cost, Heuristic};
use super::table::{StateTable, Visited};
use super::utils::{box_reached_goal, box_was_moved, box_was_pulled};
use super::{Outcome, Stats};

/// Added when a successor already has a learned estimate so the agent prefers unexplored states.
const LOOKAHEAD_PENALTY: i32 = 50;

pub(crate) struct Agent<'a> {
    map: &'a GoalMap,
    h: Heuristic,
    c: Cost,
    estimates: StateTable,
    visited: Visited,
}

impl<'a> Agent<'a> {
    pub(crate) fn new(map: &'a GoalMap, h: Heuristic, c: Cost) -> Self {
        Self {
            map,
            h,
            c,
            estimates: StateTable::new(),
            visited: Visited::new(),
        }
    }

    /// Picks the move to make from `state` and learns from the previous step.
    /// `None` once the level is solved or when there's nowhere to go.
    ///
    /// On the first step `prev` is the start itself so its estimate gets refined too.
    pub(crate) fn next_move(&mut self, state: &State, prev: &State) -> Option<Move> {
        if self.map.is_solved(state) {
            return None;
        }

        if !self.estimates.contains(state) {
            let estimate = (self.h)(self.map, state, Some(&self.visited));
            self.estimates.insert(state, estimate);
        }

        let best = self
            .map
            .possible_moves(prev)
            .into_iter()
            .map(|mov| self.lookahead_cost(prev, mov))
            .min();
        if let Some(best) = best {
            self.estimates.insert(prev, best);
        }

        // min_by_key keeps the first of equal elements so ties go to the earlier move
        let chosen = self
            .map
            .possible_moves(state)
            .into_iter()
            .min_by_key(|&mov| self.lookahead_cost(state, mov));

        if let Some((id, pos)) = box_was_moved(prev, state) {
            self.visited.increment(id, pos);
        }

        chosen
    }

    fn lookahead_cost(&self, state: &State, mov: Move) -> i32 {
        let next = self.map.apply_move(state, mov);
        let visited = Some(&self.visited);
        let cost = (self.c)(self.map, state, mov, Some(&next), visited);
        match self.estimates.get(&next) {
            Some(estimate) => cost + estimate + LOOKAHEAD_PENALTY,
            None => (self.h)(self.map, &next, visited) + cost,
        }
    }

    pub(crate) fn stats(&self) -> Stats {
        Stats {
            estimates: self.estimates.len(),
            visited_placements: self.visited.len(),
            ..Stats::default()
        }
    }
}

/// Runs the agent until it stops or makes `max_steps` moves.
pub(crate) fn lrta_star(
    map: &GoalMap,
    initial_state: &State,
    h: Heuristic,
    c: Cost,
    max_steps: Option<usize>,
) -> Outcome {
    debug!("LRTA* called");

    let mut agent = Agent::new(map, h, c);
    let mut state = initial_state.clone();
    let mut prev = initial_state.clone();
    let mut path_states = vec![state.clone()];
    let mut moves = Moves::default();
    let mut pulls = 0;

    while let Some(mov) = agent.next_move(&state, &prev) {
        if max_steps.map_or(false, |max| moves.move_cnt() >= max) {
            warn!("Giving up after {} steps", moves.move_cnt());
            break;
        }

        let next = map.apply_move(&state, mov);
        trace!("Step {}: {}", moves.move_cnt() + 1, mov);

        if box_was_pulled(&state, &next) {
            pulls += 1;
        }
        if box_reached_goal(map, &state, &next) {
            debug!("Box reached a goal after {} steps", moves.move_cnt() + 1);
        }

        path_states.push(next.clone());
        moves.add(mov);
        prev = mem::replace(&mut state, next);
    }

    debug!("LRTA* stopped after {} steps", moves.move_cnt());
    Outcome {
        path_states,
        steps: moves.move_cnt(),
        moves: Some(moves),
        pulls,
        stats: agent.stats(),
    }
}
