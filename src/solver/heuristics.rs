//! Estimates of the remaining work (heuristics, less is better)
//! and of the price of a single move (costs).

use std::borrow::Cow;

use crate::config::HeuristicKind;
use crate::data::{Dir, Pos};
use crate::map::GoalMap;
use crate::moves::Move;
use crate::state::{BoxId, State};

use super::table::Visited;
use super::utils::{boxes_and_goals, corner, manhattan, sign};

pub type Heuristic = fn(&GoalMap, &State, Option<&Visited>) -> i32;

/// `next` is the state after the move if the caller already has it.
pub type Cost = fn(&GoalMap, &State, Move, Option<&State>, Option<&Visited>) -> i32;

const CORNER_PENALTY: i32 = 100;
const VISITED_PENALTY: i32 = 10;
const LEFT_GOAL_PENALTY: i32 = 50;

impl HeuristicKind {
    pub fn functions(self) -> (Heuristic, Cost) {
        match self {
            HeuristicKind::H1 => (h1, c1),
            HeuristicKind::H2 => (h2, c2),
            HeuristicKind::H3 => (h3, c3),
        }
    }
}

/// Player to the closest box plus every box to its closest goal.
pub fn h1(map: &GoalMap, state: &State, _visited: Option<&Visited>) -> i32 {
    let closest_box = state
        .boxes
        .iter()
        .map(|&b| manhattan(state.player_pos, b))
        .min()
        .unwrap_or(0);

    let mut goal_dist_sum = 0;
    for &box_pos in &state.boxes {
        let mut min = None;
        for &goal in &map.goals {
            let dist = manhattan(box_pos, goal);
            if min.map_or(true, |m| dist < m) {
                min = Some(dist);
            }
        }
        goal_dist_sum += min.unwrap_or(0);
    }

    closest_box + goal_dist_sum
}

pub fn c1(
    _map: &GoalMap,
    _state: &State,
    _mov: Move,
    _next: Option<&State>,
    _visited: Option<&Visited>,
) -> i32 {
    1
}

/// Boxes and goals paired up in the order they appear in the level (not by distance)
/// plus the distance the player has to walk to get behind the box closest to them.
pub fn h2(map: &GoalMap, state: &State, _visited: Option<&Visited>) -> i32 {
    let mut total: i32 = state
        .boxes
        .iter()
        .zip(&map.goals)
        .map(|(&b, &g)| manhattan(b, g))
        .sum();

    let player_pos = state.player_pos;
    let box_pos = match state.boxes.iter().min_by_key(|&&b| manhattan(player_pos, b)) {
        Some(&b) => b,
        None => return total,
    };
    let goal = match map.goals.iter().min_by_key(|&&g| manhattan(box_pos, g)) {
        Some(&g) => g,
        None => return total,
    };

    // stand on the side of the box facing away from the goal, along the longer axis
    let (dr, dc) = (box_pos.r - goal.r, box_pos.c - goal.c);
    let required_player_pos = if dr.abs() > dc.abs() {
        Pos::new(box_pos.r + sign(dr), box_pos.c)
    } else {
        Pos::new(box_pos.r, box_pos.c + sign(dc))
    };

    total += manhattan(player_pos, required_player_pos);
    total
}

pub fn c2(
    _map: &GoalMap,
    _state: &State,
    _mov: Move,
    _next: Option<&State>,
    _visited: Option<&Visited>,
) -> i32 {
    1
}

/// Every box not on a goal to the closest free goal, with penalties
/// for boxes stuck in corners and for boxes returning to cells they already visited.
pub fn h3(map: &GoalMap, state: &State, visited: Option<&Visited>) -> i32 {
    let (boxes, goals) = boxes_and_goals(map, state);
    let walls = map.walls();

    let mut total = 0;
    for (id, box_pos) in boxes {
        if let Some(dist) = goals.iter().map(|&g| manhattan(box_pos, g)).min() {
            total += dist;
        }

        if corner(box_pos, walls) {
            total += CORNER_PENALTY;
        }

        if let Some(visited) = visited {
            total += VISITED_PENALTY * visited.get(id, box_pos) as i32;
        }
    }
    total
}

/// Where a box should go next and where the player has to stand to get it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) id: BoxId,
    pub(crate) box_pos: Pos,
    pub(crate) player_pos: Pos,
}

/// One placement per box not on a goal, if the box can move anywhere sensible.
pub(crate) fn best_placements(
    map: &GoalMap,
    state: &State,
    visited: Option<&Visited>,
) -> Vec<Placement> {
    let walls = map.walls();
    let (boxes, goals) = boxes_and_goals(map, state);

    let mut placements = Vec::new();
    for ((id, box_pos), goal) in boxes.into_iter().zip(goals) {
        let (dr, dc) = (goal.r - box_pos.r, goal.c - box_pos.c);
        let (sr, sc) = (sign(dr), sign(dc));

        // towards the goal along the longer axis first, then the other axis, then away
        let offsets = if dr.abs() > dc.abs() {
            [(sr, 0), (0, sc), (0, -sc), (-sr, 0)]
        } else {
            [(0, sc), (sr, 0), (-sr, 0), (0, -sc)]
        };

        let mut dirs: Vec<Dir> = offsets
            .iter()
            .filter_map(|&(r, c)| Dir::from_offset(r, c))
            .filter(|&d| {
                let dest = box_pos + d;
                !walls.contains(dest) && !corner(dest, walls) && state.box_at(dest).is_none()
            })
            .collect();

        if let Some(visited) = visited {
            let fresh: Vec<Dir> = dirs
                .iter()
                .cloned()
                .filter(|&d| visited.get(id, box_pos + d) == 0)
                .collect();
            if !fresh.is_empty() {
                dirs = fresh;
            }
        }

        // prefer pushing, fall back to pulling
        let push = dirs
            .iter()
            .find(|&&d| !walls.contains(box_pos - d))
            .map(|&d| (box_pos + d, box_pos - d));
        let pull = || {
            dirs.iter()
                .find(|&&d| !walls.contains(box_pos + d))
                .map(|&d| (box_pos + d, box_pos + d))
        };

        if let Some((dest, player_pos)) = push.or_else(pull) {
            placements.push(Placement {
                id,
                box_pos: dest,
                player_pos,
            });
        }
    }
    placements
}

/// Free when a box lands where it should, otherwise the distance the player still has to walk
/// to get into position. Taking a box off a goal is expensive.
pub fn c3(
    map: &GoalMap,
    state: &State,
    mov: Move,
    next: Option<&State>,
    visited: Option<&Visited>,
) -> i32 {
    let next = match next {
        Some(next) => Cow::Borrowed(next),
        None => Cow::Owned(map.apply_move(state, mov)),
    };

    let (boxes_before, _) = boxes_and_goals(map, state);
    let (boxes_after, _) = boxes_and_goals(map, &next);
    if boxes_before.len() < boxes_after.len() {
        return LEFT_GOAL_PENALTY;
    }

    let placements = best_placements(map, state, visited);
    if placements.iter().any(|p| next.box_pos(p.id) == p.box_pos) {
        return 0;
    }

    placements
        .iter()
        .map(|p| manhattan(next.player_pos, p.player_pos))
        .min()
        .unwrap_or_else(|| {
            state
                .boxes
                .iter()
                .map(|&b| manhattan(next.player_pos, b))
                .min()
                .unwrap_or(0)
        })
}
