use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::data::{MapCell, Pos, DIRECTIONS};
use crate::map_formatter::MapFormatter;
use crate::moves::{Move, MoveKind};
use crate::solver::utils::{self, Walls};
use crate::state::State;
use crate::vec2d::Vec2d;

/// Everything about a level that doesn't change while solving it.
#[derive(Clone)]
pub struct GoalMap {
    pub(crate) grid: Vec2d<MapCell>,
    pub goals: Vec<Pos>,
    walls: Walls,
}

impl GoalMap {
    pub(crate) fn new(grid: Vec2d<MapCell>, goals: Vec<Pos>) -> Self {
        let walls = utils::walls(&grid);
        GoalMap { grid, goals, walls }
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    /// Obstacles plus the virtual border around the grid.
    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    /// Off-grid cells count as obstacles.
    pub fn is_blocked(&self, pos: Pos) -> bool {
        match self.grid.get(pos) {
            Some(&cell) => cell == MapCell::Wall,
            None => true,
        }
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    /// Legal moves in a fixed order: steps and pushes for each direction first, pulls after.
    pub fn possible_moves(&self, state: &State) -> Vec<Move> {
        let free = |pos: Pos| !self.is_blocked(pos) && state.box_at(pos).is_none();

        let mut moves = Vec::new();
        for &dir in &DIRECTIONS {
            let new_player_pos = state.player_pos + dir;
            if self.is_blocked(new_player_pos) {
                continue;
            }
            if state.box_at(new_player_pos).is_none() {
                moves.push(Move::new(dir, MoveKind::Step));
            } else if free(new_player_pos + dir) {
                moves.push(Move::new(dir, MoveKind::Push));
            }
        }
        for &dir in &DIRECTIONS {
            if free(state.player_pos + dir) && state.box_at(state.player_pos - dir).is_some() {
                moves.push(Move::new(dir, MoveKind::Pull));
            }
        }
        moves
    }

    /// Pure - the move has to come from `possible_moves` for the same state.
    pub fn apply_move(&self, state: &State, mov: Move) -> State {
        let old_player_pos = state.player_pos;
        let new_player_pos = old_player_pos + mov.dir;
        let mut boxes = state.boxes.clone();
        match mov.kind {
            MoveKind::Step => {}
            MoveKind::Push => {
                let id = state
                    .box_at(new_player_pos)
                    .expect("push without a box in front of the player");
                boxes[id.0] = new_player_pos + mov.dir;
            }
            MoveKind::Pull => {
                let id = state
                    .box_at(old_player_pos - mov.dir)
                    .expect("pull without a box behind the player");
                boxes[id.0] = old_player_pos;
            }
        }
        debug_assert!(!self.is_blocked(new_player_pos));
        State::new(new_player_pos, boxes)
    }

    /// Every box on a goal - trivially true without boxes.
    pub fn is_solved(&self, state: &State) -> bool {
        state.boxes.iter().all(|&b| self.is_goal(b))
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, state)
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
