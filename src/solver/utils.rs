//! Small stateless helpers shared by the heuristics and the search engines.

use fnv::FnvHashSet;

use crate::data::{MapCell, Pos};
use crate::map::GoalMap;
use crate::state::{BoxId, State};
use crate::vec2d::Vec2d;

/// Obstacle cells plus a virtual border one cell outside the grid
/// so pushing a box off the map looks like pushing it into a wall.
#[derive(Debug, Clone, Default)]
pub struct Walls(FnvHashSet<Pos>);

impl Walls {
    pub fn contains(&self, pos: Pos) -> bool {
        self.0.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) fn walls(grid: &Vec2d<MapCell>) -> Walls {
    let mut walls: FnvHashSet<Pos> = grid
        .positions()
        .filter(|&pos| grid[pos] == MapCell::Wall)
        .collect();
    // the border cells diagonal to the grid's corners are not needed - nothing can stand next to them
    for c in 0..grid.cols() {
        walls.insert(Pos::new(-1, c));
        walls.insert(Pos::new(grid.rows(), c));
    }
    for r in 0..grid.rows() {
        walls.insert(Pos::new(r, -1));
        walls.insert(Pos::new(r, grid.cols()));
    }
    Walls(walls)
}

pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.r - b.r).abs() + (a.c - b.c).abs()
}

pub fn sign(x: i32) -> i32 {
    x.signum()
}

/// A cell with two perpendicular neighboring walls. A box there can never move again.
pub fn corner(pos: Pos, walls: &Walls) -> bool {
    let up = walls.contains(Pos::new(pos.r - 1, pos.c));
    let down = walls.contains(Pos::new(pos.r + 1, pos.c));
    let left = walls.contains(Pos::new(pos.r, pos.c - 1));
    let right = walls.contains(Pos::new(pos.r, pos.c + 1));
    (up || down) && (left || right)
}

/// Boxes which are not on a goal and goals without a box, both in their original order.
pub fn boxes_and_goals(map: &GoalMap, state: &State) -> (Vec<(BoxId, Pos)>, Vec<Pos>) {
    let mut boxes = Vec::new();
    let mut goals = map.goals.clone();

    for (id, pos) in state.boxes() {
        match goals.iter().position(|&g| g == pos) {
            Some(i) => {
                goals.remove(i);
            }
            None => boxes.push((id, pos)),
        }
    }

    (boxes, goals)
}

/// The first box of `next` standing somewhere no box of `prev` stood.
pub fn box_was_moved(prev: &State, next: &State) -> Option<(BoxId, Pos)> {
    next.boxes().find(|&(_, pos)| !prev.boxes.contains(&pos))
}

/// A box ended up where the player used to be - only a pull can do that.
pub fn box_was_pulled(prev: &State, next: &State) -> bool {
    next.boxes.contains(&prev.player_pos)
}

pub fn box_reached_goal(map: &GoalMap, prev: &State, next: &State) -> bool {
    let (prev_boxes, _) = boxes_and_goals(map, prev);
    let (next_boxes, _) = boxes_and_goals(map, next);
    prev_boxes.len() > next_boxes.len()
}
