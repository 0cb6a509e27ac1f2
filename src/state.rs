use std::fmt::{self, Display, Formatter};

use crate::data::Pos;

/// Index of a box in `State::boxes`, stable for the whole solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoxId(pub usize);

impl Display for BoxId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "box{}", self.0)
    }
}

/// The dynamic part of a level. Targets and obstacles never change during a solve
/// so they live in `GoalMap`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub player_pos: Pos,
    // not sorted - the index is the box's identity
    pub boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, boxes: Vec<Pos>) -> State {
        State { player_pos, boxes }
    }

    pub fn box_pos(&self, id: BoxId) -> Pos {
        self.boxes[id.0]
    }

    pub fn box_at(&self, pos: Pos) -> Option<BoxId> {
        self.boxes.iter().position(|&b| b == pos).map(BoxId)
    }

    pub fn boxes(&self) -> impl Iterator<Item = (BoxId, Pos)> + '_ {
        self.boxes.iter().enumerate().map(|(i, &b)| (BoxId(i), b))
    }

    /// Two states with boxes on the same cells get the same key
    /// even if the boxes swapped places.
    pub fn key(&self) -> StateKey {
        let mut boxes = self.boxes.clone();
        boxes.sort();
        StateKey {
            player_pos: self.player_pos,
            boxes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    player_pos: Pos,
    boxes: Vec<Pos>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_box_identity() {
        let a = State::new(Pos::new(0, 0), vec![Pos::new(1, 1), Pos::new(2, 2)]);
        let b = State::new(Pos::new(0, 0), vec![Pos::new(2, 2), Pos::new(1, 1)]);
        assert_ne!(a, b);
        assert_eq!(a.key(), b.key());

        let c = State::new(Pos::new(0, 1), vec![Pos::new(1, 1), Pos::new(2, 2)]);
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn box_lookup() {
        let s = State::new(Pos::new(0, 0), vec![Pos::new(1, 1), Pos::new(2, 2)]);
        assert_eq!(s.box_at(Pos::new(2, 2)), Some(BoxId(1)));
        assert_eq!(s.box_at(Pos::new(0, 0)), None);
        assert_eq!(s.box_pos(BoxId(0)), Pos::new(1, 1));
    }
}
