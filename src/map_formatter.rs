use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell, Pos};
use crate::map::GoalMap;
use crate::state::State;

pub struct MapFormatter<'a> {
    map: &'a GoalMap,
    state: &'a State,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(map: &'a GoalMap, state: &'a State) -> Self {
        Self { map, state }
    }
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = &self.map.grid;
        let mut state_grid = grid.scratchpad(Contents::Empty);
        for &b in &self.state.boxes {
            state_grid[b] = Contents::Box;
        }
        state_grid[self.state.player_pos] = Contents::Player;

        for r in 0..grid.rows() {
            // don't print trailing empty cells to match the input level strings
            let mut last_non_empty = -1;
            for c in 0..grid.cols() {
                let pos = Pos::new(r, c);
                if grid[pos] != MapCell::Empty || state_grid[pos] != Contents::Empty {
                    last_non_empty = c;
                }
            }

            for c in 0..=last_non_empty {
                let pos = Pos::new(r, c);
                write_xsb(grid[pos], state_grid[pos], f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn write_xsb(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
    match (cell, contents) {
        (MapCell::Wall, Contents::Empty) => write!(f, "#"),
        (MapCell::Wall, _) => unreachable!(),
        (MapCell::Empty, Contents::Empty) => write!(f, " "),
        (MapCell::Empty, Contents::Box) => write!(f, "$"),
        (MapCell::Empty, Contents::Player) => write!(f, "@"),
        (MapCell::Goal, Contents::Empty) => write!(f, "."),
        (MapCell::Goal, Contents::Box) => write!(f, "*"),
        (MapCell::Goal, Contents::Player) => write!(f, "+"),
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    #[test]
    fn formatting_level() {
        let xsb = r"
*###*
#@$.#
*###*#
"
        .trim_start_matches('\n');

        let level: Level = xsb.parse().unwrap();
        assert_eq!(level.to_string(), xsb);
        assert_eq!(format!("{:?}", level), xsb);
        assert_eq!(level.map.format_with_state(&level.state).to_string(), xsb);
    }

    #[test]
    fn formatting_moved_state() {
        let level: Level = "@$.".parse().unwrap();
        let moves = level.map.possible_moves(&level.state);
        let next = level.map.apply_move(&level.state, moves[0]);
        assert_eq!(level.map.format_with_state(&next).to_string(), " @*\n");
    }
}
