use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::map::GoalMap;
use crate::map_formatter::MapFormatter;
use crate::state::State;

#[derive(Clone)]
pub struct Level {
    pub map: GoalMap,
    pub state: State,
}

impl Level {
    pub fn new(map: GoalMap, state: State) -> Self {
        Level { map, state }
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.map.format_with_state(&self.state)
    }

    pub fn is_solved(&self) -> bool {
        self.map.is_solved(&self.state)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
