use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    LrtaStar,
    BeamSearch,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::LrtaStar => write!(f, "lrta_star"),
            Method::BeamSearch => write!(f, "beam_search"),
        }
    }
}

impl FromStr for Method {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lrta_star" => Ok(Method::LrtaStar),
            "beam_search" => Ok(Method::BeamSearch),
            _ => Err(UnknownName(s.to_owned())),
        }
    }
}

/// Which heuristic and cost function pair to search with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicKind {
    H1,
    H2,
    H3,
}

impl Display for HeuristicKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            HeuristicKind::H1 => write!(f, "h1"),
            HeuristicKind::H2 => write!(f, "h2"),
            HeuristicKind::H3 => write!(f, "h3"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h1" => Ok(HeuristicKind::H1),
            "h2" => Ok(HeuristicKind::H2),
            "h3" => Ok(HeuristicKind::H3),
            _ => Err(UnknownName(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl Display for UnknownName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown name: {}", self.0)
    }
}

impl Error for UnknownName {}
