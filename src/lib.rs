// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod solver;
pub mod state;

mod vec2d;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::Method;
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let level = fs::read_to_string(self)?;
        Ok(level.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, method: Method, print_status: bool) -> Result<SolverOk, SolverErr>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_levels() {
        let levels = [
            ("levels/simple/00-no-boxes.txt", Method::LrtaStar, 0),
            ("levels/simple/00-no-boxes.txt", Method::BeamSearch, 0),
            ("levels/simple/01-push-once.txt", Method::LrtaStar, 1),
            ("levels/simple/01-push-once.txt", Method::BeamSearch, 0),
            ("levels/simple/02-corridor.txt", Method::LrtaStar, 3),
        ];

        for &(path, method, steps) in &levels {
            let level = path.load_level().unwrap();
            let solution = level.solve(method, false).unwrap();
            assert!(solution.solved, "{} with {}", path, method);
            assert_eq!(solution.steps, steps, "{} with {}", path, method);
        }
    }

    #[test]
    fn missing_file() {
        assert!("levels/simple/does-not-exist.txt".load_level().is_err());
    }
}
