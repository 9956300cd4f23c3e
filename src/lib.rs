// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod solver;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;

use crate::config::SolverConfig;
use crate::level::Level;
use crate::solver::SolverOk;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    /// Breadth first search for the shortest solution in pushes.
    ///
    /// Unsolvable levels and exhausted budgets are reported in `SolverOk::outcome`.
    fn solve(&self, config: &SolverConfig) -> SolverOk;
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use separator::Separatable;

    use super::*;

    #[test]
    fn test_levels() {
        // (path, states on the solution path, unique states, block configurations)
        let levels = [
            ("00-solved.txt", Some(1), 1, 1),
            ("01-one-push.txt", Some(2), 2, 2),
            ("02-line.txt", Some(3), 3, 3),
            ("03-room.txt", Some(4), 15, 15),
            ("04-two-blocks.txt", Some(5), 169, 169),
            ("05-four-blocks.txt", Some(25), 27_555, 23_881),
            ("06-sealed-corner.txt", Some(9), 58, 57),
            ("no-solution-corner.txt", None, 1, 1),
        ];

        for &(level_name, path_len, unique, configurations) in &levels {
            test_level(level_name, path_len, unique, configurations);
        }
    }

    // separate fn to get stack traces with correct line numbers
    fn test_level(
        level_name: &str,
        expected_len: Option<usize>,
        expected_unique: usize,
        expected_configurations: usize,
    ) {
        let level_path = format!("levels/grid/{}", level_name);
        println!("Solving {}", level_path);
        let started = Instant::now();

        let level = level_path.load_level().unwrap();
        let solver_ok = level.solve(&SolverConfig::default());

        // innacurate, only useful to quickly see which levels are difficult
        println!(
            "Solved {} in approximately {} ms",
            level_path,
            (started.elapsed().as_millis() as u64).separated_string(),
        );
        println!("{:?}", solver_ok);

        match solver_ok.solution() {
            Some(solution) => {
                assert_eq!(Some(solution.len()), expected_len, "{}", level_path);
                assert!(level.board.is_goal(solution.final_state()));
                assert_eq!(solution.path_states()[0], level.state);
            }
            None => assert_eq!(None, expected_len, "{}", level_path),
        }
        assert_eq!(solver_ok.stats.total_unique(), expected_unique, "{}", level_path);
        assert_eq!(
            solver_ok.stats.total_configurations(),
            expected_configurations,
            "{}",
            level_path
        );
    }

    #[test]
    fn sealed_corner_solution() {
        // pushing the free block left seals off the corner the player would push it up from
        let level = "levels/grid/06-sealed-corner.txt".load_level().unwrap();
        let solver_ok = level.solve(&SolverConfig::default());
        let solution = solver_ok.solution().unwrap();
        assert_eq!(solution.push_cnt(), 8);
        assert_eq!(
            solution.final_state(),
            &state::State::new(
                data::Pos::new(2, 2),
                vec![data::Pos::new(3, 1), data::Pos::new(1, 2)]
            )
        );
    }

    #[test]
    fn four_blocks_solution() {
        let level = "levels/grid/05-four-blocks.txt".load_level().unwrap();
        let solver_ok = level.solve(&SolverConfig::default());
        let solution = solver_ok.solution().unwrap();
        assert_eq!(solution.push_cnt(), 24);
        assert_eq!(
            solution.final_state().blocks,
            vec![
                data::Pos::new(2, 3),
                data::Pos::new(4, 3),
                data::Pos::new(5, 3),
                data::Pos::new(3, 3),
            ]
        );
        assert_eq!(solution.final_state().player_pos, data::Pos::new(5, 4));
    }

    #[test]
    fn missing_file() {
        assert!("levels/does-not-exist.txt".load_level().is_err());
    }
}
