use std::error::Error;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};
use log::debug;

use sokoban_bfs::config::{Dedup, SolverConfig};
use sokoban_bfs::solver::Outcome;
use sokoban_bfs::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-bfs")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds the solution with the fewest pushes")
        .arg(
            Arg::with_name("dedup-by-set")
                .long("dedup-by-set")
                .help("treat block configurations as sets of positions"),
        )
        .arg(
            Arg::with_name("max-states")
                .long("max-states")
                .takes_value(true)
                .value_name("N")
                .help("give up after expanding N states"),
        )
        .arg(
            Arg::with_name("timeout-ms")
                .long("timeout-ms")
                .takes_value(true)
                .value_name("MS")
                .help("give up after MS milliseconds"),
        )
        .arg(
            Arg::with_name("status")
                .short("s")
                .long("status")
                .help("print status whenever the search reaches a new depth"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print state counts by depth"),
        )
        .arg(
            Arg::with_name("moves")
                .short("m")
                .long("moves")
                .help("print all player moves in LURD format"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let config = parse_config(matches)?;
    debug!("Config: {:?}", config);

    let path = matches.value_of("file").ok_or("Missing level file")?;
    let level = path
        .load_level()
        .map_err(|err| format!("Can't load level {}: {}", path, err))?;

    let solver_ok = level.solve(&config);
    match solver_ok.outcome {
        Outcome::Solved(ref solution) => {
            for snapshot in solution.snapshots(&level.board) {
                println!("{}", snapshot);
            }
            println!("Solution length: {}", solution.len());
            println!("Pushes: {}", solution.push_cnt());
            if matches.is_present("moves") {
                let moves = solution.moves(&level.board)?;
                println!("{}", moves);
                println!("Moves: {}", moves.move_cnt());
            }
        }
        ref outcome => println!("{}", outcome),
    }

    if matches.is_present("stats") {
        println!();
        print!("{}", solver_ok.stats);
    }
    Ok(())
}

fn parse_config(matches: &ArgMatches<'_>) -> Result<SolverConfig, Box<dyn Error>> {
    let mut config = SolverConfig::default().print_status(matches.is_present("status"));
    if matches.is_present("dedup-by-set") {
        config = config.dedup(Dedup::BlockSet);
    }
    if let Some(max) = matches.value_of("max-states") {
        let max = max
            .parse()
            .map_err(|err| format!("Invalid --max-states {}: {}", max, err))?;
        config = config.max_states(max);
    }
    if let Some(ms) = matches.value_of("timeout-ms") {
        let ms = ms
            .parse()
            .map_err(|err| format!("Invalid --timeout-ms {}: {}", ms, err))?;
        config = config.time_limit(Duration::from_millis(ms));
    }
    Ok(config)
}
