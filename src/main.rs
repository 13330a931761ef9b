use std::env;
use std::path::Path;
use std::process::ExitCode;

use rand::Rng;
use tracing_subscriber::EnvFilter;

use invasion_sim::flush::flush_to_jsonl;
use invasion_sim::parse::parse_world_file;
use invasion_sim::{WarConfig, start_war};

fn usage() -> ExitCode {
    eprintln!("usage: invasion-sim <map-file> <num-aliens> [seed] [snapshot-dir]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        return usage();
    }

    let Ok(num_aliens) = args[2].parse::<u64>() else {
        eprintln!("invalid number of aliens: {:?}", args[2]);
        return usage();
    };
    let seed = match args.get(3) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("invalid seed: {raw:?}");
                return usage();
            }
        },
        None => rand::rng().random(),
    };

    let world = match parse_world_file(Path::new(&args[1])) {
        Ok(world) => world,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = start_war(world, &WarConfig::new(num_aliens, seed));

    if let Some(dir) = args.get(4) {
        if let Err(err) = flush_to_jsonl(&outcome.world, Path::new(dir)) {
            eprintln!("error: failed to write snapshot: {err}");
            return ExitCode::FAILURE;
        }
    }

    print!("{}", outcome.world);
    ExitCode::SUCCESS
}
