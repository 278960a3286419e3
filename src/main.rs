//! Jukebox simulator CLI.
//!
//! Loads a song catalog and plays random songs until one repeats, many
//! times over, then prints play statistics.
//!
//! Usage:
//!   jukebox <CATALOG> [OPTIONS]
//!
//! Examples:
//!   jukebox songs.txt                 # Default: 100000 trials
//!   jukebox songs.txt -n 1000         # 1000 trials
//!   jukebox songs.txt --json -v       # JSON report, info logging

use clap::{ArgAction, Parser};
use jukebox::build_info;
use jukebox::{run_simulation, Catalog, JukeboxError, SimConfig};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "jukebox", version, long_version = build_info::LONG_VERSION)]
#[command(about = "Play random songs until one repeats, then report play statistics")]
struct Cli {
    /// Song file with one `<SEP>`-delimited record per line
    catalog: PathBuf,

    /// Number of simulations to run
    #[arg(short = 'n', long, default_value_t = SimConfig::default().num_trials)]
    trials: u32,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("jukebox {}", build_info::LONG_VERSION);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_load_error() {
                eprintln!("the catalog could not be loaded; no simulation was run");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: &Cli) -> Result<(), JukeboxError> {
    let config = SimConfig {
        num_trials: cli.trials,
        ..Default::default()
    };
    // Progress text would corrupt the JSON document on stdout
    let chatty = !cli.json;

    if chatty {
        println!("Loading the jukebox with songs:");
        println!(
            "\tReading songs from {} into jukebox...",
            cli.catalog.display()
        );
    }

    let catalog = Catalog::load(&cli.catalog)?;

    if chatty {
        println!("\tJukebox is loaded with {} songs", catalog.len());
        if let (Some(first), Some(last)) = (catalog.first(), catalog.last()) {
            println!("\tFirst song in jukebox: {}", first);
            println!("\tLast song in jukebox: {}", last);
        }
        println!("Running the simulation.  The jukebox starts rockin'!");
    }

    let started = Instant::now();
    let report = run_simulation(&config, &catalog)?;
    let elapsed = started.elapsed();

    if cli.json {
        println!("{}", report.to_json());
        return Ok(());
    }

    print!("{}", report.first_draws_text());
    println!(
        "\tSimulation took: {:.3} second/s to run",
        elapsed.as_secs_f64()
    );
    print!("{}", report.to_text());

    Ok(())
}
