use std::env;
use std::process;
use std::time::Instant;

use chrono::Local;
use dsssp::algorithm::verify::verify;
use dsssp::config::{OutputFormat, RunConfig, USAGE};
use dsssp::graph::loader::load_graph;
use dsssp::report::RunReport;
use dsssp::DistributedBellmanFord;

fn main() {
    // Initialize logging
    env_logger::init();

    let config = match RunConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(config: &RunConfig) -> dsssp::Result<()> {
    let graph = load_graph::<i64>(&config.input)?;

    let mut algorithm = DistributedBellmanFord::new();
    if let Some(units) = config.units {
        algorithm = algorithm.with_units(units);
    }
    if let Some(threads) = config.worker_threads {
        algorithm = algorithm.with_worker_threads(threads);
    }

    let started_at = Local::now();
    if config.format == OutputFormat::Table {
        println!("Distributed shortest paths running...\nStart time: {}\n", started_at.format("%a %b %e %T %Y"));
    }

    let clock = Instant::now();
    let outcome = algorithm.run_blocking(&graph, config.source)?;
    let elapsed = clock.elapsed();

    if config.verify {
        verify(&graph, &outcome.result)?;
        log::info!("result verified");
    }

    let report = RunReport::new(&outcome, started_at, elapsed);
    match config.format {
        OutputFormat::Table => {
            println!("Finished with total time (sec): {:.6}", report.elapsed_secs);
            print!("{}", report.render_table());
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
