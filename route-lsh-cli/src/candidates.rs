use std::error::Error;
use std::time::Instant;

use clap::Parser;
use route_lsh::candidates::candidate_pairs;
use route_lsh_cli::CalculatorArgs;

#[derive(Parser, Debug)]
#[clap(
    name = "route-lsh-candidates",
    about = "A program to find candidate pairs of near-duplicate GPS tracks."
)]
struct Args {
    #[clap(flatten)]
    calculator: CalculatorArgs,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let calculator = args.calculator.calculator()?;
    let tracks = args.calculator.tracks()?;

    log::info!("Converting {} tracks into bucket vectors...", tracks.len());
    let start = Instant::now();
    let buckets = args.calculator.buckets(&calculator, &tracks);
    log::info!("Done in {} sec", start.elapsed().as_secs_f64());

    log::info!("Grouping tracks by band buckets...");
    let start = Instant::now();
    let results = candidate_pairs(&buckets);
    log::info!(
        "Found {} candidate pairs in {} sec",
        results.len(),
        start.elapsed().as_secs_f64()
    );

    println!("i,j");
    for (i, j) in results {
        println!("{i},{j}");
    }

    Ok(())
}
