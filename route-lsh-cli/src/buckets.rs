use std::error::Error;
use std::time::Instant;

use clap::Parser;
use route_lsh_cli::CalculatorArgs;

#[derive(Parser, Debug)]
#[clap(
    name = "route-lsh-buckets",
    about = "A program to compute LSH bucket vectors (or MinHash signatures) of GPS tracks."
)]
struct Args {
    #[clap(flatten)]
    calculator: CalculatorArgs,

    /// Prints MinHash signatures instead of bucket vectors.
    #[clap(long)]
    signature: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let calculator = args.calculator.calculator()?;
    let config = calculator.config();
    log::info!(
        "zoom={}, shingle_size={}, bands={}, rows={}, bucket_count={}",
        config.zoom(),
        config.shingle_size(),
        config.bands(),
        config.signature_size() / config.bands(),
        config.bucket_count()
    );
    let tracks = args.calculator.tracks()?;
    log::info!("Loaded {} tracks", tracks.len());

    let start = Instant::now();
    let rows: Vec<Vec<u64>> = if args.signature {
        tracks.iter().map(|t| calculator.signature(t)).collect()
    } else {
        args.calculator.buckets(&calculator, &tracks)
    };
    log::info!("Done in {} sec", start.elapsed().as_secs_f64());

    println!("i,{}", if args.signature { "signature" } else { "buckets" });
    for (i, row) in rows.iter().enumerate() {
        let row: Vec<String> = row.iter().map(u64::to_string).collect();
        println!("{i},{}", row.join(" "));
    }

    Ok(())
}
