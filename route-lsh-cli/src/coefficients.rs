use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use lsh::banding;
use lsh::minhash::coefficients_from_seed;

#[derive(Parser, Debug)]
#[clap(
    name = "route-lsh-coefficients",
    about = "A program to generate MinHash coefficients shared by all bucket computations."
)]
struct Args {
    /// Number of LSH bands (must be at least 2).
    #[clap(short = 'b', long, default_value = "16")]
    bands: usize,

    /// Seed value for random values.
    #[clap(short = 's', long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let bands = args.bands;
    if bands < 2 {
        return Err(format!("Number of bands must be at least 2, got {bands}.").into());
    }
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let signature_size = banding::signature_size(bands);
    log::info!(
        "Generating {signature_size} coefficients ({} rows x {bands} bands) with seed {seed}",
        banding::rows_per_band(bands)
    );

    let coefficients = coefficients_from_seed(signature_size, seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(route_lsh_cli::format_coefficients(&coefficients).as_bytes())?;
    Ok(())
}
