//! Shared argument and file handling of the command-line tools.
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use clap::Args;
use lsh::minhash::HashCoefficient;
use route_lsh::{CalculatorConfig, GpsPoint, SignatureCalculator};

#[derive(Args, Debug)]
pub struct CalculatorArgs {
    /// File path to a track file, one track per line as whitespace-separated `lat,lon` pairs.
    #[clap(short = 'i', long)]
    pub track_path: PathBuf,

    /// File path to a coefficient file produced by the `coefficients` command.
    #[clap(short = 'c', long)]
    pub coefficient_path: PathBuf,

    /// Zoom level of the tile grid.
    #[clap(short = 'z', long, default_value = "17")]
    pub zoom: u32,

    /// Number of tiles in a shingle (must be more than 0).
    #[clap(short = 'w', long, default_value = "3")]
    pub shingle_size: usize,

    /// Number of LSH bands (must be at least 2). Must match the coefficient file.
    #[clap(short = 'b', long, default_value = "16")]
    pub bands: usize,

    /// Number of buckets per band.
    #[clap(short = 'k', long, default_value = "4294967296")]
    pub bucket_count: u64,

    /// Disables parallel computation.
    #[clap(short = 'p', long)]
    pub disable_parallel: bool,
}

impl CalculatorArgs {
    pub fn calculator(&self) -> Result<SignatureCalculator, Box<dyn Error>> {
        let config = CalculatorConfig::new(self.zoom, self.shingle_size, self.bands, self.bucket_count)?;
        let coefficients = read_coefficients(open(&self.coefficient_path)?)?;
        Ok(config.setup(coefficients)?)
    }

    pub fn tracks(&self) -> Result<Vec<Vec<GpsPoint>>, Box<dyn Error>> {
        read_tracks(open(&self.track_path)?)
    }

    pub fn buckets(
        &self,
        calculator: &SignatureCalculator,
        tracks: &[Vec<GpsPoint>],
    ) -> Vec<Vec<u64>> {
        if self.disable_parallel {
            tracks.iter().map(|t| calculator.buckets(t)).collect()
        } else {
            calculator.buckets_in_parallel::<_, GpsPoint>(tracks)
        }
    }
}

/// Parses `a,b` lines into coefficients. Blank lines are skipped.
pub fn read_coefficients<R>(rdr: R) -> Result<Vec<HashCoefficient>, Box<dyn Error>>
where
    R: Read,
{
    let mut coefficients = vec![];
    for (i, line) in BufReader::new(rdr).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (a, b) = line
            .split_once(',')
            .ok_or_else(|| format!("line {}: expected `a,b`, got {line:?}", i + 1))?;
        coefficients.push(HashCoefficient::new(a.trim().parse()?, b.trim().parse()?));
    }
    Ok(coefficients)
}

/// Parses one track per line. A blank line is an empty track, so line numbers stay track indices.
pub fn read_tracks<R>(rdr: R) -> Result<Vec<Vec<GpsPoint>>, Box<dyn Error>>
where
    R: Read,
{
    let mut tracks = vec![];
    for (i, line) in BufReader::new(rdr).lines().enumerate() {
        let line = line?;
        let mut track = vec![];
        for pair in line.split_whitespace() {
            let (lat, lon) = pair
                .split_once(',')
                .ok_or_else(|| format!("line {}: expected `lat,lon`, got {pair:?}", i + 1))?;
            let point = GpsPoint::new(lat.parse()?, lon.parse()?);
            if !(point.latitude.abs() < 90. && point.longitude.abs() <= 180.) {
                return Err(format!("line {}: coordinate out of range: {pair}", i + 1).into());
            }
            track.push(point);
        }
        tracks.push(track);
    }
    Ok(tracks)
}

/// Writes coefficients in the format read by [`read_coefficients`].
pub fn format_coefficients(coefficients: &[HashCoefficient]) -> String {
    coefficients
        .iter()
        .map(|c| format!("{},{}\n", c.a, c.b))
        .collect()
}

/// Opens a file, naming the path in the error.
pub fn open<P>(path: P) -> Result<File, Box<dyn Error>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    File::open(path).map_err(|e| format!("{}: {e}", path.display()).into())
}
