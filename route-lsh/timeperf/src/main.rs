use std::time::Instant;

use rand::{thread_rng, Rng};
use route_lsh::{CalculatorConfig, GpsPoint};

const TRIALS: usize = 3;
const NUM_TRACKS: usize = 1_000;
const NUM_POINTS: usize = 500;
const ZOOMS: [u32; 3] = [14, 16, 18];
const SHINGLE_SIZES: [usize; 2] = [2, 4];
const BANDS: [usize; 3] = [4, 16, 64];

fn main() {
    let tracks = random_walks(NUM_TRACKS, NUM_POINTS);
    for &zoom in &ZOOMS {
        for &shingle_size in &SHINGLE_SIZES {
            for &bands in &BANDS {
                let config = CalculatorConfig::new(zoom, shingle_size, bands, 1 << 32).unwrap();
                let calculator = config.setup_with_seed(42).unwrap();
                let num_tiles: usize = tracks.iter().map(|t| calculator.path(t).len()).sum();
                let serial_sec = measure(TRIALS, || {
                    for track in &tracks {
                        calculator.buckets(track);
                    }
                });
                let parallel_sec = measure(TRIALS, || {
                    calculator.buckets_in_parallel::<_, GpsPoint>(&tracks);
                });
                println!(
                    "[zoom={zoom},shingle_size={shingle_size},bands={bands},rows={},num_tracks={NUM_TRACKS},avg_tiles={}] serial={serial_sec} sec, parallel={parallel_sec} sec",
                    config.signature_size() / bands,
                    num_tiles / NUM_TRACKS,
                );
            }
        }
    }
}

/// Generates tracks wandering around central Europe at a few meters per sample.
fn random_walks(num_tracks: usize, num_points: usize) -> Vec<Vec<GpsPoint>> {
    let mut rng = thread_rng();
    (0..num_tracks)
        .map(|_| {
            let mut lat = rng.gen_range(45.0..50.0);
            let mut lon = rng.gen_range(5.0..15.0);
            let mut track = Vec::with_capacity(num_points);
            for _ in 0..num_points {
                lat += rng.gen_range(-1e-4..1e-4);
                lon += rng.gen_range(-1e-4..1e-4);
                track.push(GpsPoint::new(lat, lon));
            }
            track
        })
        .collect()
}

fn measure<F>(num_trials: usize, mut func: F) -> f64
where
    F: FnMut(),
{
    let start = Instant::now();
    for _ in 0..num_trials {
        func();
    }
    let duration = start.elapsed();
    duration.as_secs_f64() / num_trials as f64
}
