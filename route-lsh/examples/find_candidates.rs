use route_lsh::candidates::candidate_pairs;
use route_lsh::CalculatorConfig;

fn main() {
    let tracks = vec![
        // A loop in central Paris.
        vec![(48.8566, 2.3522), (48.8600, 2.3600), (48.8650, 2.3700), (48.8700, 2.3650)],
        // The same loop recorded by another device.
        vec![(48.85661, 2.35221), (48.86001, 2.36001), (48.86501, 2.37001), (48.87001, 2.36501)],
        // Somewhere else entirely.
        vec![(-33.8688, 151.2093), (-33.8650, 151.2150), (-33.8600, 151.2200)],
    ];

    // Tiles at zoom 17, shingles of 3 tiles, 8 bands of 2^32 buckets.
    let config = CalculatorConfig::new(17, 3, 8, 1 << 32).unwrap();
    // Every process comparing bucket vectors must use the same seed (or the same coefficients).
    let calculator = config.setup_with_seed(42).unwrap();

    let buckets = calculator.buckets_in_parallel::<_, (f64, f64)>(&tracks);
    for (i, b) in buckets.iter().enumerate() {
        println!("track {i}: {b:?}");
    }
    for (i, j) in candidate_pairs(&buckets) {
        println!("candidate pair: {i}, {j}");
    }
}
