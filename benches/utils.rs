#![allow(dead_code)]
use cartree::data::{Dataset, Row, Scalar};
use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const COLORS: [&str; 4] = ["red", "green", "blue", "yellow"];

pub(crate) fn create_data(n_samples: usize, n_features: usize) -> Dataset {
    // reproducible seed
    let mut rng = StdRng::seed_from_u64(1903);

    // features are rounded so columns repeat values
    let feature_distribution = Uniform::new(0.0, 10.0);
    let noise_distribution = Uniform::new(-1.0, 1.0);

    let mut rows = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let mut values: Vec<Scalar> = (0..n_features)
            .map(|_| Scalar::Numeric(rng.sample(feature_distribution).round()))
            .collect();
        let color = COLORS[rng.gen_range(0..COLORS.len())];
        values.push(Scalar::from(color));

        let x0 = values[0].as_f64().unwrap_or(0.0);
        let signal = x0 + rng.sample(noise_distribution) + if color == "red" { 2.0 } else { 0.0 };
        let label = if signal > 5.0 { "high" } else { "low" };
        values.push(Scalar::from(label));
        rows.push(Row::new(values).unwrap());
    }
    Dataset::new(rows).unwrap()
}
