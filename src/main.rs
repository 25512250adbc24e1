//! Grow a classification tree on a delimited file and classify rows with it.
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- resources/fruit.csv [config.json]
//! ```
use cartree::config::{ConfigIO, TreeConfig};
use cartree::data::Dataset;
use cartree::metric::accuracy;
use cartree::utils::fmt_label_map;
use cartree::Tree;
use log::{info, warn};
use std::env;
use std::error::Error;
use std::process;

const USAGE: &str = "usage: cartree <train.csv> [config.json]";

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        eprintln!("Failure: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let train_path = args.get(1).ok_or(USAGE)?;
    let config = match args.get(2) {
        Some(path) => TreeConfig::load_config(path)?,
        None => TreeConfig::default(),
    };

    let train = Dataset::from_csv_path(&config, train_path)?;
    info!(
        "Loaded {} rows with {} features from {}.",
        train.len(),
        train.n_features(),
        train_path
    );

    let tree = Tree::fit(&train)?;
    if config.print_tree {
        print!("{}", tree);
    }

    if let Some(method) = config.importance_method {
        let importance = tree.calculate_feature_importance(method, true);
        let mut columns: Vec<&usize> = importance.keys().collect();
        columns.sort();
        println!("Feature importance ({:?}):", method);
        for column in columns {
            println!("  {}: {:.4}", tree.feature_names[*column], importance[column]);
        }
    }

    let test = match &config.test_path {
        Some(path) => Dataset::from_csv_path(&config, path)?,
        None => train.clone(),
    };

    let mut actual = Vec::with_capacity(test.len());
    let mut predicted = Vec::with_capacity(test.len());
    for (i, row) in test.rows().iter().enumerate() {
        let prediction = tree
            .predict_probabilities(row)
            .and_then(|probs| tree.predict_label(row).map(|label| (probs, label.clone())));
        match prediction {
            Ok((probs, label)) => {
                println!("Actual: {}. Predicted: {}", row.label(), fmt_label_map(&probs, "%"));
                actual.push(row.label().clone());
                predicted.push(label);
            }
            Err(e) => warn!("Skipping row {}: {}", i, e),
        }
    }

    if !predicted.is_empty() {
        println!("Accuracy: {:.2}%", accuracy(&actual, &predicted)? * 100.0);
    }
    Ok(())
}
