//! Computes a rotation-invariant LBP descriptor of an image.
//!
//! Usage: `cargo run --example texture <image> [pattern|histogram|false] [P] [R]`

use image::open;
use itertools::Itertools;
use lbp::{Grid, Histogram, LbpEngine, LbpOptions};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        panic!("Please enter an input file");
    }
    let path = Path::new(&args[1]);
    let rotation = args
        .get(2)
        .map(|mode| mode.parse().expect("mode must be pattern, histogram or false"))
        .unwrap_or_default();
    let points = args.get(3).map_or(8, |p| p.parse().expect("P must be an integer"));
    let radius = args.get(4).map_or(1, |r| r.parse().expect("R must be an integer"));

    let image = open(path)
        .unwrap_or_else(|e| panic!("Could not load image at {:?}: {}", path, e))
        .to_rgb8();
    let grid = Grid::from_rgb_image(&image).expect("image too small");

    let options = LbpOptions::new(points, radius).with_rotation(rotation);
    let mut engine = LbpEngine::new(options).expect("invalid sampling geometry");
    let distribution = engine.distribution(&grid);

    match &distribution.histogram {
        Histogram::Codes(bins) => println!("codes: [{}]", bins.iter().join(", ")),
        Histogram::Classes(classes) => {
            println!("classes: [{}]", classes.class_counts().iter().join(", "))
        }
    }
    if let Some(feature) = &distribution.feature {
        println!(
            "feature ({}): [{}]",
            options.rotation,
            feature.iter().map(|x| format!("{:.4}", x)).join(", ")
        );
    }

    let pixels = distribution.contrast.len().max(1) as f64;
    println!(
        "mean contrast {:.3}, mean variance {:.3}",
        distribution.contrast.iter().sum::<f64>() / pixels,
        distribution.variance.iter().sum::<f64>() / pixels
    );
}
