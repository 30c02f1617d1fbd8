//! End-to-end checks of descriptors computed from images and grids.

use image::{GrayImage, Luma, Rgb, RgbImage};
use lbp::{
    lbp_distribution, Grid, Histogram, LbpEngine, LbpError, LbpOptions, RotationMode,
    SpectrumMagnitude,
};
use proptest::prelude::*;

const FIXTURE: [[u8; 4]; 4] = [[6, 5, 2, 6], [7, 6, 1, 7], [9, 8, 7, 9], [6, 5, 2, 6]];

fn fixture_columns() -> Vec<Vec<u8>> {
    FIXTURE.iter().map(|column| column.to_vec()).collect()
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Rotates a grid by a quarter turn: `out[x][y] = in[y][height - 1 - x]`.
fn quarter_turn(columns: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let width = columns.len();
    let height = columns[0].len();
    (0..height)
        .map(|x| (0..width).map(|y| columns[y][height - 1 - x]).collect())
        .collect()
}

fn columns_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (3usize..12, 3usize..12).prop_flat_map(|(w, h)| {
        proptest::collection::vec(proptest::collection::vec(0u8..8, h), w)
    })
}

#[test]
fn test_fixture_pattern_histogram() {
    init_logging();
    let options = LbpOptions::default().with_normalize(false);
    let distribution = lbp_distribution(fixture_columns(), options).unwrap();
    assert_eq!(
        distribution.feature,
        Some(vec![0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0])
    );
}

#[test]
fn test_gray_rgb_image_matches_columns() {
    init_logging();
    let image = RgbImage::from_fn(4, 4, |x, y| {
        let v = FIXTURE[x as usize][y as usize];
        Rgb([v, v, v])
    });
    let from_image = Grid::from_rgb_image(&image).unwrap();
    let from_columns = Grid::from_columns(fixture_columns()).unwrap();
    assert_eq!(from_image, from_columns);

    let mut engine = LbpEngine::new(LbpOptions::default()).unwrap();
    let a = engine.distribution(&from_image);
    engine.clear_cache();
    let b = engine.distribution(&from_columns);
    assert_eq!(a, b);
}

#[test]
fn test_checkerboard() {
    init_logging();
    let image = GrayImage::from_fn(6, 6, |x, y| Luma([if (x + y) % 2 == 0 { 200 } else { 10 }]));
    let grid = Grid::from_gray_image(&image).unwrap();
    let mut engine = LbpEngine::new(LbpOptions::default().with_normalize(false)).unwrap();
    let distribution = engine.distribution(&grid);

    // Dark centres see diagonal neighbours equal to themselves and
    // edge neighbours brighter: all ones. Bright centres see only their
    // diagonals as ties: 0b10101010, non-uniform.
    let counts = distribution.histogram.counts();
    assert_eq!(counts.len(), 10);
    assert_eq!(counts[8], 8);
    assert_eq!(counts[9], 8);
    assert_eq!(counts.iter().sum::<u32>(), 16);
}

#[test]
fn test_cache_persists_across_images() {
    init_logging();
    let bright = Grid::from_columns(vec![vec![9, 9, 9], vec![9, 1, 9], vec![9, 9, 9]]).unwrap();
    let dim = Grid::from_columns(vec![vec![3, 3, 3], vec![3, 1, 3], vec![3, 3, 3]]).unwrap();
    let mut engine = LbpEngine::new(LbpOptions::default()).unwrap();

    assert_eq!(engine.distribution(&bright).contrast, vec![9.0]);
    // Same code, so the first image's contrast is reused.
    assert_eq!(engine.distribution(&dim).contrast, vec![9.0]);
    engine.clear_cache();
    assert_eq!(engine.distribution(&dim).contrast, vec![3.0]);
}

#[test]
fn test_disabled_mode_bins_raw_codes() {
    let options = LbpOptions::default().with_rotation("false".parse().unwrap());
    let distribution = lbp_distribution(fixture_columns(), options).unwrap();
    match distribution.histogram {
        Histogram::Codes(bins) => {
            assert_eq!(bins.len(), 256);
            assert_eq!(bins[62] + bins[255] + bins[4] + bins[196], 4);
        }
        Histogram::Classes(_) => panic!("expected raw code bins"),
    }
    assert_eq!(distribution.feature, None);
}

#[test]
fn test_rejections() {
    assert_eq!(
        lbp_distribution(fixture_columns(), LbpOptions::new(10, 1)).unwrap_err(),
        LbpError::InvalidSamplingGeometry {
            points: 10,
            radius: 1
        }
    );
    assert!(matches!(
        lbp_distribution(vec![vec![1, 2], vec![3, 4]], LbpOptions::default()),
        Err(LbpError::GridTooSmall { .. })
    ));
    assert_eq!(
        lbp_distribution(vec![], LbpOptions::default()).unwrap_err(),
        LbpError::EmptyInput
    );
    assert!(matches!(
        "diagonal".parse::<RotationMode>(),
        Err(LbpError::InvalidMode(_))
    ));
}

proptest! {
    #[test]
    fn proptest_class_counts_survive_quarter_turn(columns in columns_strategy()) {
        let rotated = quarter_turn(&columns);
        let options = LbpOptions::default().with_normalize(false);
        let a = lbp_distribution(columns, options).unwrap();
        let b = lbp_distribution(rotated, options).unwrap();
        prop_assert_eq!(a.histogram.counts(), b.histogram.counts());
    }

    #[test]
    fn proptest_spectrum_modulus_survives_quarter_turn(columns in columns_strategy()) {
        let rotated = quarter_turn(&columns);
        let options = LbpOptions::default().with_rotation(RotationMode::HistogramSpectrum {
            magnitude: SpectrumMagnitude::Modulus,
        });
        let a = lbp_distribution(columns, options).unwrap().feature.unwrap();
        let b = lbp_distribution(rotated, options).unwrap().feature.unwrap();
        prop_assert_eq!(a.len(), 38);
        for (x, y) in a.iter().zip(&b) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn proptest_series_have_one_entry_per_interior_pixel(columns in columns_strategy()) {
        let (w, h) = (columns.len(), columns[0].len());
        let distribution = lbp_distribution(columns, LbpOptions::default()).unwrap();
        prop_assert_eq!(distribution.contrast.len(), (w - 2) * (h - 2));
        prop_assert_eq!(distribution.variance.len(), (w - 2) * (h - 2));
        prop_assert!(distribution.variance.iter().all(|&v| v >= 0.0));
    }
}
