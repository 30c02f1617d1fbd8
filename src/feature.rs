//! Reduction of class histograms to feature vectors.

use crate::distribution::RotationHistogram;
use crate::math::normalize_l1;
use crate::options::{RotationMode, SpectrumMagnitude};
use num_complex::Complex;
use rustfft::FftPlanner;

/// Length of the feature vector for `points` samples in `mode`, or `None`
/// if the mode produces no feature.
///
/// # Examples
/// ```
/// use lbp::feature::feature_length;
/// use lbp::options::RotationMode;
///
/// assert_eq!(feature_length(8, RotationMode::PatternSum), Some(10));
/// assert_eq!(feature_length(8, "histogram".parse().unwrap()), Some(38));
/// assert_eq!(feature_length(8, RotationMode::Disabled), None);
/// ```
pub fn feature_length(points: u32, mode: RotationMode) -> Option<usize> {
    let p = points as usize;
    match mode {
        RotationMode::Disabled => None,
        RotationMode::PatternSum => Some(p + 2),
        RotationMode::HistogramSpectrum { .. } => {
            Some(p.saturating_sub(1) * (p / 2 + 1) + 3)
        }
    }
}

/// Reduces `histogram` to a feature vector according to `mode`, scaling it
/// to unit L1 norm if `normalize` is set. Returns `None` for
/// [`RotationMode::Disabled`].
pub fn build_feature(
    histogram: &RotationHistogram,
    mode: RotationMode,
    normalize: bool,
) -> Option<Vec<f64>> {
    let mut feature = match mode {
        RotationMode::Disabled => return None,
        RotationMode::PatternSum => pattern_sums(histogram),
        RotationMode::HistogramSpectrum { magnitude } => histogram_spectrum(histogram, magnitude),
    };
    if normalize {
        normalize_l1(&mut feature);
    }
    Some(feature)
}

/// Count of each class summed over rotations; `P + 2` entries.
pub fn pattern_sums(histogram: &RotationHistogram) -> Vec<f64> {
    histogram
        .class_counts()
        .into_iter()
        .map(f64::from)
        .collect()
}

/// For each class `n` in `1..P`, the magnitudes of the first `P / 2 + 1`
/// DFT bins of its rotation counts, in increasing `n`. The all-zero,
/// all-one and non-uniform counts follow, in that order.
///
/// A circular shift of the image's rotations only changes the phase of
/// each bin, so the magnitudes are insensitive to in-plane rotation.
pub fn histogram_spectrum(
    histogram: &RotationHistogram,
    magnitude: SpectrumMagnitude,
) -> Vec<f64> {
    let points = histogram.points();
    let p = points as usize;
    let kept = p / 2 + 1;

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(p);
    let mut buffer = vec![Complex::new(0.0, 0.0); p];

    let mut feature = Vec::with_capacity(p.saturating_sub(1) * kept + 3);
    for n in 1..p {
        for (slot, &count) in buffer.iter_mut().zip(histogram.row(n)) {
            *slot = Complex::new(f64::from(count), 0.0);
        }
        fft.process(&mut buffer);
        feature.extend(buffer[..kept].iter().map(|bin| match magnitude {
            SpectrumMagnitude::RealPart => bin.re.abs(),
            SpectrumMagnitude::Modulus => bin.norm(),
        }));
    }

    let counts = histogram.class_counts();
    feature.push(f64::from(counts[0]));
    feature.push(f64::from(counts[p]));
    feature.push(f64::from(counts[p + 1]));
    feature
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::PatternClass;
    use assert_approx_eq::assert_approx_eq;

    fn uniform(index: u32, rotation: u32) -> PatternClass {
        PatternClass::Uniform { index, rotation }
    }

    fn sample_histogram() -> RotationHistogram {
        let mut hist = RotationHistogram::new(8);
        hist.add(uniform(0, 0));
        hist.add(uniform(8, 0));
        hist.add(uniform(8, 0));
        hist.add(PatternClass::NonUniform);
        hist.add(uniform(3, 0));
        hist.add(uniform(3, 2));
        hist.add(uniform(3, 2));
        hist
    }

    #[test]
    fn test_pattern_sums() {
        let feature = build_feature(&sample_histogram(), RotationMode::PatternSum, false).unwrap();
        assert_eq!(feature, vec![1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 2.0, 1.0]);
    }

    #[test]
    fn test_pattern_sums_normalized() {
        let feature = build_feature(&sample_histogram(), RotationMode::PatternSum, true).unwrap();
        let total: f64 = feature.iter().sum();
        assert_approx_eq!(total, 1.0, 1e-12);
        assert_approx_eq!(feature[3], 3.0 / 7.0, 1e-12);
    }

    #[test]
    fn test_disabled_has_no_feature() {
        assert_eq!(build_feature(&sample_histogram(), RotationMode::Disabled, true), None);
    }

    #[test]
    fn test_spectrum_layout() {
        let feature = histogram_spectrum(&sample_histogram(), SpectrumMagnitude::RealPart);
        assert_eq!(feature.len(), 38);
        assert_eq!(Some(feature.len()), feature_length(8, "histogram".parse().unwrap()));
        // Trailing scalars: all zeros, all ones, non-uniform.
        assert_eq!(&feature[35..], &[1.0, 2.0, 1.0]);
        // Classes 1 and 2 are empty.
        assert!(feature[..10].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_spectrum_of_class_three() {
        // Row 3 is [1, 0, 2, 0, 0, 0, 0, 0]; X_k = 1 + 2 e^{-iπk/2}.
        let expected_re = [3.0, 1.0, -1.0, 1.0, 3.0];
        let expected_im = [0.0, -2.0, 0.0, 2.0, 0.0];

        let real = histogram_spectrum(&sample_histogram(), SpectrumMagnitude::RealPart);
        let modulus = histogram_spectrum(&sample_histogram(), SpectrumMagnitude::Modulus);
        let offset = 2 * 5;
        for k in 0..5 {
            let re: f64 = expected_re[k];
            let im: f64 = expected_im[k];
            assert_approx_eq!(real[offset + k], re.abs(), 1e-9);
            assert_approx_eq!(modulus[offset + k], (re * re + im * im).sqrt(), 1e-9);
        }
    }

    #[test]
    fn test_spectrum_magnitude_ignores_rotation() {
        let mut a = RotationHistogram::new(8);
        let mut b = RotationHistogram::new(8);
        for (rotation, count) in [(0, 3), (1, 1), (5, 2)] {
            for _ in 0..count {
                a.add(uniform(4, rotation));
                b.add(uniform(4, (rotation + 3) % 8));
            }
        }
        let fa = histogram_spectrum(&a, SpectrumMagnitude::Modulus);
        let fb = histogram_spectrum(&b, SpectrumMagnitude::Modulus);
        for (x, y) in fa.iter().zip(&fb) {
            assert_approx_eq!(*x, *y, 1e-9);
        }
    }

    #[test]
    fn test_feature_length_for_small_rings() {
        assert_eq!(feature_length(4, RotationMode::PatternSum), Some(6));
        assert_eq!(
            feature_length(
                4,
                RotationMode::HistogramSpectrum {
                    magnitude: SpectrumMagnitude::Modulus
                }
            ),
            Some(12)
        );
        assert_eq!(
            feature_length(
                1,
                RotationMode::HistogramSpectrum {
                    magnitude: SpectrumMagnitude::Modulus
                }
            ),
            Some(3)
        );
    }
}
