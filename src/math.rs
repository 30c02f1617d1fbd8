//! Assorted mathematical helper functions.

/// L1 norm of a vector.
pub fn l1_norm(xs: &[f64]) -> f64 {
    xs.iter().fold(0f64, |acc, x| acc + x.abs())
}

/// Scales `xs` in place to unit L1 norm. A vector with zero norm is set
/// to all zeros.
///
/// # Examples
/// ```
/// use lbp::math::normalize_l1;
///
/// let mut xs = vec![1.0, -3.0, 4.0];
/// normalize_l1(&mut xs);
/// assert_eq!(xs, vec![0.125, -0.375, 0.5]);
/// ```
pub fn normalize_l1(xs: &mut [f64]) {
    let norm = l1_norm(xs);
    for x in xs.iter_mut() {
        *x = if norm == 0.0 { 0.0 } else { *x / norm };
    }
}
