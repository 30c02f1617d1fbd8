//! Rotation-invariant canonical forms and uniform pattern classes.

use serde::{Deserialize, Serialize};

/// The rotation-invariant class of a pattern code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternClass {
    /// At most one contiguous run of ones around the ring.
    Uniform {
        /// Number of set bits, in `0..=P`.
        index: u32,
        /// Right rotations taking the raw code to its canonical form, in `0..P`.
        rotation: u32,
    },
    /// Every other pattern, pooled into a single class.
    NonUniform,
}

impl PatternClass {
    /// Row of this class in a histogram over `points + 2` classes; the
    /// non-uniform class is row `points + 1`.
    pub fn row(&self, points: u32) -> usize {
        match *self {
            PatternClass::Uniform { index, .. } => index as usize,
            PatternClass::NonUniform => points as usize + 1,
        }
    }

    /// Whether this is a uniform class.
    pub fn is_uniform(&self) -> bool {
        matches!(self, PatternClass::Uniform { .. })
    }

    /// Class index `n`, if uniform.
    pub fn index(&self) -> Option<u32> {
        match *self {
            PatternClass::Uniform { index, .. } => Some(index),
            PatternClass::NonUniform => None,
        }
    }

    /// Rotation count `r`, if uniform.
    pub fn rotation(&self) -> Option<u32> {
        match *self {
            PatternClass::Uniform { rotation, .. } => Some(rotation),
            PatternClass::NonUniform => None,
        }
    }
}

/// A code's canonical form together with its class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationMapping {
    /// Least value over all circular rotations of the code.
    pub canonical: u32,
    /// Class of the canonical form.
    pub class: PatternClass,
}

/// Mask of the low `points` bits.
pub fn full_mask(points: u32) -> u32 {
    if points >= 32 {
        u32::MAX
    } else {
        (1 << points) - 1
    }
}

/// Rotates a `points`-bit code left by one place.
fn rotate_left_once(code: u32, points: u32) -> u32 {
    let mask = full_mask(points);
    let shifted = code << 1;
    (shifted & mask) | ((shifted >> points) & 1)
}

/// Rotates a `points`-bit code right by `n` places.
pub fn rotate_right(code: u32, n: u32, points: u32) -> u32 {
    let n = n % points;
    if n == 0 {
        return code;
    }
    let mask = full_mask(points);
    ((code >> n) | (code << (points - n))) & mask
}

/// Returns the least value over all circular rotations of a `points`-bit
/// code, and the number of right rotations reaching it.
///
/// Ties keep the rotation found first when rotating left, which for a
/// code that is already minimal is 0.
///
/// # Examples
/// ```
/// use lbp::rotation::min_rotation;
///
/// assert_eq!(min_rotation(0b10110100, 8), (0b00101101, 2));
/// assert_eq!(min_rotation(0b1000, 4), (0b0001, 3));
/// ```
pub fn min_rotation(code: u32, points: u32) -> (u32, u32) {
    let mut min = code;
    let mut rotation = 0;
    let mut value = code;
    for i in 1..=points {
        value = rotate_left_once(value, points);
        if value < min {
            min = value;
            rotation = points - i;
        }
    }
    (min, rotation)
}

/// Returns true if `value` is of the form `0..01..1`, i.e. `value + 1` is
/// a power of two. Zero counts as uniform.
///
/// # Examples
/// ```
/// use lbp::rotation::is_uniform;
///
/// assert!(is_uniform(0b00000001));
/// assert!(is_uniform(0b00000111));
/// assert!(!is_uniform(0b00000101));
/// ```
pub fn is_uniform(value: u32) -> bool {
    (u64::from(value) + 1).is_power_of_two()
}

/// Index of a uniform canonical pattern: `log2(value + 1)`, which is its
/// number of set bits.
///
/// # Examples
/// ```
/// use lbp::rotation::pattern_index;
///
/// assert_eq!(pattern_index(0b00001111), 4);
/// assert_eq!(pattern_index(0), 0);
/// assert_eq!(pattern_index(0b11111111), 8);
/// ```
pub fn pattern_index(value: u32) -> u32 {
    (u64::from(value) + 1).trailing_zeros()
}

/// Number of bit transitions in a `points`-bit code, counting the highest
/// and lowest bits as adjacent.
///
/// # Examples
/// ```
/// use lbp::rotation::count_transitions;
///
/// assert_eq!(count_transitions(0b11110000, 8), 2);
/// assert_eq!(count_transitions(0b00000000, 8), 0);
/// assert_eq!(count_transitions(0b10011001, 8), 4);
/// assert_eq!(count_transitions(0b10110010, 8), 6);
/// ```
pub fn count_transitions(code: u32, points: u32) -> u32 {
    (code ^ rotate_right(code, 1, points)).count_ones()
}

/// Maps a raw `points`-bit code to its canonical form and class.
///
/// The all-zero and all-one codes are classes `0` and `P` with rotation 0.
/// A single set bit is class 1, rotated by that bit's position. Anything
/// else is minimised over rotations and classed as uniform if the minimum
/// is a single run of ones.
///
/// # Examples
/// ```
/// use lbp::rotation::{classify, PatternClass};
///
/// let mapping = classify(0b00111110, 8);
/// assert_eq!(mapping.canonical, 0b00011111);
/// assert_eq!(mapping.class, PatternClass::Uniform { index: 5, rotation: 1 });
///
/// let mapping = classify(0b11000100, 8);
/// assert_eq!(mapping.canonical, 0b00010011);
/// assert_eq!(mapping.class, PatternClass::NonUniform);
/// ```
pub fn classify(code: u32, points: u32) -> RotationMapping {
    let mask = full_mask(points);
    if code == 0 {
        return uniform(0, 0, 0);
    }
    if code == mask {
        return uniform(mask, points, 0);
    }
    if code.is_power_of_two() {
        return uniform(1, 1, code.trailing_zeros());
    }

    let (canonical, rotation) = min_rotation(code, points);
    if is_uniform(canonical) {
        uniform(canonical, pattern_index(canonical), rotation)
    } else {
        RotationMapping {
            canonical,
            class: PatternClass::NonUniform,
        }
    }
}

fn uniform(canonical: u32, index: u32, rotation: u32) -> RotationMapping {
    RotationMapping {
        canonical,
        class: PatternClass::Uniform { index, rotation },
    }
}
