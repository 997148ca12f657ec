//! Random Index table for AHP consistency scaling.

/// Saaty's Random Index by matrix order, indexed directly by `n`.
///
/// `RANDOM_INDEX[n]` is the expected consistency index of a random
/// reciprocal matrix of order `n`. Index 0 is a placeholder; orders
/// 1 and 2 cannot be inconsistent.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45];

/// Ceiling value used for matrix orders beyond the table.
pub const RI_CEILING: f64 = 1.49;

/// Looks up the Random Index for a matrix of order `n`.
pub fn random_index(n: usize) -> f64 {
    if n < RANDOM_INDEX.len() {
        RANDOM_INDEX[n]
    } else {
        RI_CEILING
    }
}
