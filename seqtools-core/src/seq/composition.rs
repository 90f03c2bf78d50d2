use crate::error::{SeqError, SeqResult};

use memchr::memchr2_iter;

/// Added per K or M ambiguity code.
pub const SALT_CORRECTION: f64 = 16.6;
/// Subtracted per S ambiguity code.
pub const MISMATCH_CORRECTION: f64 = 0.41;

/// Percentage (0-100) of G and C bases, case-insensitive.
///
/// Empty input is rejected with [`SeqError::InvalidInput`] rather than
/// producing NaN.
pub fn gc_content(seq: &str) -> SeqResult<f64> {
    if seq.is_empty() {
        return Err(SeqError::InvalidInput {
            msg: "GC content of an empty sequence is undefined",
        });
    }
    let bytes = seq.as_bytes();
    let gc = memchr2_iter(b'G', b'g', bytes).count() + memchr2_iter(b'C', b'c', bytes).count();
    let len = seq.chars().count();
    Ok(gc as f64 / len as f64 * 100.0)
}

/// Wallace-rule melting temperature with IUPAC correction terms:
///
/// `4*(G+C) + 2*(A+T) + 16.6*(K+M) - 0.41*S`
///
/// The sequence is upper-cased first, with the same Unicode rules as
/// [`molecular_weight`](crate::seq::molecular_weight). Any other character
/// contributes nothing.
pub fn melting_temperature(seq: &str) -> f64 {
    let counts = byte_counts(seq.to_uppercase().as_bytes());
    let n = |b: u8| counts[b as usize];

    let mut tm = (4 * (n(b'G') + n(b'C')) + 2 * (n(b'A') + n(b'T'))) as f64;
    tm += SALT_CORRECTION * (n(b'K') + n(b'M')) as f64;
    tm -= MISMATCH_CORRECTION * n(b'S') as f64;
    tm
}

fn byte_counts(bytes: &[u8]) -> [usize; 256] {
    let mut counts = [0usize; 256];
    for &b in bytes {
        counts[b as usize] += 1;
    }
    counts
}
