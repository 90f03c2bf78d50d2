use crate::error::{SeqError, SeqResult};

/// Number of positions at which two equal-length sequences differ.
/// Comparison is exact, so case matters.
pub fn hamming(a: &str, b: &str) -> SeqResult<usize> {
    if a.is_ascii() && b.is_ascii() {
        check_lengths(a.len(), b.len())?;
        return Ok(count_differences(a.bytes(), b.bytes()));
    }
    check_lengths(a.chars().count(), b.chars().count())?;
    Ok(count_differences(a.chars(), b.chars()))
}

#[inline]
fn check_lengths(left: usize, right: usize) -> SeqResult<()> {
    if left != right {
        return Err(SeqError::LengthMismatch { left, right });
    }
    Ok(())
}

fn count_differences<T, I>(a: I, b: I) -> usize
where
    T: PartialEq,
    I: Iterator<Item = T>,
{
    a.zip(b).filter(|(x, y)| x != y).count()
}
