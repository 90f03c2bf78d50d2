use crate::alphabets::dna;

/// DNA to RNA: every `T` becomes `U`. Nothing else changes, including case.
pub fn transcribe(seq: &str) -> String {
    seq.replace('T', "U")
}

/// Reverse of the complementary strand. Characters outside `ACGT` are kept
/// as they are, so the output always has the input's length.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| {
            if c.is_ascii() {
                dna::complement(c as u8) as char
            } else {
                c
            }
        })
        .collect()
}
