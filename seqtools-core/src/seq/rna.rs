use crate::alphabets::rna;

/// RNA to protein, reading codons from position 0.
///
/// Stop codons are written as `*` and translation carries on past them.
/// Codons that are not in the table (ambiguity codes, lowercase, DNA `T`)
/// are skipped, and a trailing partial codon is dropped.
pub fn translate(seq: &str) -> String {
    let mut out = String::with_capacity(seq.len() / 3);
    let mut codon = [0u8; 3];
    let mut filled = 0usize;

    for c in seq.chars() {
        // non-ASCII still takes a codon slot but can never match
        codon[filled] = if c.is_ascii() { c as u8 } else { 0xFF };
        filled += 1;
        if filled == 3 {
            if let Some(aa) = rna::codon_to_amino(&codon) {
                out.push(aa as char);
            }
            filled = 0;
        }
    }
    out
}
