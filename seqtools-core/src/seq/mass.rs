use crate::alphabets::{dna, protein};

/// Estimated molecular weight in daltons.
///
/// The input is upper-cased, then classified by prefix alone: anything
/// starting with `ATG` is weighed as protein, everything else as DNA. A DNA
/// fragment beginning with a start codon is therefore weighed as protein.
/// Residues missing from the chosen table weigh nothing.
pub fn molecular_weight(seq: &str) -> f64 {
    let seq = seq.to_uppercase();
    let weight: fn(u8) -> f64 = if seq.starts_with("ATG") {
        protein::protein_residue_weight
    } else {
        dna::dna_residue_weight
    };
    seq.bytes().fold(0.0, |total, b| total + weight(b))
}
