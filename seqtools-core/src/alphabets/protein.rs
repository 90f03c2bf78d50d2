use std::sync::LazyLock;

const AA20: [u8; 20] = *b"ACDEFGHIKLMNPQRSTVWY";

/// Average residue masses, in the same order as `AA20`.
const AA20_MASS_AVG: [f64; 20] = [
    71.08,  // A
    103.14, // C
    115.09, // D
    129.12, // E
    147.18, // F
    57.05,  // G
    137.15, // H
    113.17, // I
    128.18, // K
    113.17, // L
    131.21, // M
    114.11, // N
    97.12,  // P
    128.13, // Q
    156.19, // R
    87.08,  // S
    101.11, // T
    99.14,  // V
    186.21, // W
    163.18, // Y
];

static PROTEIN_WEIGHT: LazyLock<[f64; 256]> = LazyLock::new(|| {
    let mut map = [0.0f64; 256];
    for (&aa, &mass) in AA20.iter().zip(AA20_MASS_AVG.iter()) {
        map[aa as usize] = mass;
    }
    map
});

/// Residue mass of an uppercase one-letter amino acid; 0.0 for anything else.
#[inline]
pub fn protein_residue_weight(aa: u8) -> f64 {
    PROTEIN_WEIGHT[aa as usize]
}
