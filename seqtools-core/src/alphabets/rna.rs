use std::sync::LazyLock;

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    map[b'A' as usize] = 0;
    map[b'C' as usize] = 1;
    map[b'G' as usize] = 2;
    map[b'U' as usize] = 3;
    map
});

/// Standard genetic code, indexed by `16 * b1 + 4 * b2 + b3` with `A=0, C=1, G=2, U=3`.
/// Stop codons are `*`.
const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Amino acid for an uppercase RNA codon. `None` when the slice is not exactly
/// three bases from `ACGU`.
#[inline]
pub fn codon_to_amino(codon: &[u8]) -> Option<u8> {
    let [b1, b2, b3] = codon else {
        return None;
    };
    let i1 = BASE_INDEX[*b1 as usize];
    let i2 = BASE_INDEX[*b2 as usize];
    let i3 = BASE_INDEX[*b3 as usize];
    if i1 < 4 && i2 < 4 && i3 < 4 {
        let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
        Some(CODON_TABLE[idx])
    } else {
        None
    }
}
