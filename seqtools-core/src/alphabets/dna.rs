use std::sync::LazyLock;

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0; 256];
    comp.iter_mut().enumerate().for_each(|(v, a)| {
        *a = v as u8;
    });
    b"ACGT"
        .iter()
        .zip(b"TGCA".iter())
        .for_each(|(&a, &b)| comp[a as usize] = b);
    comp
});

/// Average mass contribution of each DNA base, in daltons.
const DNA_WEIGHTS: [(u8, f64); 4] = [(b'A', 331.2), (b'C', 307.2), (b'G', 347.2), (b'T', 322.2)];

static DNA_WEIGHT: LazyLock<[f64; 256]> = LazyLock::new(|| {
    let mut map = [0.0f64; 256];
    for &(base, mass) in &DNA_WEIGHTS {
        map[base as usize] = mass;
    }
    map
});

/// Watson-Crick complement of an uppercase base. Anything else maps to itself.
#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

/// Per-residue mass of a DNA base; 0.0 for anything outside `ACGT`.
#[inline]
pub fn dna_residue_weight(a: u8) -> f64 {
    DNA_WEIGHT[a as usize]
}
