//! Process-wide lookup tables, built once on first use and read-only afterwards.

pub mod dna;
pub mod protein;
pub mod rna;
