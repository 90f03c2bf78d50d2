//! Sequence analysis operations. Each one is a free function over borrowed
//! input with no shared mutable state.

pub mod batch;
pub mod composition;
pub mod distance;
pub mod dna;
pub mod mass;
pub mod motif;
pub mod report;
pub mod rna;

pub use batch::{analyze_many, gc_content_many, reverse_complement_many, translate_many};
pub use composition::{gc_content, melting_temperature};
pub use distance::hamming;
pub use dna::{reverse_complement, transcribe};
pub use mass::molecular_weight;
pub use motif::{motif_positions, Motif, MotifPositions};
pub use report::{analyze, SequenceReport};
pub use rna::translate;

#[cfg(test)]
mod tests;
