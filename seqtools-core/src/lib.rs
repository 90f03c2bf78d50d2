#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod seq;

pub use error::{SeqError, SeqResult};
pub use seq::{
    analyze, gc_content, hamming, melting_temperature, molecular_weight, motif_positions,
    reverse_complement, transcribe, translate, Motif, MotifPositions, SequenceReport,
};
