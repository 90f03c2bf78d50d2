//! Many-sequence variants of the single-sequence operations. Every element is
//! independent and output order follows input order.

use crate::error::SeqResult;
use crate::seq::{analyze, gc_content, reverse_complement, translate, SequenceReport};

/// GC content of every sequence. Fails if any of them is empty.
pub fn gc_content_many(seqs: &[&str]) -> SeqResult<Vec<f64>> {
    par_try_map!(seqs, |s: &&str| gc_content(s))
}

pub fn translate_many(seqs: &[&str]) -> Vec<String> {
    par_map!(seqs, |s: &&str| translate(s))
}

pub fn reverse_complement_many(seqs: &[&str]) -> Vec<String> {
    par_map!(seqs, |s: &&str| reverse_complement(s))
}

/// One report per input; a bad input only fails its own slot.
pub fn analyze_many(inputs: &[&str]) -> Vec<SeqResult<SequenceReport>> {
    par_map!(inputs, |s: &&str| analyze(s))
}
