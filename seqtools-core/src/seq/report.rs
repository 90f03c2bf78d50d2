use crate::error::{SeqError, SeqResult};
use crate::seq::{gc_content, molecular_weight, reverse_complement};

/// The fields a sequence viewer shows for one pasted sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceReport {
    /// Trimmed, upper-cased input every other field was computed from.
    pub sequence: String,
    pub gc_content: f64,
    pub molecular_weight: f64,
    pub reverse_complement: String,
}

/// Normalizes raw user input (trim, upper-case) and computes its report.
pub fn analyze(input: &str) -> SeqResult<SequenceReport> {
    let sequence = input.trim().to_uppercase();
    if sequence.is_empty() {
        return Err(SeqError::InvalidInput {
            msg: "no sequence given",
        });
    }

    Ok(SequenceReport {
        gc_content: gc_content(&sequence)?,
        molecular_weight: molecular_weight(&sequence),
        reverse_complement: reverse_complement(&sequence),
        sequence,
    })
}
