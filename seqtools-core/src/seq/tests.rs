use super::*;
use crate::error::SeqError;

use proptest::prelude::*;

fn dna_strategy(min: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')],
        min..60,
    )
    .prop_map(|v| v.into_iter().collect())
}

// ─── round trips across modules ─────────────────────────────

#[test]
fn transcribe_then_translate() {
    assert_eq!(translate(&transcribe("ATGGCCTAA")), "MA*");
    assert_eq!(translate(&transcribe("ATGAAATGA")), "MK*");
}

#[test]
fn unstranscribed_dna_translates_to_nothing_for_t_codons() {
    // T is not an RNA base, so these codons miss the table
    assert_eq!(translate("ATGTAA"), "");
    assert_eq!(translate("AAAATG"), "K");
}

#[test]
fn reverse_complement_palindrome() {
    assert_eq!(reverse_complement("ACGT"), "ACGT");
    assert_eq!(reverse_complement("GAATTC"), "GAATTC");
}

#[test]
fn motif_on_reverse_strand() {
    let seq = "CATCCCAT";
    let rc = reverse_complement(seq);
    assert_eq!(rc, "ATGGGATG");
    assert_eq!(motif_positions(&rc, "ATG").unwrap(), vec![0, 5]);
}

#[test]
fn molecular_weight_prefix_boundary() {
    // valid DNA, but the start codon prefix selects the protein table
    let seq = "ATGACGT";
    let protein: f64 = [71.08, 101.11, 57.05, 71.08, 103.14, 57.05, 101.11]
        .iter()
        .sum();
    assert!((molecular_weight(seq) - protein).abs() < 1e-9);
    // one base later the same letters are weighed as DNA
    let dna: f64 = [331.2, 331.2, 322.2, 347.2, 331.2, 307.2, 347.2, 322.2]
        .iter()
        .sum();
    assert!((molecular_weight("AATGACGT") - dna).abs() < 1e-9);
}

#[test]
fn errors_render() {
    let e = gc_content("").unwrap_err();
    assert!(e.to_string().contains("empty"));
    let e = hamming("AAA", "AA").unwrap_err();
    assert_eq!(e.to_string(), "sequence length mismatch (left=3, right=2)");
    let e = motif_positions("A", "(").unwrap_err();
    assert!(matches!(e, SeqError::Pattern(_)));
    assert!(e.to_string().starts_with("invalid motif pattern"));
}

// ─── properties ─────────────────────────────────────────────

proptest! {
    #[test]
    fn gc_is_a_percentage(s in dna_strategy(1)) {
        let gc = gc_content(&s).unwrap();
        prop_assert!((0.0..=100.0).contains(&gc));
        let all_gc = s.chars().all(|c| c == 'G' || c == 'C');
        prop_assert_eq!(gc == 100.0, all_gc);
    }
}

proptest! {
    #[test]
    fn reverse_complement_is_an_involution(s in dna_strategy(0)) {
        let rc = reverse_complement(&s);
        prop_assert_eq!(rc.len(), s.len());
        prop_assert_eq!(reverse_complement(&rc), s);
    }
}

proptest! {
    #[test]
    fn transcription_keeps_acg(s in dna_strategy(0)) {
        let rna = transcribe(&s);
        prop_assert_eq!(rna.len(), s.len());
        prop_assert!(!rna.contains('T'));
        for (d, r) in s.chars().zip(rna.chars()) {
            if d == 'T' {
                prop_assert_eq!(r, 'U');
            } else {
                prop_assert_eq!(r, d);
            }
        }
    }
}

proptest! {
    #[test]
    fn translation_length(s in dna_strategy(0)) {
        let protein = translate(&transcribe(&s));
        prop_assert_eq!(protein.len(), s.len() / 3);
    }
}

proptest! {
    #[test]
    fn hamming_symmetric_and_bounded(a in dna_strategy(10), b in dna_strategy(10)) {
        let n = a.len().min(b.len());
        let (a, b) = (&a[..n], &b[..n]);
        let d = hamming(a, b).unwrap();
        prop_assert_eq!(d, hamming(b, a).unwrap());
        prop_assert!(d <= n);
        prop_assert_eq!(hamming(a, a).unwrap(), 0);
    }
}

proptest! {
    #[test]
    fn motif_positions_ascend_without_overlap(s in dna_strategy(0)) {
        let pos = motif_positions(&s, "AC|GG").unwrap();
        for w in pos.windows(2) {
            prop_assert!(w[1] >= w[0] + 2);
        }
    }
}

proptest! {
    #[test]
    fn tm_matches_counts(s in dna_strategy(0)) {
        let gc = s.chars().filter(|&c| c == 'G' || c == 'C').count() as f64;
        let at = s.len() as f64 - gc;
        prop_assert_eq!(melting_temperature(&s), 4.0 * gc + 2.0 * at);
    }
}
