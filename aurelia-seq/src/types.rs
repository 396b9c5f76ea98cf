//! Concrete sequence type aliases and the transformation pipeline.
//!
//! - [`DnaSequence`] — complement, transcription
//! - [`RnaSequence`] — translation
//!
//! Each transform produces a new, independent record carrying the source
//! identifier; the source is never modified.

use crate::alphabet::{DnaAlphabet, RnaAlphabet};
use crate::codon;
use crate::nucleotide::NucleotideSeq;
use crate::protein::ProteinSequence;

/// A DNA sequence record.
pub type DnaSequence = NucleotideSeq<DnaAlphabet>;

/// An RNA sequence record.
pub type RnaSequence = NucleotideSeq<RnaAlphabet>;

// ---------------------------------------------------------------------------
// DNA base complement
// ---------------------------------------------------------------------------

fn dna_complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// DNA methods
// ---------------------------------------------------------------------------

impl DnaSequence {
    /// Return the complementary base string (A↔T, C↔G).
    ///
    /// Same length as the payload; bytes outside the alphabet pass through
    /// unchanged. An involution over `ATCG`.
    pub fn complement(&self) -> Vec<u8> {
        self.data().iter().map(|&b| dna_complement(b)).collect()
    }

    /// Transcribe to RNA: substitute every `T` with `U`, then reverse.
    ///
    /// The reversal models the 5′→3′ direction flip between the template
    /// read and its transcript. The result carries the same identifier and
    /// is independent of the source.
    pub fn transcribe(&self) -> RnaSequence {
        let mut rna: Vec<u8> = self
            .data()
            .iter()
            .map(|&b| if b == b'T' { b'U' } else { b })
            .collect();
        rna.reverse();
        RnaSequence::new(self.id(), rna)
    }
}

// ---------------------------------------------------------------------------
// RNA methods
// ---------------------------------------------------------------------------

impl RnaSequence {
    /// Translate to protein along the reading frame.
    ///
    /// Codons are read in non-overlapping triplets from the first in-frame
    /// `AUG` to the first stop codon (see
    /// [`codon::translate_reading_frame`]). The result carries the same
    /// identifier; the source is unmodified.
    pub fn translate(&self) -> ProteinSequence {
        let residues = codon::translate_reading_frame(self.data());
        ProteinSequence::from_residues(self.id(), residues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Complement ---

    #[test]
    fn complement_basic() {
        let dna = DnaSequence::new("gene-1", "ATGC");
        assert_eq!(dna.complement(), b"TACG");
    }

    #[test]
    fn complement_after_mutation() {
        let mut dna = DnaSequence::new("gene-1", "ATGC");
        dna.mutate(2, b'T').unwrap();
        assert_eq!(dna.data(), b"ATTC");
        assert_eq!(dna.complement(), b"TAAG");
    }

    #[test]
    fn complement_is_involution() {
        let dna = DnaSequence::new("gene-1", "ATGCATTGCA");
        let twice: Vec<u8> = dna.complement().iter().map(|&b| super::dna_complement(b)).collect();
        assert_eq!(twice, dna.data());
    }

    #[test]
    fn complement_passes_unknown_bytes_through() {
        let dna = DnaSequence::new("odd", "AXT");
        assert_eq!(dna.complement(), b"TXA");
    }

    // --- Transcription ---

    #[test]
    fn transcribe_substitutes_then_reverses() {
        let dna = DnaSequence::new("gene-1", "ATGC");
        let rna = dna.transcribe();
        assert_eq!(rna.data(), b"CGUA");
        assert_eq!(rna.id(), "gene-1");
        // Source is untouched.
        assert_eq!(dna.data(), b"ATGC");
    }

    #[test]
    fn transcribe_mutated_sequence() {
        let mut dna = DnaSequence::new("gene-1", "ATGC");
        dna.mutate(2, b'T').unwrap();
        assert_eq!(dna.transcribe().data(), b"CUUA");
    }

    #[test]
    fn derived_rna_is_independent() {
        let dna = DnaSequence::new("gene-1", "TTTT");
        let mut rna = dna.transcribe();
        assert_eq!(rna.data(), b"UUUU");
        rna.mutate(0, b'A').unwrap();
        assert_eq!(rna.data(), b"AUUU");
        assert_eq!(dna.data(), b"TTTT");
    }

    // --- Translation ---

    #[test]
    fn translate_scans_for_start_codon() {
        let rna = RnaSequence::new("gene-1", "UUUAUGUUU");
        let protein = rna.translate();
        assert_eq!(protein.to_fasta(), ">gene-1\nMetionina-Fenyloalanina");
        assert_eq!(protein.len(), 2);
        // Source RNA is untouched.
        assert_eq!(rna.data(), b"UUUAUGUUU");
    }

    #[test]
    fn translate_without_start_codon_is_empty() {
        let rna = RnaSequence::new("gene-1", "UUUCCCGGG");
        assert!(rna.translate().is_empty());
    }

    #[test]
    fn translate_stops_at_stop_codon() {
        let rna = RnaSequence::new("gene-1", "AUGGCUUAAUUU");
        let protein = rna.translate();
        assert_eq!(protein.residues(), ["Metionina", "Alanina"]);
    }

    #[test]
    fn pipeline_dna_to_protein() {
        // Reverse-engineered so the transcript reads AUGUUUUGA:
        // transcribe reverses, so the DNA is the reverse with U→T.
        let dna = DnaSequence::new("gene-1", "AGTTTTGTA");
        let rna = dna.transcribe();
        assert_eq!(rna.data(), b"AUGUUUUGA");
        let protein = rna.translate();
        assert_eq!(protein.residues(), ["Metionina", "Fenyloalanina"]);
        assert_eq!(protein.id(), "gene-1");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn complement_is_involution(data in dna_bytes(200)) {
            let dna = DnaSequence::new("prop", &data);
            let twice: Vec<u8> = DnaSequence::new("prop", dna.complement()).complement();
            prop_assert_eq!(twice, data);
        }

        #[test]
        fn transcription_preserves_length_and_source(data in dna_bytes(200)) {
            let dna = DnaSequence::new("prop", &data);
            let rna = dna.transcribe();
            prop_assert_eq!(rna.len(), dna.len());
            prop_assert_eq!(dna.data(), data.as_slice());
            prop_assert!(rna.data().iter().all(|&b| b != b'T'));
        }

        #[test]
        fn translation_is_deterministic(data in dna_bytes(200)) {
            let rna = DnaSequence::new("prop", &data).transcribe();
            let first = rna.translate();
            let second = rna.translate();
            prop_assert_eq!(first.residues(), second.residues());
        }

        #[test]
        fn protein_never_contains_stop(data in dna_bytes(300)) {
            let protein = DnaSequence::new("prop", &data).transcribe().translate();
            prop_assert!(protein.residues().iter().all(|r| r != "Stop"));
        }
    }
}
