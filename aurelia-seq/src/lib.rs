//! Typed biological sequence records for the Aurelia toolkit.
//!
//! Models DNA, RNA, and protein sequences as identified records with
//! format-specific alphabets and a directed transformation pipeline:
//!
//! - **Alphabets** — [`DnaAlphabet`], [`RnaAlphabet`] (mutation-time validation)
//! - **Records** — [`DnaSequence`], [`RnaSequence`], [`ProteinSequence`],
//!   and the closed union [`SequenceRecord`]
//! - **Transforms** — complement, transcription (T→U plus strand reversal),
//!   translation (reading-frame scan with stop-codon truncation)
//! - **Motif search** — base substrings for nucleotides, whole residue
//!   tokens for proteins
//!
//! Indexing is representation-dependent: DNA and RNA count bases, proteins
//! count residue-name tokens. Payloads are validated on mutation, not at
//! construction.
//!
//! # Example
//!
//! ```
//! use aurelia_seq::DnaSequence;
//!
//! let mut dna = DnaSequence::new("gene-1", "ATGC");
//! dna.mutate(2, b'T').unwrap();
//! assert_eq!(dna.data(), b"ATTC");
//! assert_eq!(dna.find_motif("TT"), Some(1));
//!
//! // Transcription substitutes T→U, then reverses.
//! let rna = dna.transcribe();
//! assert_eq!(rna.data(), b"CUUA");
//!
//! // Translation opens the frame at the first AUG and stops at a stop codon.
//! let protein = aurelia_seq::RnaSequence::new("gene-1", "UUUAUGUUU").translate();
//! assert_eq!(protein.to_fasta(), ">gene-1\nMetionina-Fenyloalanina");
//! assert_eq!(protein.len(), 2);
//! ```

pub mod alphabet;
pub mod codon;
pub mod motif;
pub mod nucleotide;
pub mod protein;
pub mod record;
pub mod types;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet, RnaAlphabet};

// Re-export the generic record type
pub use nucleotide::NucleotideSeq;

// Re-export concrete types and the union
pub use protein::ProteinSequence;
pub use record::{SequenceKind, SequenceRecord};
pub use types::{DnaSequence, RnaSequence};

// Re-export codon translation
pub use codon::{translate_codon, translate_reading_frame};
