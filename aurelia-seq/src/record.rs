//! Closed union over the three sequence variants.
//!
//! [`SequenceRecord`] lets callers hold DNA, RNA, and protein records behind
//! one type while keeping the variant set closed: the common operations
//! dispatch by `match`, and variant-specific transforms stay on the concrete
//! types.

use std::fmt;

use aurelia_core::{Result, Sequence, Summarizable};

use crate::protein::ProteinSequence;
use crate::types::{DnaSequence, RnaSequence};

/// Which variant a [`SequenceRecord`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceKind {
    Dna,
    Rna,
    Protein,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SequenceKind::Dna => "DNA",
            SequenceKind::Rna => "RNA",
            SequenceKind::Protein => "Protein",
        })
    }
}

/// A sequence record of any variant.
///
/// For DNA and RNA the unit of `find_motif`/`mutate`/`len` is a single base;
/// for protein it is a whole residue token. A multi-byte mutation value on a
/// nucleotide variant is rejected as an invalid unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceRecord {
    Dna(DnaSequence),
    Rna(RnaSequence),
    Protein(ProteinSequence),
}

impl SequenceRecord {
    /// The variant held by this record.
    pub fn kind(&self) -> SequenceKind {
        match self {
            SequenceRecord::Dna(_) => SequenceKind::Dna,
            SequenceRecord::Rna(_) => SequenceKind::Rna,
            SequenceRecord::Protein(_) => SequenceKind::Protein,
        }
    }
}

impl Sequence for SequenceRecord {
    fn id(&self) -> &str {
        match self {
            SequenceRecord::Dna(s) => s.id(),
            SequenceRecord::Rna(s) => s.id(),
            SequenceRecord::Protein(s) => s.id(),
        }
    }

    fn len(&self) -> usize {
        match self {
            SequenceRecord::Dna(s) => s.len(),
            SequenceRecord::Rna(s) => s.len(),
            SequenceRecord::Protein(s) => s.len(),
        }
    }

    fn to_fasta(&self) -> String {
        match self {
            SequenceRecord::Dna(s) => s.to_fasta(),
            SequenceRecord::Rna(s) => s.to_fasta(),
            SequenceRecord::Protein(s) => s.to_fasta(),
        }
    }

    fn find_motif(&self, motif: &str) -> Option<usize> {
        match self {
            SequenceRecord::Dna(s) => s.find_motif(motif.as_bytes()),
            SequenceRecord::Rna(s) => s.find_motif(motif.as_bytes()),
            SequenceRecord::Protein(s) => s.find_motif(motif),
        }
    }

    fn mutate(&mut self, position: usize, value: &str) -> Result<()> {
        match self {
            SequenceRecord::Dna(s) => Sequence::mutate(s, position, value),
            SequenceRecord::Rna(s) => Sequence::mutate(s, position, value),
            SequenceRecord::Protein(s) => s.mutate(position, value),
        }
    }
}

impl Summarizable for SequenceRecord {
    fn summary(&self) -> String {
        match self {
            SequenceRecord::Dna(s) => s.summary(),
            SequenceRecord::Rna(s) => s.summary(),
            SequenceRecord::Protein(s) => s.summary(),
        }
    }
}

impl From<DnaSequence> for SequenceRecord {
    fn from(seq: DnaSequence) -> Self {
        SequenceRecord::Dna(seq)
    }
}

impl From<RnaSequence> for SequenceRecord {
    fn from(seq: RnaSequence) -> Self {
        SequenceRecord::Rna(seq)
    }
}

impl From<ProteinSequence> for SequenceRecord {
    fn from(seq: ProteinSequence) -> Self {
        SequenceRecord::Protein(seq)
    }
}
