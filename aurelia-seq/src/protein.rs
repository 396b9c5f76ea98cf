//! Protein sequence record.
//!
//! Unlike nucleotide records, the payload is a list of amino-acid-name
//! tokens: length, motif search, and mutation all operate on whole tokens,
//! never on characters. The canonical rendering joins tokens with `-`.

use std::fmt;
use std::hash::{Hash, Hasher};

use aurelia_core::{AureliaError, Sequence, Summarizable};

use crate::motif;

/// A protein record: identifier plus residue tokens.
#[derive(Clone)]
pub struct ProteinSequence {
    id: String,
    residues: Vec<String>,
}

impl ProteinSequence {
    /// Create a record from a `-`-joined residue string.
    ///
    /// `"Metionina-Alanina"` yields two residue tokens; an empty string
    /// yields none. Tokens are stored as given — there is no residue-name
    /// validation at construction or mutation (see [`mutate`]).
    ///
    /// [`mutate`]: ProteinSequence::mutate
    pub fn new(id: impl Into<String>, data: &str) -> Self {
        let residues = if data.is_empty() {
            Vec::new()
        } else {
            data.split('-').map(str::to_string).collect()
        };
        Self {
            id: id.into(),
            residues,
        }
    }

    /// Create a record directly from residue tokens.
    pub fn from_residues(id: impl Into<String>, residues: Vec<String>) -> Self {
        Self {
            id: id.into(),
            residues,
        }
    }

    /// Create a record, rejecting an empty identifier or empty residue
    /// tokens (a `-`-joined string cannot round-trip those).
    pub fn validated(id: impl Into<String>, data: &str) -> aurelia_core::Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(AureliaError::Construction(
                "protein sequence requires a non-empty identifier".into(),
            ));
        }
        let record = Self::new(id, data);
        if record.residues.iter().any(|r| r.is_empty()) {
            return Err(AureliaError::Construction(format!(
                "protein payload \"{}\" contains an empty residue token",
                data
            )));
        }
        Ok(record)
    }

    /// The immutable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The residue tokens.
    pub fn residues(&self) -> &[String] {
        &self.residues
    }

    /// Length in residue tokens, not characters.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Whether the record holds no residues.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Canonical FASTA-style rendering: `>{id}` then residues joined by `-`.
    pub fn to_fasta(&self) -> String {
        format!(">{}\n{}", self.id, self.residues.join("-"))
    }

    /// Index of the first residue token exactly equal to `motif`, or `None`.
    ///
    /// The motif is one whole residue name; multi-token subsequences are not
    /// searched.
    pub fn find_motif(&self, motif: &str) -> Option<usize> {
        motif::find_token(&self.residues, motif)
    }

    /// Replace the residue token at `position` with `value`.
    ///
    /// The position is bounds-checked; the value is not validated against
    /// any residue-name set — any token is accepted.
    pub fn mutate(&mut self, position: usize, value: impl Into<String>) -> aurelia_core::Result<()> {
        if position >= self.residues.len() {
            return Err(AureliaError::OutOfRange(format!(
                "position {} exceeds protein residue count {}",
                position,
                self.residues.len()
            )));
        }
        self.residues[position] = value.into();
        Ok(())
    }
}

impl Sequence for ProteinSequence {
    fn id(&self) -> &str {
        self.id()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn to_fasta(&self) -> String {
        self.to_fasta()
    }

    fn find_motif(&self, motif: &str) -> Option<usize> {
        self.find_motif(motif)
    }

    fn mutate(&mut self, position: usize, value: &str) -> aurelia_core::Result<()> {
        self.mutate(position, value)
    }
}

impl Summarizable for ProteinSequence {
    fn summary(&self) -> String {
        format!("Protein '{}' ({} residues)", self.id, self.residues.len())
    }
}

impl fmt::Debug for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Protein({:?}, \"{}\")", self.id, self.residues.join("-"))
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.residues.join("-"))
    }
}

impl PartialEq for ProteinSequence {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.residues == other.residues
    }
}

impl Eq for ProteinSequence {}

impl Hash for ProteinSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.residues.hash(state);
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct RawRecord {
        id: String,
        data: String,
    }

    impl Serialize for ProteinSequence {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawRecord {
                id: self.id.clone(),
                data: self.residues.join("-"),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for ProteinSequence {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawRecord::deserialize(deserializer)?;
            Ok(ProteinSequence::new(raw.id, &raw.data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_dash() {
        let p = ProteinSequence::new("pep-1", "Metionina-Fenyloalanina-Leucyna");
        assert_eq!(p.len(), 3);
        assert_eq!(p.residues()[0], "Metionina");
    }

    #[test]
    fn length_counts_tokens_not_characters() {
        let p = ProteinSequence::new("pep-1", "Metionina-Alanina");
        assert_eq!(p.len(), 2);
        assert_ne!(p.len(), "Metionina-Alanina".len());
    }

    #[test]
    fn empty_payload_has_no_residues() {
        let p = ProteinSequence::new("pep-1", "");
        assert!(p.is_empty());
        assert_eq!(p.to_fasta(), ">pep-1\n");
    }

    #[test]
    fn to_fasta_joins_with_dash() {
        let p = ProteinSequence::new("pep-1", "Metionina-Alanina");
        assert_eq!(p.to_fasta(), ">pep-1\nMetionina-Alanina");
    }

    #[test]
    fn mutate_replaces_one_token() {
        let mut p = ProteinSequence::new("pep-1", "Metionina-Fenyloalanina-Leucyna");
        p.mutate(1, "Alanina").unwrap();
        assert_eq!(p.residues().join("-"), "Metionina-Alanina-Leucyna");
        assert_eq!(p.find_motif("Leucyna"), Some(2));
    }

    #[test]
    fn mutate_is_bounds_checked() {
        let mut p = ProteinSequence::new("pep-1", "Metionina");
        let err = p.mutate(1, "Alanina").unwrap_err();
        assert!(matches!(err, AureliaError::OutOfRange(_)));
        assert_eq!(p.residues(), ["Metionina"]);
    }

    #[test]
    fn mutate_accepts_any_token() {
        // Residue names are deliberately unvalidated.
        let mut p = ProteinSequence::new("pep-1", "Metionina");
        p.mutate(0, "NotAnAminoAcid").unwrap();
        assert_eq!(p.residues(), ["NotAnAminoAcid"]);
    }

    #[test]
    fn motif_is_a_whole_token() {
        let p = ProteinSequence::new("pep-1", "Metionina-Fenyloalanina");
        assert_eq!(p.find_motif("Fenyloalanina"), Some(1));
        assert_eq!(p.find_motif("Fenylo"), None);
        assert_eq!(p.find_motif("Walina"), None);
    }

    #[test]
    fn validated_rejects_empty_tokens() {
        assert!(ProteinSequence::validated("pep-1", "Metionina-Alanina").is_ok());
        assert!(matches!(
            ProteinSequence::validated("pep-1", "Metionina--Alanina"),
            Err(AureliaError::Construction(_))
        ));
        assert!(matches!(
            ProteinSequence::validated("", "Metionina"),
            Err(AureliaError::Construction(_))
        ));
    }
}
