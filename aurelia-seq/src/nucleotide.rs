//! Generic nucleotide sequence record.
//!
//! [`NucleotideSeq<A>`] pairs an immutable identifier with an owned byte
//! payload, parameterized by an [`Alphabet`] marker type. Construction stores
//! the payload verbatim — the alphabet is enforced on [`mutate`] only, never
//! retroactively. Callers wanting the stricter contract use [`validated`].
//!
//! [`mutate`]: NucleotideSeq::mutate
//! [`validated`]: NucleotideSeq::validated

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use aurelia_core::{AureliaError, Sequence, Summarizable};

use crate::alphabet::Alphabet;
use crate::motif;

/// A nucleotide sequence record parameterized by its alphabet.
///
/// `NucleotideSeq<DnaAlphabet>` is a DNA record, `NucleotideSeq<RnaAlphabet>`
/// is RNA. Units are individual bases; positions are base indices.
#[derive(Clone)]
pub struct NucleotideSeq<A: Alphabet> {
    id: String,
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> NucleotideSeq<A> {
    /// Create a new record from an identifier and raw payload.
    ///
    /// The payload is stored as given: no validation and no case
    /// normalization happen here. Out-of-alphabet bytes surface later as
    /// mutation rejections or `Unknown` translation residues.
    pub fn new(id: impl Into<String>, data: impl AsRef<[u8]>) -> Self {
        Self {
            id: id.into(),
            data: data.as_ref().to_vec(),
            _alphabet: PhantomData,
        }
    }

    /// Create a record, rejecting an empty identifier or out-of-alphabet
    /// bytes.
    pub fn validated(id: impl Into<String>, data: impl AsRef<[u8]>) -> aurelia_core::Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(AureliaError::Construction(format!(
                "{} sequence requires a non-empty identifier",
                A::NAME
            )));
        }
        let data = data.as_ref();
        for (i, &b) in data.iter().enumerate() {
            if !A::is_valid(b) {
                return Err(AureliaError::Construction(format!(
                    "invalid {} base '{}' (0x{:02X}) at position {}",
                    A::NAME,
                    b as char,
                    b,
                    i
                )));
            }
        }
        Ok(Self::new(id, data))
    }

    /// The immutable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw base payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Length in bases.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Canonical FASTA-style rendering: `>{id}\n{bases}`.
    pub fn to_fasta(&self) -> String {
        format!(">{}\n{}", self.id, String::from_utf8_lossy(&self.data))
    }

    /// Lowest index where the base substring `motif` occurs, or `None`.
    pub fn find_motif(&self, motif: impl AsRef<[u8]>) -> Option<usize> {
        motif::find_first(&self.data, motif.as_ref())
    }

    /// Replace the base at `position` with `base`.
    ///
    /// Checks run before any write: the position must index an existing
    /// base and the value must belong to the alphabet. On failure the
    /// payload is untouched.
    pub fn mutate(&mut self, position: usize, base: u8) -> aurelia_core::Result<()> {
        if position >= self.data.len() {
            return Err(AureliaError::OutOfRange(format!(
                "position {} exceeds {} sequence length {}",
                position,
                A::NAME,
                self.data.len()
            )));
        }
        if !A::is_valid(base) {
            return Err(AureliaError::InvalidUnit(format!(
                "'{}' is not a valid {} base",
                base as char,
                A::NAME
            )));
        }
        self.data[position] = base;
        Ok(())
    }
}

impl<A: Alphabet> Sequence for NucleotideSeq<A> {
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
        self.find_motif(motif.as_bytes())
    }

    fn mutate(&mut self, position: usize, value: &str) -> aurelia_core::Result<()> {
        let bytes = value.as_bytes();
        if bytes.len() != 1 {
            return Err(AureliaError::InvalidUnit(format!(
                "{} mutation value must be a single base, got \"{}\"",
                A::NAME,
                value
            )));
        }
        self.mutate(position, bytes[0])
    }
}

impl<A: Alphabet> Summarizable for NucleotideSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = String::from_utf8_lossy(&self.data[..preview_len]);
        if self.data.len() > 20 {
            format!("{} '{}' ({} bp): {}...", A::NAME, self.id, self.data.len(), preview)
        } else {
            format!("{} '{}' ({} bp): {}", A::NAME, self.id, self.data.len(), preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for NucleotideSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}, \"{}\")",
            A::NAME,
            self.id,
            String::from_utf8_lossy(&self.data)
        )
    }
}

impl<A: Alphabet> fmt::Display for NucleotideSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl<A: Alphabet> PartialEq for NucleotideSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.data == other.data
    }
}

impl<A: Alphabet> Eq for NucleotideSeq<A> {}

impl<A: Alphabet> Hash for NucleotideSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.data.hash(state);
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

    impl<A: Alphabet> Serialize for NucleotideSeq<A> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawRecord {
                id: self.id.clone(),
                data: String::from_utf8_lossy(&self.data).into_owned(),
            }
            .serialize(serializer)
        }
    }

    impl<'de, A: Alphabet> Deserialize<'de> for NucleotideSeq<A> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawRecord::deserialize(deserializer)?;
            Ok(NucleotideSeq::new(raw.id, raw.data))
        }
    }
}
