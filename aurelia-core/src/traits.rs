//! Core trait definitions for the Aurelia toolkit.
//!
//! These traits define the contracts that domain types implement across crates.

/// A named biological sequence record (DNA, RNA, or protein).
///
/// The unit of indexing is variant-specific: individual bases for nucleotide
/// sequences, whole amino-acid-name tokens for proteins. `find_motif` and
/// `mutate` take string arguments so the contract is expressible for both;
/// for nucleotide implementors the motif is a base substring and the mutation
/// value must be a single base.
pub trait Sequence {
    /// The immutable identifier naming this record.
    fn id(&self) -> &str;

    /// Length in units (bases or residue tokens).
    fn len(&self) -> usize;

    /// Whether the sequence holds no units.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Canonical FASTA-style rendering: `>{id}\n{data}`.
    fn to_fasta(&self) -> String;

    /// Index of the first occurrence of `motif`, or `None` when absent.
    fn find_motif(&self, motif: &str) -> Option<usize>;

    /// Replace the unit at `position` with `value`.
    ///
    /// Fails with [`AureliaError::OutOfRange`](crate::AureliaError::OutOfRange)
    /// for an invalid position and
    /// [`AureliaError::InvalidUnit`](crate::AureliaError::InvalidUnit) for a
    /// value outside the variant's alphabet. No partial mutation is applied
    /// on failure.
    fn mutate(&mut self, position: usize, value: &str) -> crate::Result<()>;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
