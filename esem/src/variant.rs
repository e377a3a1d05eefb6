//! The two ESEM parameter sets and the index-derivation rule that ties a
//! keyed-hash digest to a set of table indices.

/// Which of the two ESEM parameter sets is in use.
///
/// The two variants differ only in their `(V, N)` table-sizing parameters
/// and in how a table entry is packed into the keyed-hash digest; `L` is
/// fixed at 3 for both. Signatures and tables from one variant never verify
/// under the other (the index derivation diverges), so the variant must be
/// agreed out of band between Signer, Server, and Verifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Baseline: `L=3, V=18, N=1024`. Per-index secret/public scalars are
    /// regenerated on demand from the subkey rather than stored.
    V1,
    /// High-speed: `L=3, V=40, N=128`. Full secret/public tables are
    /// materialised once at key generation.
    V2,
}

impl Variant {
    /// Number of rounds / servers.
    pub const fn l(&self) -> usize {
        3
    }

    /// Per-round sum cardinality.
    pub const fn v(&self) -> usize {
        match self {
            Variant::V1 => 18,
            Variant::V2 => 40,
        }
    }

    /// Table size.
    pub const fn n(&self) -> usize {
        match self {
            Variant::V1 => 1024,
            Variant::V2 => 128,
        }
    }

    /// Required length, in bytes, of the keyed-hash digest fed to
    /// [`Variant::derive_indices`].
    pub const fn hash_len(&self) -> usize {
        match self {
            Variant::V1 => 2 * Self::V1.v(),
            Variant::V2 => Self::V2.v(),
        }
    }

    /// Turn a hash digest into `V` table indices in `[0, N)`.
    ///
    /// `h` must be at least [`Variant::hash_len`] bytes; callers in this
    /// crate always supply a digest of exactly that length, so an
    /// undersized `h` is a caller bug and surfaces as an index-out-of-bounds
    /// panic rather than a recoverable error.
    pub fn derive_indices(&self, h: &[u8]) -> Vec<u16> {
        match self {
            Variant::V1 => (0..self.v())
                .map(|i| h[2 * i] as u16 | (((h[2 * i + 1] >> 6) as u16) << 8))
                .collect(),
            Variant::V2 => (0..self.v()).map(|i| (h[i] >> 1) as u16).collect(),
        }
    }
}
