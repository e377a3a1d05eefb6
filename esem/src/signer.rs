//! The Signer: produces a 48-byte signature from one scalar multiplication
//! and `L` table lookups per subkey.

use curve::ScalarField;

use crate::keyed_hash::{message_hash, randomiser, round_hash};
use crate::keys::MasterSecret;
use crate::signature::Signature;
use crate::table::{SecretTable, Subkey, derive_table_entry};
use crate::variant::Variant;

/// Per-index secret material available to the Signer.
///
/// Mirrors the storage split in [`crate::table::KeyGenOutput`]: v1 never
/// holds a materialised secret table, only the subkeys it regenerates
/// entries from.
pub enum SignerTables {
    Fresh,
    Tabled(Vec<SecretTable>),
}

/// Produces ESEM signatures for one master secret.
pub struct Signer {
    master_secret: MasterSecret,
    subkeys: Vec<Subkey>,
    tables: SignerTables,
    variant: Variant,
    next_ctr: u64,
}

impl Signer {
    /// Construct a Signer from KeyGen output relevant to its role:
    /// the master secret, the `L` subkeys, and — for v2 — the secret
    /// tables.
    pub fn new(
        master_secret: MasterSecret,
        subkeys: Vec<Subkey>,
        tables: SignerTables,
        variant: Variant,
    ) -> Self {
        Self {
            master_secret,
            subkeys,
            tables,
            variant,
            next_ctr: 0,
        }
    }

    /// Sign `message`, returning `(x, s)`.
    ///
    /// Each call feeds a freshly incremented counter into the randomiser
    /// derivation: a zeroed or reused counter makes `x` (and hence the
    /// commitment `r` it selects) constant across signatures, which leaks
    /// `sk` from any two signatures on distinct messages.
    pub fn sign(&mut self, message: &[u8]) -> Signature {
        let ctr = self.next_ctr;
        self.next_ctr = self.next_ctr.wrapping_add(1);

        let sk = self.master_secret.scalar();
        let sk_bytes = sk.to_bytes_le();
        let x = randomiser(&sk_bytes, ctr);

        let mut r = ScalarField::ZERO;
        for (j, subkey) in self.subkeys.iter().enumerate() {
            let h_j = round_hash(&subkey.0, &x, self.variant);
            let indices = self.variant.derive_indices(&h_j);
            for idx in indices {
                let sigma_i = match &self.tables {
                    SignerTables::Fresh => derive_table_entry(subkey, idx as usize),
                    SignerTables::Tabled(tables) => tables[j].0[idx as usize],
                };
                r = r + sigma_i;
            }
        }

        let e = ScalarField::from_bytes_le(&message_hash(&x, message));
        let s = r - e * sk;

        r = ScalarField::ZERO;

        Signature { x, s }
    }
}
