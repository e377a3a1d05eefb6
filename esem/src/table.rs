//! KeyGen: subkey derivation and the per-variant secret/public tables.

use curve::{Affine, ScalarField};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::EsemError;
use crate::keys::{MasterPublic, MasterSecret};
use crate::prf::PrfKey;
use crate::variant::Variant;

/// A subkey `K_j`, derived from the master AES key. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Subkey(pub [u8; 32]);

/// `N` secret scalars for one subkey, indexed `0..N`. Zeroized on drop.
///
/// Holds `ScalarField`, a foreign type, so `Zeroize` is implemented by hand
/// rather than derived (see [`crate::keys::MasterSecret`] for the same
/// reasoning).
pub struct SecretTable(pub Vec<ScalarField>);

impl Zeroize for SecretTable {
    fn zeroize(&mut self) {
        for s in self.0.iter_mut() {
            *s = ScalarField::ZERO;
        }
    }
}

impl Drop for SecretTable {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretTable {}

/// `N` public points for one subkey, indexed `0..N`. Not secret.
#[derive(Clone)]
pub struct PublicTable(pub Vec<Affine>);

/// `K_j = PRF(sk_aes, j)`, a 32-byte wide PRF output.
pub fn derive_subkey(sk_aes: &[u8; 32], j: u64) -> Subkey {
    Subkey(PrfKey::new(sk_aes).wide(j))
}

/// `ST_j[i] = PRF(K_j, i + 1) mod q`, the formula shared by KeyGen's
/// up-front table construction (v2) and v1's on-demand regeneration of the
/// same entry at sign/serve time.
pub fn derive_table_entry(subkey: &Subkey, i: usize) -> ScalarField {
    let wide = PrfKey::new(&subkey.0).wide(i as u64 + 1);
    ScalarField::from_bytes_le(&wide)
}

/// The full output of key generation.
pub struct KeyGenOutput {
    pub master_secret: MasterSecret,
    pub master_public: MasterPublic,
    pub subkeys: Vec<Subkey>,
    /// `Some` only for [`Variant::V2`], which materialises tables up front;
    /// [`Variant::V1`] regenerates entries on demand from `subkeys` alone.
    pub secret_tables: Option<Vec<SecretTable>>,
    pub public_tables: Option<Vec<PublicTable>>,
    pub variant: Variant,
}

/// Derive the master keypair, the `L` subkeys, and — for
/// [`Variant::V2`] only — the full secret/public tables.
///
/// If `sk` is `None` a fresh scalar is drawn from `rng` via
/// `curve::RandomField`; `rand`'s `RngCore` is infallible by construction at
/// this call site, so `EsemError::RngFailure` is reserved for callers that
/// plumb a fallible `TryRngCore` source through their own wrapper.
pub fn key_gen<R: RngCore + ?Sized>(
    sk_aes: &[u8; 32],
    sk: Option<ScalarField>,
    variant: Variant,
    rng: &mut R,
) -> Result<KeyGenOutput, EsemError> {
    let master_secret = match sk {
        Some(scalar) => MasterSecret::new(scalar),
        None => MasterSecret::random(rng),
    };
    let master_public = master_secret.public_key();

    let subkeys: Vec<Subkey> = (1..=variant.l() as u64)
        .map(|j| derive_subkey(sk_aes, j))
        .collect();

    let (secret_tables, public_tables) = match variant {
        Variant::V1 => (None, None),
        Variant::V2 => {
            let mut secret_tables = Vec::with_capacity(variant.l());
            let mut public_tables = Vec::with_capacity(variant.l());
            for subkey in &subkeys {
                let scalars: Vec<ScalarField> = (0..variant.n())
                    .map(|i| derive_table_entry(subkey, i))
                    .collect();
                let points: Vec<Affine> =
                    scalars.iter().map(Affine::mul_generator).collect();
                secret_tables.push(SecretTable(scalars));
                public_tables.push(PublicTable(points));
            }
            (Some(secret_tables), Some(public_tables))
        }
    };

    Ok(KeyGenOutput {
        master_secret,
        master_public,
        subkeys,
        secret_tables,
        public_tables,
        variant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SK_AES: [u8; 32] = [
        0x54, 0xa2, 0xf8, 0x03, 0x1d, 0x18, 0xac, 0x77, 0xd2, 0x53, 0x92, 0xf2, 0x80, 0xb4, 0xb1,
        0x2f, 0xac, 0xf1, 0x29, 0x3f, 0x3a, 0xe6, 0x77, 0x7d, 0x74, 0x15, 0x67, 0x91, 0x99, 0x53,
        0x69, 0xc5,
    ];

    #[test]
    fn key_gen_is_deterministic_given_fixed_sk() {
        let sk = ScalarField::from_bytes_le(&SK_AES);
        let mut rng1 = StdRng::seed_from_u64(0);
        let mut rng2 = StdRng::seed_from_u64(0);

        let out1 = key_gen(&SK_AES, Some(sk), Variant::V2, &mut rng1).unwrap();
        let out2 = key_gen(&SK_AES, Some(sk), Variant::V2, &mut rng2).unwrap();

        assert_eq!(out1.master_public.to_bytes(), out2.master_public.to_bytes());
        for (s1, s2) in out1.subkeys.iter().zip(out2.subkeys.iter()) {
            assert_eq!(s1.0, s2.0);
        }
        let st1 = out1.secret_tables.unwrap();
        let st2 = out2.secret_tables.unwrap();
        for (t1, t2) in st1.iter().zip(st2.iter()) {
            assert_eq!(t1.0, t2.0);
        }
    }

    #[test]
    fn v1_has_no_materialised_tables() {
        let mut rng = StdRng::seed_from_u64(0);
        let out = key_gen(&SK_AES, None, Variant::V1, &mut rng).unwrap();
        assert!(out.secret_tables.is_none());
        assert!(out.public_tables.is_none());
        assert_eq!(out.subkeys.len(), Variant::V1.l());
    }

    #[test]
    fn v2_public_table_matches_secret_table() {
        let mut rng = StdRng::seed_from_u64(0);
        let out = key_gen(&SK_AES, None, Variant::V2, &mut rng).unwrap();
        let st = &out.secret_tables.unwrap()[0];
        let pt = &out.public_tables.unwrap()[0];
        assert_eq!(pt.0[5], Affine::mul_generator(&st.0[5]));
    }
}
