//! The master Schnorr keypair.

use curve::{Affine, RandomField, ScalarField};
use rand::{RngCore, TryRngCore};
use zeroize::Zeroize;

use crate::errors::EsemError;

/// The master secret scalar `sk`. Zeroized on drop.
///
/// `ScalarField` is defined in the `curve` crate, so this type cannot
/// `#[derive(ZeroizeOnDrop)]` through it directly — the orphan rule blocks
/// an upstream `Zeroize` impl on a foreign type — so `Zeroize` is
/// implemented by hand, overwriting the held scalar with `ScalarField::ZERO`.
#[derive(Clone)]
pub struct MasterSecret(ScalarField);

impl MasterSecret {
    /// Wrap an externally supplied or already-reduced scalar.
    pub fn new(scalar: ScalarField) -> Self {
        Self(scalar)
    }

    /// Draw a fresh master secret from a cryptographic RNG.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(ScalarField::random(rng))
    }

    /// Draw a fresh master secret from a fallible RNG source, surfacing an
    /// exhausted or misconfigured OS RNG as `EsemError::RngFailure` instead
    /// of panicking. `rand`'s `RngCore` (used by [`MasterSecret::random`]
    /// and `esem::table::key_gen`) is infallible by construction at this
    /// crate's call sites, so this is the entry point for callers whose RNG
    /// can genuinely fail (e.g. a `TryRngCore` wrapper over an OS source).
    pub fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, EsemError> {
        let mut bytes = [0u8; 32];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|_| EsemError::RngFailure)?;
        Ok(Self(ScalarField::from_bytes_le(&bytes)))
    }

    /// The wrapped scalar.
    pub fn scalar(&self) -> ScalarField {
        self.0
    }

    /// Derive the corresponding master public point `P = sk * G`.
    pub fn public_key(&self) -> MasterPublic {
        MasterPublic(Affine::mul_generator(&self.0))
    }
}

impl Zeroize for MasterSecret {
    fn zeroize(&mut self) {
        self.0 = ScalarField::ZERO;
    }
}

impl Drop for MasterSecret {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// The master public point `P = sk * G`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MasterPublic(pub Affine);

impl MasterPublic {
    /// Fixed 64-byte wire encoding.
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0.to_bytes()
    }

    /// Inverse of [`MasterPublic::to_bytes`]. Does not validate the curve
    /// equation; callers ingesting untrusted bytes should also check
    /// `self.0.is_on_curve()`.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        Self(Affine::from_bytes(bytes))
    }
}
