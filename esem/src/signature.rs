//! The 48-byte ESEM signature.

use curve::ScalarField;

use crate::constants::{RANDOMISER_SIZE, SIGNATURE_SIZE};

/// A signature `(x, s)`: the 16-byte randomiser and the 32-byte response
/// scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub x: [u8; 16],
    pub s: ScalarField,
}

impl Signature {
    /// Fixed 48-byte wire encoding: `x (16) || s (32, little-endian)`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..RANDOMISER_SIZE].copy_from_slice(&self.x);
        out[RANDOMISER_SIZE..].copy_from_slice(&self.s.to_bytes_le());
        out
    }

    /// Inverse of [`Signature::to_bytes`].
    pub fn from_bytes(bytes: &[u8; SIGNATURE_SIZE]) -> Self {
        let mut x = [0u8; RANDOMISER_SIZE];
        x.copy_from_slice(&bytes[..RANDOMISER_SIZE]);
        let s = ScalarField::from_bytes_le(&bytes[RANDOMISER_SIZE..]);
        Signature { x, s }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let sig = Signature {
            x: [7u8; 16],
            s: ScalarField::from_canonical_u64(12345),
        };
        let bytes = sig.to_bytes();
        assert_eq!(bytes.len(), SIGNATURE_SIZE);
        assert_eq!(Signature::from_bytes(&bytes), sig);
    }
}
