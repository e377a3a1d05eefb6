//! BLAKE2b in keyed MAC mode, at the four fixed output lengths ESEM needs.

use blake2::Blake2bMac;
use blake2::digest::Mac;
use blake2::digest::consts::{U16, U32, U36, U40};

use crate::variant::Variant;

type Mac16 = Blake2bMac<U16>;
type Mac32 = Blake2bMac<U32>;
type Mac36 = Blake2bMac<U36>;
type Mac40 = Blake2bMac<U40>;

fn mac16(key: &[u8], input: &[u8]) -> [u8; 16] {
    let mut mac = Mac16::new_from_slice(key).expect("blake2b accepts keys up to 64 bytes");
    mac.update(input);
    mac.finalize().into_bytes().into()
}

fn mac32(key: &[u8], input: &[u8]) -> [u8; 32] {
    let mut mac = Mac32::new_from_slice(key).expect("blake2b accepts keys up to 64 bytes");
    mac.update(input);
    mac.finalize().into_bytes().into()
}

fn mac36(key: &[u8], input: &[u8]) -> [u8; 36] {
    let mut mac = Mac36::new_from_slice(key).expect("blake2b accepts keys up to 64 bytes");
    mac.update(input);
    // `GenericArray<u8, U36>` has no `From`/`Into<[u8; 36]>` impl — that
    // conversion only exists for N <= 32 — so copy out of the slice instead.
    let mut out = [0u8; 36];
    out.copy_from_slice(mac.finalize().into_bytes().as_slice());
    out
}

fn mac40(key: &[u8], input: &[u8]) -> [u8; 40] {
    let mut mac = Mac40::new_from_slice(key).expect("blake2b accepts keys up to 64 bytes");
    mac.update(input);
    let mut out = [0u8; 40];
    out.copy_from_slice(mac.finalize().into_bytes().as_slice());
    out
}

/// Derive the per-signature randomiser `x = BLAKE2b(key = sk, input = ctr, outlen = 16)`.
pub fn randomiser(sk_bytes: &[u8], ctr: u64) -> [u8; 16] {
    mac16(sk_bytes, &ctr.to_be_bytes())
}

/// Derive the per-round hash `h_j = BLAKE2b(key = K_j, input = x, outlen = variant.hash_len())`.
pub fn round_hash(subkey: &[u8; 32], x: &[u8; 16], variant: Variant) -> Vec<u8> {
    match variant {
        Variant::V1 => mac36(subkey, x).to_vec(),
        Variant::V2 => mac40(subkey, x).to_vec(),
    }
}

/// Derive the message-binding hash `e = BLAKE2b(key = x, input = m, outlen = 32)`,
/// returned as raw bytes; callers reduce it mod `q` via `ScalarField::from_bytes_le`.
pub fn message_hash(x: &[u8; 16], msg: &[u8]) -> [u8; 32] {
    mac32(x, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn randomiser_is_deterministic_in_sk_and_counter() {
        let sk = [9u8; 32];
        assert_eq!(randomiser(&sk, 0), randomiser(&sk, 0));
        assert_ne!(randomiser(&sk, 0), randomiser(&sk, 1));
    }

    #[test]
    fn round_hash_lengths_match_variant() {
        let subkey = [1u8; 32];
        let x = [2u8; 16];
        assert_eq!(round_hash(&subkey, &x, Variant::V1).len(), 36);
        assert_eq!(round_hash(&subkey, &x, Variant::V2).len(), 40);
    }

    #[test]
    fn message_hash_binds_both_key_and_input() {
        let x1 = [1u8; 16];
        let x2 = [2u8; 16];
        let m = b"message";
        assert_ne!(message_hash(&x1, m), message_hash(&x2, m));
        assert_ne!(message_hash(&x1, m), message_hash(&x1, b"other"));
    }
}
