//! AES-256-ECB used as a pseudorandom function, one block per counter value.

use aes::Aes256;
use aes::cipher::{BlockEncrypt, KeyInit, generic_array::GenericArray};

/// A PRF keyed by a single AES-256 key.
///
/// Each call encrypts a fresh all-zero block with the counter written into
/// the last 8 bytes big-endian, so every subkey or table entry in this
/// crate owns one `PrfKey` rather than sharing one mutable global cipher
/// context keyed in turn by `setKey`-style calls.
pub struct PrfKey {
    cipher: Aes256,
}

impl PrfKey {
    /// Construct a PRF keyed by a 32-byte AES-256 key.
    pub fn new(key: &[u8; 32]) -> Self {
        Self {
            cipher: Aes256::new(GenericArray::from_slice(key)),
        }
    }

    /// One 16-byte PRF output block for `counter`.
    ///
    /// The counter occupies the full last 8 bytes of the block, widened
    /// from the single trailing byte of the original construction so `N`
    /// can exceed 256.
    pub fn block(&self, counter: u64) -> [u8; 16] {
        let mut block = [0u8; 16];
        block[8..].copy_from_slice(&counter.to_be_bytes());
        let mut ga = GenericArray::clone_from_slice(&block);
        self.cipher.encrypt_block(&mut ga);
        ga.into()
    }

    /// A 32-byte PRF output, `AES(counter) || AES(counter + 1)`.
    pub fn wide(&self, counter: u64) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..16].copy_from_slice(&self.block(counter));
        out[16..].copy_from_slice(&self.block(counter.wrapping_add(1)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prf_is_deterministic() {
        let key = [7u8; 32];
        let prf = PrfKey::new(&key);
        assert_eq!(prf.block(42), prf.block(42));
        assert_eq!(prf.wide(1), prf.wide(1));
    }

    #[test]
    fn distinct_counters_diverge() {
        let key = [7u8; 32];
        let prf = PrfKey::new(&key);
        assert_ne!(prf.block(0), prf.block(1));
    }

    #[test]
    fn wide_concatenates_consecutive_blocks() {
        let key = [1u8; 32];
        let prf = PrfKey::new(&key);
        let wide = prf.wide(5);
        assert_eq!(&wide[..16], &prf.block(5)[..]);
        assert_eq!(&wide[16..], &prf.block(6)[..]);
    }

    #[test]
    fn counter_above_256_is_supported() {
        let key = [3u8; 32];
        let prf = PrfKey::new(&key);
        assert_ne!(prf.block(255), prf.block(1023));
    }
}
