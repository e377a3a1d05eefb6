//! Fixed byte sizes used throughout the ESEM protocol.

/// Size of the per-signature randomiser `x`, in bytes.
pub const RANDOMISER_SIZE: usize = 16;

/// Size of a serialized master public key (affine curve point), in bytes.
pub const PUBLIC_KEY_SIZE: usize = 64;

/// Size of a serialized master secret scalar, in bytes.
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of a signature: `x (16) || s (32)`.
pub const SIGNATURE_SIZE: usize = RANDOMISER_SIZE + SECRET_KEY_SIZE;

/// Size of a derived subkey `K_j`, in bytes.
pub const SUBKEY_SIZE: usize = 32;

/// Number of rounds / servers (`L`), fixed across both variants.
pub const ROUNDS: usize = 3;
