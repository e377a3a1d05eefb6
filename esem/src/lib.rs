//! # ESEM — Efficient Signatures for Embedded Medical devices
//!
//! A three-party signature scheme: a resource-constrained Signer, one or
//! more Servers holding precomputed public-key tables, and a Verifier that
//! checks signatures against a single long-term master public key.
//!
//! ## Overview
//!
//! Signing work is split so that the Signer performs exactly one scalar
//! multiplication in the group's scalar domain, while the bulk of the
//! point arithmetic (`V·L` point additions per verification) is delegated
//! to `L` Servers. Each Server holds one subkey-derived table and learns
//! only the public randomiser `x`, never the message, the master secret,
//! or the response scalar. Two variants coexist:
//!
//! - **ESEMv1** (`L=3, V=18, N=1024`) regenerates per-index secret/public
//!   scalars on demand from a subkey, trading CPU time for storage.
//! - **ESEMv2** (`L=3, V=40, N=128`) materialises the full secret/public
//!   tables once at key generation and looks entries up by index.
//!
//! ## Algorithm
//!
//! ### Signing
//!
//! Given a message `m`, master secret `sk`, and subkeys `{K_j}` (plus, for
//! v2, the secret tables `{ST_j}`):
//!
//! 1. Derive the randomiser `x = BLAKE2b(key = sk, input = ctr, outlen = 16)`
//!    from a per-[`signer::Signer`] monotone counter.
//! 2. For each subkey `K_j`, hash `x` under `K_j` to select `V` table
//!    indices and accumulate the selected scalars into `r`.
//! 3. Bind the message: `e = BLAKE2b(key = x, input = m, outlen = 32) mod q`.
//! 4. `s = r - e * sk`.
//! 5. Output `(x, s)` — 48 bytes.
//!
//! ### Verification
//!
//! 1. Exchange `x` with each of the `L` servers, receive `R_j`.
//! 2. `R = R_1 + R_2 + ... + R_L`.
//! 3. Recompute `e` as above.
//! 4. Accept iff `R == s*G + e*P`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use esem::{key_gen, Signer, SignerTables, RoundServer, Variant, Verifier};
//! use rand::rng;
//! use std::net::TcpStream;
//!
//! let sk_aes = [7u8; 32];
//! let mut rng = rng();
//! let out = key_gen(&sk_aes, None, Variant::V2, &mut rng).expect("key_gen");
//!
//! let mut signer = Signer::new(
//!     out.master_secret.clone(),
//!     out.subkeys.clone(),
//!     SignerTables::Tabled(out.secret_tables.unwrap()),
//!     Variant::V2,
//! );
//! let message = b"example";
//! let signature = signer.sign(message);
//!
//! // `rounds` would normally be live TcpStreams to each of the L servers.
//! let mut rounds: Vec<TcpStream> = Vec::new();
//! let _ = Verifier::verify(&signature, message, &out.master_public, &mut rounds);
//! ```
//!
//! ## Security Considerations
//!
//! - **Zeroization**: [`keys::MasterSecret`], [`table::Subkey`], and
//!   [`table::SecretTable`] are wiped on drop via the `zeroize` crate.
//! - **Randomiser freshness**: each [`signer::Signer`] owns a monotone
//!   counter; reusing a counter value across signatures on distinct
//!   messages leaks `sk`.
//! - **Not constant-time equality** at the final accept/reject check —
//!   both sides of that comparison are public values, so this is not a
//!   side-channel concern.
//! - **Not audited**: research/prototype code, not a hardened production
//!   cryptographic library.
//!
//! ## References
//!
//! - Boyko, Peinado, Venkatesan. "Speeding up Discrete Log and Factoring
//!   Based Schemes via Precomputations." EUROCRYPT 1998.
//! - Schnorr Signatures: Claus-Peter Schnorr (1989).

mod constants;
mod errors;
mod keyed_hash;
mod keys;
mod prf;
mod server;
mod signature;
mod signer;
mod table;
pub mod transport;
mod variant;
mod verifier;

#[cfg(test)]
mod tests;

pub use constants::{
    PUBLIC_KEY_SIZE, RANDOMISER_SIZE, ROUNDS, SECRET_KEY_SIZE, SIGNATURE_SIZE, SUBKEY_SIZE,
};
pub use errors::EsemError;
pub use keyed_hash::{message_hash, randomiser, round_hash};
pub use keys::{MasterPublic, MasterSecret};
pub use prf::PrfKey;
pub use server::{RoundServer, serve_shared, serve_single};
pub use signature::Signature;
pub use signer::{Signer, SignerTables};
pub use table::{KeyGenOutput, PublicTable, SecretTable, Subkey, derive_subkey, derive_table_entry, key_gen};
pub use transport::DEFAULT_PORT;
pub use variant::Variant;
pub use verifier::Verifier;
