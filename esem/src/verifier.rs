//! The Verifier: drives the `L`-round server exchange and checks the
//! Schnorr equation.

use curve::{Affine, Projective};
use std::net::TcpStream;

use crate::errors::EsemError;
use crate::keyed_hash::message_hash;
use crate::keys::MasterPublic;
use crate::signature::Signature;
use crate::transport::round_trip;

/// Checks ESEM signatures by exchanging the randomiser with `L` servers
/// over one or more `TcpStream`s.
pub struct Verifier;

impl Verifier {
    /// Verify `sig` on `message` against `public_key`, exchanging `x` with
    /// each stream in `rounds` in order — `rounds[j]` must be the stream to
    /// the server holding subkey `j + 1`; reordering would aggregate the
    /// wrong subkeys' contributions.
    ///
    /// `Ok(())` on accept; `Err(EsemError::VerifyReject)` on a completed
    /// but invalid protocol run; `Err(EsemError::ProtocolError(_))` if any
    /// round's socket I/O fails, or if `rounds` does not hold exactly `L`
    /// streams.
    pub fn verify(
        sig: &Signature,
        message: &[u8],
        public_key: &MasterPublic,
        rounds: &mut [TcpStream],
    ) -> Result<(), EsemError> {
        if rounds.len() != crate::constants::ROUNDS {
            return Err(EsemError::ProtocolError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!(
                    "expected {} round streams, got {}",
                    crate::constants::ROUNDS,
                    rounds.len()
                ),
            )));
        }

        let r0 = round_trip(&mut rounds[0], &sig.x)?;
        let mut acc = Projective::from_affine(&r0);
        for stream in &mut rounds[1..] {
            let r_j = round_trip(stream, &sig.x)?;
            acc += Projective::from_affine(&r_j);
        }
        let r = acc.to_affine();

        let e = curve::ScalarField::from_bytes_le(&message_hash(&sig.x, message));
        let r_prime = Affine::double_scalar_mul_basepoint(&sig.s, &e, &public_key.0);

        if r.to_bytes() == r_prime.to_bytes() {
            Ok(())
        } else {
            Err(EsemError::VerifyReject)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::RoundServer;
    use crate::signer::{Signer, SignerTables};
    use crate::table::key_gen;
    use crate::variant::Variant;
    use curve::ScalarField;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::net::TcpListener;
    use std::thread;

    const SK_AES: [u8; 32] = [
        0x54, 0xa2, 0xf8, 0x03, 0x1d, 0x18, 0xac, 0x77, 0xd2, 0x53, 0x92, 0xf2, 0x80, 0xb4, 0xb1,
        0x2f, 0xac, 0xf1, 0x29, 0x3f, 0x3a, 0xe6, 0x77, 0x7d, 0x74, 0x15, 0x67, 0x91, 0x99, 0x53,
        0x69, 0xc5,
    ];

    /// Spins up one `serve_single` listener per round and returns the
    /// client-side streams already connected to each.
    fn spawn_round_servers(servers: Vec<RoundServer>) -> Vec<TcpStream> {
        let mut client_streams = Vec::with_capacity(servers.len());
        for server in servers {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            thread::spawn(move || {
                let (mut stream, _) = listener.accept().unwrap();
                let x = crate::transport::recv_request(&mut stream).unwrap();
                let r_j = server.handle(&x);
                crate::transport::send_reply(&mut stream, &r_j).unwrap();
            });
            client_streams.push(TcpStream::connect(addr).unwrap());
        }
        client_streams
    }

    #[test]
    fn accepts_a_genuine_signature() {
        let sk = ScalarField::from_bytes_le(&SK_AES);
        let mut rng = StdRng::seed_from_u64(0);
        let out = key_gen(&SK_AES, Some(sk), Variant::V2, &mut rng).unwrap();

        let servers: Vec<RoundServer> = out
            .subkeys
            .iter()
            .cloned()
            .zip(out.public_tables.clone().unwrap())
            .map(|(subkey, table)| RoundServer::tabled(subkey, table, Variant::V2))
            .collect();

        let mut signer = Signer::new(
            out.master_secret.clone(),
            out.subkeys.clone(),
            SignerTables::Tabled(out.secret_tables.unwrap()),
            Variant::V2,
        );
        let message = [0u8; 32];
        let sig = signer.sign(&message);

        let mut streams = spawn_round_servers(servers);
        let result = Verifier::verify(&sig, &message, &out.master_public, &mut streams);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_a_round_count_other_than_l() {
        let sk = ScalarField::from_bytes_le(&SK_AES);
        let mut rng = StdRng::seed_from_u64(0);
        let out = key_gen(&SK_AES, Some(sk), Variant::V2, &mut rng).unwrap();
        let mut signer = Signer::new(
            out.master_secret.clone(),
            out.subkeys.clone(),
            SignerTables::Tabled(out.secret_tables.unwrap()),
            Variant::V2,
        );
        let message = [0u8; 32];
        let sig = signer.sign(&message);

        let mut no_streams: Vec<TcpStream> = Vec::new();
        let result = Verifier::verify(&sig, &message, &out.master_public, &mut no_streams);
        assert!(matches!(result, Err(EsemError::ProtocolError(_))));
    }
}
