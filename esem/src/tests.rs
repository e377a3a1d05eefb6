//! Whole-protocol tests exercising `RoundServer::handle` directly (no
//! socket) against the reference test vector.

use crate::keys::MasterPublic;
use crate::server::RoundServer;
use crate::signer::{Signer, SignerTables};
use crate::table::key_gen;
use crate::variant::Variant;
use curve::{Affine, Projective, ScalarField};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SK_AES: [u8; 32] = [
    0x54, 0xa2, 0xf8, 0x03, 0x1d, 0x18, 0xac, 0x77, 0xd2, 0x53, 0x92, 0xf2, 0x80, 0xb4, 0xb1, 0x2f,
    0xac, 0xf1, 0x29, 0x3f, 0x3a, 0xe6, 0x77, 0x7d, 0x74, 0x15, 0x67, 0x91, 0x99, 0x53, 0x69, 0xc5,
];

struct Harness {
    servers: Vec<RoundServer>,
    signer: Signer,
    public_key: MasterPublic,
}

fn build_harness(seed: u64) -> Harness {
    let sk = ScalarField::from_bytes_le(&SK_AES);
    let mut rng = StdRng::seed_from_u64(seed);
    let out = key_gen(&SK_AES, Some(sk), Variant::V2, &mut rng).unwrap();

    let servers = out
        .subkeys
        .iter()
        .cloned()
        .zip(out.public_tables.clone().unwrap())
        .map(|(subkey, table)| RoundServer::tabled(subkey, table, Variant::V2))
        .collect();

    let signer = Signer::new(
        out.master_secret.clone(),
        out.subkeys.clone(),
        SignerTables::Tabled(out.secret_tables.unwrap()),
        Variant::V2,
    );

    Harness {
        servers,
        signer,
        public_key: out.master_public,
    }
}

/// Runs the `L` rounds against in-process servers and checks the Schnorr
/// equation, without touching a socket.
fn verify_in_process(
    sig: &crate::signature::Signature,
    message: &[u8],
    servers: &[RoundServer],
    public_key: &MasterPublic,
) -> bool {
    let mut acc = Projective::from_affine(&servers[0].handle(&sig.x));
    for server in &servers[1..] {
        acc += Projective::from_affine(&server.handle(&sig.x));
    }
    let r = acc.to_affine();

    let e = ScalarField::from_bytes_le(&crate::keyed_hash::message_hash(&sig.x, message));
    let r_prime = Affine::double_scalar_mul_basepoint(&sig.s, &e, &public_key.0);

    r.to_bytes() == r_prime.to_bytes()
}

// S1 — KeyGen determinism.
#[test]
fn s1_keygen_determinism() {
    let sk = ScalarField::from_bytes_le(&SK_AES);
    let mut rng1 = StdRng::seed_from_u64(7);
    let mut rng2 = StdRng::seed_from_u64(7);
    let out1 = key_gen(&SK_AES, Some(sk), Variant::V2, &mut rng1).unwrap();
    let out2 = key_gen(&SK_AES, Some(sk), Variant::V2, &mut rng2).unwrap();

    assert_eq!(out1.master_public.to_bytes(), out2.master_public.to_bytes());
    for (s1, s2) in out1.subkeys.iter().zip(out2.subkeys.iter()) {
        assert_eq!(s1.0, s2.0);
    }
    let pt1 = out1.public_tables.unwrap();
    let pt2 = out2.public_tables.unwrap();
    for (t1, t2) in pt1.iter().zip(pt2.iter()) {
        for (p1, p2) in t1.0.iter().zip(t2.0.iter()) {
            assert_eq!(p1.to_bytes(), p2.to_bytes());
        }
    }
}

// S2 — self-verification.
#[test]
fn s2_self_verification() {
    let mut harness = build_harness(1);
    let message = [0u8; 32];
    let sig = harness.signer.sign(&message);
    assert!(verify_in_process(
        &sig,
        &message,
        &harness.servers,
        &harness.public_key
    ));
}

// S3 — bit-flip rejection.
#[test]
fn s3_bit_flip_in_s_rejects() {
    let mut harness = build_harness(2);
    let message = [0u8; 32];
    let sig = harness.signer.sign(&message);

    let mut bytes = sig.to_bytes();
    bytes[17] ^= 0xFF;
    let tampered = crate::signature::Signature::from_bytes(&bytes);

    assert!(!verify_in_process(
        &tampered,
        &message,
        &harness.servers,
        &harness.public_key
    ));
}

// S4 — wrong message.
#[test]
fn s4_wrong_message_rejects() {
    let mut harness = build_harness(3);
    let message = [0u8; 32];
    let sig = harness.signer.sign(&message);

    let mut wrong_message = [0u8; 32];
    wrong_message[0] = 1;

    assert!(!verify_in_process(
        &sig,
        &wrong_message,
        &harness.servers,
        &harness.public_key
    ));
}

// S5 — wrong public key.
#[test]
fn s5_wrong_public_key_rejects() {
    let mut harness = build_harness(4);
    let message = [0u8; 32];
    let sig = harness.signer.sign(&message);

    let mut unrelated_rng = StdRng::seed_from_u64(999);
    let unrelated_pk = crate::keys::MasterSecret::random(&mut unrelated_rng).public_key();

    assert!(!verify_in_process(
        &sig,
        &message,
        &harness.servers,
        &unrelated_pk
    ));
}

// S6 — server substitution in round 2.
#[test]
fn s6_server_substitution_rejects() {
    let mut harness = build_harness(5);
    let message = [0u8; 32];
    let sig = harness.signer.sign(&message);

    let r1 = harness.servers[0].handle(&sig.x);
    let r2_real = harness.servers[1].handle(&sig.x);
    let r2_substituted = r2_real + Affine::generator();
    let r3 = harness.servers[2].handle(&sig.x);

    let mut acc = Projective::from_affine(&r1);
    acc += Projective::from_affine(&r2_substituted);
    acc += Projective::from_affine(&r3);
    let r = acc.to_affine();

    let e = ScalarField::from_bytes_le(&crate::keyed_hash::message_hash(&sig.x, &message));
    let r_prime = Affine::double_scalar_mul_basepoint(&sig.s, &e, &harness.public_key.0);

    assert_ne!(r.to_bytes(), r_prime.to_bytes());
}

// Universal property: aggregation associativity — summing R_1..R_3 in any
// order gives the same affine result.
#[test]
fn aggregation_is_order_independent() {
    let mut harness = build_harness(6);
    let message = [0u8; 32];
    let sig = harness.signer.sign(&message);

    let r_points: Vec<Affine> = harness
        .servers
        .iter()
        .map(|server| server.handle(&sig.x))
        .collect();

    let forward = {
        let mut acc = Projective::from_affine(&r_points[0]);
        acc += Projective::from_affine(&r_points[1]);
        acc += Projective::from_affine(&r_points[2]);
        acc.to_affine()
    };
    let reversed = {
        let mut acc = Projective::from_affine(&r_points[2]);
        acc += Projective::from_affine(&r_points[1]);
        acc += Projective::from_affine(&r_points[0]);
        acc.to_affine()
    };

    assert_eq!(forward.to_bytes(), reversed.to_bytes());
}

// Universal property: variant independence — a v1 server never reproduces
// a v2 server's answer for the same subkey and randomiser.
#[test]
fn variants_are_not_interchangeable() {
    let subkey = crate::table::derive_subkey(&SK_AES, 1);
    let v1 = RoundServer::fresh(subkey.clone(), Variant::V1);
    let v2 = RoundServer::fresh(subkey, Variant::V2);

    let x = [4u8; 16];
    assert_ne!(v1.handle(&x).to_bytes(), v2.handle(&x).to_bytes());
}

// Universal property: server purity — repeated calls with the same input
// give byte-identical output.
#[test]
fn server_handle_is_idempotent() {
    let harness = build_harness(8);
    let x = [11u8; 16];
    let first = harness.servers[0].handle(&x);
    let second = harness.servers[0].handle(&x);
    assert_eq!(first.to_bytes(), second.to_bytes());
}
