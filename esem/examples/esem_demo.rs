//! End-to-end demo: key generation, signing, and a real TCP round trip
//! against three in-process `RoundServer`s.

use esem::{RoundServer, Signer, SignerTables, Variant, Verifier, key_gen, transport};
use rand::rng;
use std::net::{TcpListener, TcpStream};
use std::thread;

fn main() {
    let sk_aes = [7u8; 32];
    let mut rng = rng();
    let out = key_gen(&sk_aes, None, Variant::V2, &mut rng).expect("key_gen");

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

    let message = b"efficient signatures for embedded medical devices";
    let signature = signer.sign(message);
    println!("signature.x = {:02x?}", signature.x);

    let mut rounds: Vec<TcpStream> = servers
        .into_iter()
        .map(|server| {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            let addr = listener.local_addr().expect("local_addr");
            thread::spawn(move || {
                let (mut stream, _) = listener.accept().expect("accept");
                let x = transport::recv_request(&mut stream).expect("recv_request");
                let r_j = server.handle(&x);
                transport::send_reply(&mut stream, &r_j).expect("send_reply");
            });
            TcpStream::connect(addr).expect("connect")
        })
        .collect();

    match Verifier::verify(&signature, message, &out.master_public, &mut rounds) {
        Ok(()) => println!("signature accepted"),
        Err(err) => println!("signature rejected: {err}"),
    }
}
