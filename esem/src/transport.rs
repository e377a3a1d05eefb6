//! Fixed-size framed TCP request/reply transport between Verifier and
//! Server(s).
//!
//! Frames carry no length prefix: both message sizes are protocol
//! constants known to each side, so `Read::read_exact` against a
//! fixed-size buffer already fails fast (as `EsemError::ProtocolError`) on
//! a short read or closed connection instead of blocking indefinitely.

use curve::Affine;
use std::io::{Read, Write};
use std::net::TcpStream;

use crate::constants::{PUBLIC_KEY_SIZE, RANDOMISER_SIZE};
use crate::errors::EsemError;

/// Default TCP port for the reference deployment. A deployment choice, not
/// a protocol constant.
pub const DEFAULT_PORT: u16 = 5555;

/// Server side of one round: read the 16-byte randomiser request.
pub fn recv_request(stream: &mut TcpStream) -> Result<[u8; RANDOMISER_SIZE], EsemError> {
    let mut x = [0u8; RANDOMISER_SIZE];
    stream.read_exact(&mut x)?;
    Ok(x)
}

/// Server side of one round: write the 64-byte aggregated point reply.
pub fn send_reply(stream: &mut TcpStream, point: &Affine) -> Result<(), EsemError> {
    stream.write_all(&point.to_bytes())?;
    Ok(())
}

/// Client side of one round: send `x`, block for the 64-byte reply.
///
/// The reply is untrusted input — a buggy or malicious server could send a
/// coordinate pair that doesn't satisfy the curve equation — so it is
/// checked with `Affine::is_on_curve` before being handed back to the
/// Verifier's point accumulation; a failure is `EsemError::CurveFailure`,
/// distinct from the transport-level `ProtocolError`.
pub fn round_trip(stream: &mut TcpStream, x: &[u8; RANDOMISER_SIZE]) -> Result<Affine, EsemError> {
    stream.write_all(x)?;
    let mut buf = [0u8; PUBLIC_KEY_SIZE];
    stream.read_exact(&mut buf)?;
    let point = Affine::from_bytes(&buf);
    if !point.is_on_curve() {
        return Err(EsemError::CurveFailure);
    }
    Ok(point)
}
