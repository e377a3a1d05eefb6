//! The Server: recomputes the aggregated partial public point `R_j` for an
//! inbound randomiser `x`, using one subkey and its public table.

use curve::{Affine, Projective};
use std::net::{TcpListener, TcpStream};

use crate::constants::RANDOMISER_SIZE;
use crate::errors::EsemError;
use crate::table::{PublicTable, Subkey, derive_table_entry};
use crate::transport::{recv_request, send_reply};
use crate::variant::Variant;

/// Where a `RoundServer` gets its per-index public points from.
enum PointSource {
    /// v1: regenerate `PT_j[idx[i]]` on demand from the subkey.
    Fresh,
    /// v2: look up the precomputed table.
    Tabled(PublicTable),
}

/// One of the `L` logical servers: holds a subkey and (for v2) its public
/// table, and answers `x` with `R_j`.
///
/// `handle` is the pure, side-effect-free core of the role — it never
/// touches the network, so it can be exercised directly in tests and
/// reused by both `serve_shared` and `serve_single`.
pub struct RoundServer {
    subkey: Subkey,
    points: PointSource,
    variant: Variant,
}

impl RoundServer {
    /// A server that regenerates its table entries on demand (v1).
    pub fn fresh(subkey: Subkey, variant: Variant) -> Self {
        Self {
            subkey,
            points: PointSource::Fresh,
            variant,
        }
    }

    /// A server holding a materialised public table (v2).
    pub fn tabled(subkey: Subkey, table: PublicTable, variant: Variant) -> Self {
        Self {
            subkey,
            points: PointSource::Tabled(table),
            variant,
        }
    }

    /// Recompute `R_j` for randomiser `x`.
    pub fn handle(&self, x: &[u8; RANDOMISER_SIZE]) -> Affine {
        let h_j = crate::keyed_hash::round_hash(&self.subkey.0, x, self.variant);
        let indices = self.variant.derive_indices(&h_j);

        let point_at = |idx: usize| -> Affine {
            match &self.points {
                PointSource::Fresh => {
                    Affine::mul_generator(&derive_table_entry(&self.subkey, idx))
                }
                PointSource::Tabled(table) => table.0[idx],
            }
        };

        let mut acc = Projective::from_affine(&point_at(indices[0] as usize));
        for &idx in &indices[1..] {
            acc += Projective::from_affine(&point_at(idx as usize));
        }
        acc.to_affine()
    }
}

fn handle_round(stream: &mut TcpStream, server: &RoundServer) -> Result<(), EsemError> {
    let x = recv_request(stream)?;
    let r_j = server.handle(&x);
    send_reply(stream, &r_j)
}

/// Simulate all `L` logical servers in one process on one listener: each
/// accepted connection is served to completion, answering `L` sequential
/// requests round-robined across `servers` before the next `accept()`.
///
/// This mirrors the reference's single REP socket reused across the three
/// logical servers.
pub fn serve_shared(listener: &TcpListener, servers: &[RoundServer]) -> Result<(), EsemError> {
    for stream in listener.incoming() {
        let mut stream = stream?;
        for server in servers {
            handle_round(&mut stream, server)?;
        }
    }
    Ok(())
}

/// Run one genuinely distributed server: one `RoundServer`, one listener,
/// one request answered per connection.
pub fn serve_single(listener: &TcpListener, server: &RoundServer) -> Result<(), EsemError> {
    for stream in listener.incoming() {
        let mut stream = stream?;
        handle_round(&mut stream, server)?;
    }
    Ok(())
}
