//! Error types for the ESEM signature scheme.

/// Errors that can occur during key generation, signing, and verification.
#[derive(Debug, thiserror::Error)]
pub enum EsemError {
    /// The RNG failed while drawing a master secret scalar.
    #[error("RNG failure during key generation")]
    RngFailure,

    /// The curve library rejected an input point or scalar, e.g. a point
    /// read off the wire that fails `Affine::is_on_curve`.
    #[error("curve library rejected an input point or scalar")]
    CurveFailure,

    /// A server exchange failed at the transport layer: a short read,
    /// a closed connection, or any other I/O fault. Distinct from
    /// [`EsemError::VerifyReject`] — the protocol round never completed.
    #[error("protocol error during server exchange: {0}")]
    ProtocolError(#[from] std::io::Error),

    /// The protocol round completed but the signature did not satisfy the
    /// verification equation.
    #[error("signature failed verification")]
    VerifyReject,
}
