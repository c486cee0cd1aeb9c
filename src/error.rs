//! Error taxonomy of the ring-perception engine.

use thiserror::Error;

/// Failures a ring search can raise.
///
/// Nothing in this crate retries: a threshold abort asks the caller to
/// relax the bound and search again, and a malformed graph is a caller
/// bug. A shortest-ring search that finds nothing is not an error — it is
/// the normal signal that a vertex sits on no remaining cycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The path graph grew past the configured threshold: the ring system
    /// is too dense to enumerate exhaustively under this bound.
    #[error("ring search aborted: {degree} paths meet at one vertex, threshold allows {max}")]
    SearchAborted { degree: usize, max: usize },

    /// The supplied graph violates the engine's structural contract.
    #[error("malformed molecular graph: {0}")]
    MalformedGraph(&'static str),
}
