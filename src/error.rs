//! Error types for the wire codec.
//!
//! Every failure the codec can produce is synchronous and raised at the
//! point of detection; nothing is retried or recovered internally.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while decoding or encoding IRC lines.
///
/// Malformed tag strings are deliberately NOT errors: tag unescaping and
/// tag-string parsing are total functions that always produce a mapping,
/// however degenerate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtocolError {
    /// Line lacks the CRLF terminator on parse.
    ///
    /// The only exception is an empty or all-whitespace line, which parses
    /// to the empty message without requiring CRLF.
    #[error("missing CRLF terminator: {0:?}")]
    MissingTerminator(String),

    /// A host string failed the host grammar.
    ///
    /// Surfaced both when parsing a source containing `@host` and when
    /// serializing one.
    #[error("invalid host: {0:?}")]
    InvalidHost(String),

    /// A non-final parameter contained a space during serialization.
    #[error("invalid parameter: {0:?}")]
    InvalidParam(String),
}
