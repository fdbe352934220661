//! # ircwire
//!
//! A codec for the IRC wire message format: verb, parameters, IRCv3
//! message tags, and source prefixes, plus a glob-style matcher for IRC
//! source masks.
//!
//! ## Features
//!
//! - Line parsing with tags, source, verb, and parameters
//! - Fallible serialization back to CRLF-terminated lines
//! - IRCv3 tag-component escaping, total unescaping
//! - Host grammar validation on source prefixes
//! - Compiled `*`/`?` source-mask matching
//!
//! Everything is synchronous and pure: no I/O, no shared mutable state,
//! nothing to cancel. Transport, session state, and command semantics are
//! out of scope.
//!
//! ## Quick Start
//!
//! ### Parsing lines
//!
//! ```rust
//! use ircwire::Message;
//!
//! let msg: Message = ":john!jsmith@example.com PRIVMSG #general :hi guys\r\n"
//!     .parse()
//!     .expect("valid IRC line");
//!
//! assert_eq!(msg.verb, "PRIVMSG");
//! assert_eq!(msg.source_nickname(), Some("john"));
//! assert_eq!(msg.trailing(), Some("hi guys"));
//! ```
//!
//! ### Building lines
//!
//! ```rust
//! use ircwire::{Message, Source};
//!
//! let line = Message::new("PRIVMSG")
//!     .with_tag("time", "2023-01-01T12:00:00Z")
//!     .with_source(Source::new("bot").with_user("bot").with_host("example.com"))
//!     .with_param("#dev")
//!     .with_param("deploy finished")
//!     .to_line()
//!     .expect("serializable message");
//!
//! assert_eq!(
//!     line,
//!     "@time=2023-01-01T12:00:00Z :bot!bot@example.com PRIVMSG #dev :deploy finished\r\n"
//! );
//! ```
//!
//! ### Matching masks
//!
//! ```rust
//! let mask = ircwire::mask("gr?y!?@*");
//! assert!(mask.test("gray!~@example.net"));
//! ```

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod mask;
pub mod message;
pub mod numerics;
pub mod source;
pub mod verbs;

pub use self::error::{ProtocolError, Result};
pub use self::mask::Mask;
pub use self::message::Message;
pub use self::source::Source;

/// Parse one IRC line into a [`Message`].
///
/// Equivalent to `line.parse::<Message>()`.
///
/// # Errors
///
/// [`ProtocolError::MissingTerminator`] when a non-empty line lacks CRLF,
/// [`ProtocolError::InvalidHost`] when a source host fails the host
/// grammar.
pub fn parse(line: &str) -> Result<Message> {
    line.parse()
}

/// Serialize a [`Message`] into a CRLF-terminated IRC line.
///
/// Equivalent to [`Message::to_line`].
///
/// # Errors
///
/// [`ProtocolError::InvalidHost`] when the source host fails the host
/// grammar, [`ProtocolError::InvalidParam`] when a non-final parameter
/// contains a space.
pub fn stringify(message: &Message) -> Result<String> {
    message.to_line()
}

/// Compile a source mask into a [`Mask`] matcher.
///
/// ```rust
/// let mask = ircwire::mask("*!*@*.example.net");
/// assert!(mask.test("gray!~@adm.example.net"));
/// ```
pub fn mask(pattern: &str) -> Mask {
    Mask::new(pattern)
}
