//! The source (prefix) of an IRC message: who a message came from.

use std::str::FromStr;

use crate::error::{ProtocolError, Result};

use super::host::validate_host;

/// An IRC message source, `nick[!user][@host]`.
///
/// Server names arrive here too: a prefix with neither `!` nor `@` lands
/// entirely in `nick`, whatever it looks like.
///
/// # Example
///
/// ```
/// use ircwire::Source;
///
/// let source: Source = "john!jsmith@example.com".parse().unwrap();
/// assert_eq!(source.nick, "john");
/// assert_eq!(source.user.as_deref(), Some("jsmith"));
/// assert_eq!(source.host.as_deref(), Some("example.com"));
/// assert_eq!(source.to_string(), "john!jsmith@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Source {
    /// Nickname, or the whole prefix when it has no `!`/`@` structure.
    pub nick: String,
    /// Username (ident), the part after the first `!`.
    pub user: Option<String>,
    /// Hostname, the part after the first `@`.
    pub host: Option<String>,
}

impl Source {
    /// Create a source carrying only a nick.
    pub fn new(nick: impl Into<String>) -> Self {
        Source {
            nick: nick.into(),
            user: None,
            host: None,
        }
    }

    /// Set the username.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the hostname.
    ///
    /// The host is not checked here; it is validated when the source is
    /// parsed off the wire or serialized back onto it.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Parse a prefix string into its components.
    ///
    /// A string with neither `!` nor `@` is taken as a bare nick with no
    /// validation at all. Otherwise the host is split off after the first
    /// `@` before the user is split off after the first `!`, so
    /// `a!b@c` is nick `a`, user `b`, host `c`. An extracted host must
    /// satisfy the host grammar.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::InvalidHost`] if an extracted host fails the
    /// grammar.
    pub fn parse(prefix: &str) -> Result<Self> {
        if !prefix.contains('!') && !prefix.contains('@') {
            return Ok(Source::new(prefix));
        }

        let mut rest = prefix;
        let mut user = None;
        let mut host = None;

        if let Some(at) = rest.find('@') {
            host = Some(rest[at + 1..].to_string());
            rest = &rest[..at];
        }
        if let Some(bang) = rest.find('!') {
            user = Some(rest[bang + 1..].to_string());
            rest = &rest[..bang];
        }

        if let Some(ref host) = host {
            validate_host(host)?;
        }

        Ok(Source {
            nick: rest.to_string(),
            user,
            host,
        })
    }
}

impl FromStr for Source {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Source::parse(s)
    }
}
