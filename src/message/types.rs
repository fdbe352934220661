use std::collections::BTreeMap;

use crate::source::Source;

/// An IRC wire message.
///
/// Contains the optional IRCv3 tags, the optional source prefix, the verb,
/// and the parameters, in owned form.
///
/// # Example
///
/// ```
/// use ircwire::Message;
///
/// // Parse a line
/// let msg: Message = ":nick!user@example.com PRIVMSG #channel :Hello!\r\n"
///     .parse()
///     .unwrap();
/// assert_eq!(msg.verb, "PRIVMSG");
///
/// // Construct a message
/// let msg = Message::new("PRIVMSG")
///     .with_param("#channel")
///     .with_param("Hello!");
/// assert_eq!(msg.to_line().unwrap(), "PRIVMSG #channel :Hello!\r\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// IRCv3 message tags. Duplicate keys collapsed on parse, last wins.
    pub tags: Option<BTreeMap<String, String>>,
    /// Message source (e.g. `nick!user@host`).
    pub source: Option<Source>,
    /// The command name or three-digit numeric code. Empty only in the
    /// empty message.
    pub verb: String,
    /// Parameters, in order. `None` when there are none, never an empty
    /// vector. Only the final parameter may contain spaces.
    pub params: Option<Vec<String>>,
}

impl Message {
    /// Create a message carrying only a verb.
    pub fn new(verb: impl Into<String>) -> Self {
        Message {
            verb: verb.into(),
            ..Message::default()
        }
    }

    /// True for the empty message, produced by parsing an empty or
    /// all-whitespace line.
    pub fn is_empty(&self) -> bool {
        self.verb.is_empty()
            && self.tags.is_none()
            && self.source.is_none()
            && self.params.is_none()
    }

    /// Append a parameter.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.get_or_insert_with(Vec::new).push(param.into());
        self
    }

    /// Set a tag. An existing value under the same key is replaced.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the source of this message.
    #[must_use]
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Get the value of a tag by key.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.get(key).map(String::as_str)
    }

    /// Get the nickname from the message source, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.nick.as_str())
    }

    /// Get the trailing parameter, if any parameters are present.
    pub fn trailing(&self) -> Option<&str> {
        self.params.as_ref()?.last().map(String::as_str)
    }
}
