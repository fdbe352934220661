//! Message parsing implementation.
//!
//! Implements `FromStr` for [`Message`]: a left-to-right scan over the
//! space-split tokens of a CRLF-terminated line.

use std::str::FromStr;

use crate::error::{ProtocolError, Result};
use crate::source::Source;

use super::tags::parse_tag_string;
use super::types::Message;

impl FromStr for Message {
    type Err = ProtocolError;

    /// Parse one IRC line.
    ///
    /// An empty or all-whitespace line yields the empty message; every
    /// other line must end with CRLF. After the terminator is stripped the
    /// body is split on single spaces; runs of spaces produce empty
    /// tokens, which are skipped and never count as parameters.
    ///
    /// `@`-prefixed tokens (re)assign the tags wherever they appear before
    /// the trailing parameter; the scanner does not special-case their
    /// position. A `:`-prefixed token is the source if the verb has not
    /// been seen yet, otherwise it starts the trailing parameter, which
    /// swallows every remaining token verbatim.
    fn from_str(line: &str) -> Result<Self> {
        if line.trim().is_empty() {
            return Ok(Message::default());
        }

        let body = line
            .strip_suffix("\r\n")
            .ok_or_else(|| ProtocolError::MissingTerminator(line.to_string()))?;

        let mut message = Message::default();
        let mut params: Vec<String> = Vec::new();
        let mut verb_seen = false;

        let mut tokens = body.split(' ');
        while let Some(token) = tokens.next() {
            if let Some(raw_tags) = token.strip_prefix('@') {
                message.tags = Some(parse_tag_string(raw_tags));
            } else if let Some(rest) = token.strip_prefix(':') {
                if verb_seen {
                    // Trailing parameter: rejoin with everything left,
                    // interior empty tokens included.
                    let mut trailing = rest.to_string();
                    for t in tokens.by_ref() {
                        trailing.push(' ');
                        trailing.push_str(t);
                    }
                    params.push(trailing);
                    break;
                }
                message.source = Some(Source::parse(rest)?);
            } else if !token.is_empty() {
                if verb_seen {
                    params.push(token.to_string());
                } else {
                    message.verb = token.to_string();
                    verb_seen = true;
                }
            }
        }

        if !params.is_empty() {
            message.params = Some(params);
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_verb() {
        let msg: Message = "PING\r\n".parse().unwrap();
        assert_eq!(msg.verb, "PING");
        assert!(msg.tags.is_none());
        assert!(msg.source.is_none());
        assert!(msg.params.is_none());
    }

    #[test]
    fn test_parse_empty_line() {
        let msg: Message = "".parse().unwrap();
        assert!(msg.is_empty());

        let msg: Message = "   ".parse().unwrap();
        assert!(msg.is_empty());

        // Whitespace-only includes a bare CRLF
        let msg: Message = "\r\n".parse().unwrap();
        assert!(msg.is_empty());
    }

    #[test]
    fn test_parse_missing_terminator() {
        assert_eq!(
            "NOCRLF".parse::<Message>(),
            Err(ProtocolError::MissingTerminator("NOCRLF".to_string()))
        );
        // A lone LF is not a terminator
        assert!(matches!(
            "PING server\n".parse::<Message>(),
            Err(ProtocolError::MissingTerminator(_))
        ));
    }

    #[test]
    fn test_parse_full_line() {
        let msg: Message = ":john!jsmith@example.com PRIVMSG #general :hi guys\r\n"
            .parse()
            .unwrap();
        assert_eq!(msg.verb, "PRIVMSG");
        let source = msg.source.as_ref().unwrap();
        assert_eq!(source.nick, "john");
        assert_eq!(source.user.as_deref(), Some("jsmith"));
        assert_eq!(source.host.as_deref(), Some("example.com"));
        assert_eq!(
            msg.params,
            Some(vec!["#general".to_string(), "hi guys".to_string()])
        );
    }

    #[test]
    fn test_parse_with_tags() {
        let msg: Message = "@time=2023-01-01T00:00:00Z;msgid=abc :nick PRIVMSG #ch :Hi\r\n"
            .parse()
            .unwrap();
        assert_eq!(msg.tag_value("time"), Some("2023-01-01T00:00:00Z"));
        assert_eq!(msg.tag_value("msgid"), Some("abc"));
        assert_eq!(msg.source_nickname(), Some("nick"));
        assert_eq!(msg.verb, "PRIVMSG");
    }

    #[test]
    fn test_parse_middle_params() {
        let msg: Message = "USER guest 0 * :Real Name\r\n".parse().unwrap();
        assert_eq!(msg.verb, "USER");
        assert_eq!(
            msg.params,
            Some(vec![
                "guest".to_string(),
                "0".to_string(),
                "*".to_string(),
                "Real Name".to_string(),
            ])
        );
    }

    #[test]
    fn test_parse_trailing_without_space() {
        let msg: Message = "PRIVMSG #channel :\r\n".parse().unwrap();
        assert_eq!(
            msg.params,
            Some(vec!["#channel".to_string(), "".to_string()])
        );
    }

    #[test]
    fn test_parse_trailing_swallows_everything() {
        // Tokens after the trailing colon are taken verbatim, @ and : included
        let msg: Message = "PRIVMSG #ch :a @b :c d\r\n".parse().unwrap();
        assert_eq!(
            msg.params,
            Some(vec!["#ch".to_string(), "a @b :c d".to_string()])
        );
        assert!(msg.tags.is_none());
    }

    #[test]
    fn test_parse_trailing_preserves_space_runs() {
        let msg: Message = "PRIVMSG #ch :a  b\r\n".parse().unwrap();
        assert_eq!(msg.params, Some(vec!["#ch".to_string(), "a  b".to_string()]));
    }

    #[test]
    fn test_parse_skips_empty_tokens() {
        let msg: Message = "PRIVMSG  #ch   middle\r\n".parse().unwrap();
        assert_eq!(
            msg.params,
            Some(vec!["#ch".to_string(), "middle".to_string()])
        );

        let msg: Message = "  PING\r\n".parse().unwrap();
        assert_eq!(msg.verb, "PING");
    }

    #[test]
    fn test_parse_tags_recognized_after_verb() {
        // The scanner does not special-case tag position
        let msg: Message = "PING @answer=42\r\n".parse().unwrap();
        assert_eq!(msg.verb, "PING");
        assert_eq!(msg.tag_value("answer"), Some("42"));
        assert!(msg.params.is_none());
    }

    #[test]
    fn test_parse_later_source_overwrites() {
        let msg: Message = ":first :second PING\r\n".parse().unwrap();
        assert_eq!(msg.source_nickname(), Some("second"));
    }

    #[test]
    fn test_parse_numeric_verb() {
        let msg: Message = ":irc.example.com 001 nick :Welcome\r\n".parse().unwrap();
        assert_eq!(msg.verb, "001");
        assert_eq!(msg.source_nickname(), Some("irc.example.com"));
    }

    #[test]
    fn test_parse_invalid_host_in_source() {
        assert_eq!(
            ":nick!user@300.1.1.1 PING\r\n".parse::<Message>(),
            Err(ProtocolError::InvalidHost("300.1.1.1".to_string()))
        );
    }

    #[test]
    fn test_parse_duplicate_tag_keys_last_wins() {
        let msg: Message = "@k=1;k=2 PING\r\n".parse().unwrap();
        assert_eq!(msg.tag_value("k"), Some("2"));
    }

    #[test]
    fn test_parse_verbless_line() {
        // A tags-only line never captures a verb
        let msg: Message = "@k=v\r\n".parse().unwrap();
        assert_eq!(msg.verb, "");
        assert_eq!(msg.tag_value("k"), Some("v"));
        assert!(msg.params.is_none());
    }
}
