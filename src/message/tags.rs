//! IRCv3 message tag escaping and tag-string parsing.
//!
//! Tag components use the escape sequences from the IRCv3 message-tags
//! spec. Unescaping and tag-string parsing are total: any input produces
//! some output, malformed escapes included.

use std::collections::BTreeMap;

/// Escape a tag component for serialization.
///
/// Replaces backslash, space, semicolon, CR, and LF with `\\`, `\s`, `\:`,
/// `\r`, `\n` respectively. Iterates by codepoint, so multi-byte characters
/// pass through unchanged.
pub fn escape(component: &str) -> String {
    let mut escaped = String::with_capacity(component.len());
    for c in component.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ' ' => escaped.push_str("\\s"),
            ';' => escaped.push_str("\\:"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Unescape a tag component from wire format.
///
/// Reverses [`escape`]. A backslash followed by an unknown character yields
/// that character with the backslash dropped; a backslash at the end of the
/// string is dropped with no output. Never fails.
pub fn unescape(component: &str) -> String {
    let mut unescaped = String::with_capacity(component.len());
    let mut iter = component.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('n') => '\n',
                Some('r') => '\r',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}

/// Parse a raw tag string (the part after `@`, before the first space)
/// into a key/value mapping.
///
/// Entries are split on `;`, each entry is unescaped as a whole, then split
/// on its first `=`: everything after it (further `=` characters included)
/// is the value, and an entry with no `=` gets the empty value. A repeated
/// key keeps the last occurrence. No validation beyond this is performed;
/// empty keys and empty entries from adjacent semicolons are kept as-is.
pub fn parse_tag_string(raw: &str) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    for entry in raw.split(';') {
        let entry = unescape(entry);
        let (key, value) = match entry.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (entry, String::new()),
        };
        tags.insert(key, value);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape("a;b"), "a\\:b");
        assert_eq!(escape("hello world"), "hello\\sworld");
        assert_eq!(escape("path\\file"), "path\\\\file");
        assert_eq!(escape("line\rend"), "line\\rend");
        assert_eq!(escape("line\nend"), "line\\nend");
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("日本語"), "日本語");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_unescape_semicolon() {
        assert_eq!(unescape("a\\:b"), "a;b");
    }

    #[test]
    fn test_unescape_space() {
        assert_eq!(unescape("hello\\sworld"), "hello world");
    }

    #[test]
    fn test_unescape_backslash() {
        assert_eq!(unescape("path\\\\file"), "path\\file");
    }

    #[test]
    fn test_unescape_combined() {
        let input = "a\\:b\\sc\\\\d\\re\\nf";
        let expected = "a;b c\\d\re\nf";
        assert_eq!(unescape(input), expected);
    }

    #[test]
    fn test_unescape_trailing_backslash() {
        // A lone trailing backslash is dropped, not preserved
        assert_eq!(unescape("test\\"), "test");
    }

    #[test]
    fn test_unescape_unknown_escape() {
        // \x becomes x, backslash dropped
        assert_eq!(unescape("a\\xb"), "axb");
    }

    #[test]
    fn test_escape_roundtrip() {
        let test_values = vec![
            "simple",
            "with space",
            "with;semicolon",
            "with\\backslash",
            "with\nnewline",
            "with\rcarriage",
            "complex; \\ \n \r all",
        ];

        for original in test_values {
            let escaped = escape(original);
            let unescaped = unescape(&escaped);
            assert_eq!(
                unescaped, original,
                "Roundtrip failed: '{}' -> '{}' -> '{}'",
                original, escaped, unescaped
            );
        }
    }

    #[test]
    fn test_parse_tag_string_basic() {
        let tags = parse_tag_string("time=2023-01-01T00:00:00Z;msgid=abc123");
        assert_eq!(tags["time"], "2023-01-01T00:00:00Z");
        assert_eq!(tags["msgid"], "abc123");
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_parse_tag_string_valueless() {
        let tags = parse_tag_string("bot;account=alice");
        assert_eq!(tags["bot"], "");
        assert_eq!(tags["account"], "alice");
    }

    #[test]
    fn test_parse_tag_string_value_keeps_equals() {
        // Only the first = separates key from value
        let tags = parse_tag_string("k=a=b=c");
        assert_eq!(tags["k"], "a=b=c");
    }

    #[test]
    fn test_parse_tag_string_duplicate_key_last_wins() {
        let tags = parse_tag_string("k=first;k=second");
        assert_eq!(tags["k"], "second");
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_parse_tag_string_no_validation() {
        // Empty entries and empty keys are accepted as-is
        let tags = parse_tag_string("a=1;;=x");
        assert_eq!(tags["a"], "1");
        assert_eq!(tags[""], "x");
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_parse_tag_string_empty() {
        let tags = parse_tag_string("");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[""], "");
    }

    #[test]
    fn test_parse_tag_string_escaped_value() {
        let tags = parse_tag_string("reason=away\\sfrom\\skeyboard");
        assert_eq!(tags["reason"], "away from keyboard");
    }
}
