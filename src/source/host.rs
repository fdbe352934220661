//! Host grammar validation.
//!
//! A host is accepted iff it is the literal `localhost`, a dotted quad, or
//! a dotted domain name. Matching is ASCII-case-insensitive.
//!
//! The dotted-quad grammar is intentionally lenient, inherited from the
//! original wire grammar: a three-digit group is accepted whenever it
//! starts with `1` or `2`, with no upper bound check against 255 (`299`
//! passes, `300` does not). The first group may not be `0`; later groups
//! may. Preserved as-is, since tightening it changes which hosts are
//! accepted.

use crate::error::{ProtocolError, Result};

/// Check a host string against the host grammar.
pub fn is_valid_host(host: &str) -> bool {
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }

    let groups: Vec<&str> = host.split('.').collect();

    // Exactly four all-digit groups are judged by the octet grammar alone;
    // they never fall through to the domain rule.
    if groups.len() == 4
        && groups
            .iter()
            .all(|g| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit()))
    {
        return is_valid_octet(groups[0], true)
            && groups[1..].iter().all(|g| is_valid_octet(g, false));
    }

    groups.len() >= 2 && groups.iter().all(|label| is_valid_label(label))
}

/// Check a host string, surfacing [`ProtocolError::InvalidHost`] on failure.
pub(crate) fn validate_host(host: &str) -> Result<()> {
    if is_valid_host(host) {
        Ok(())
    } else {
        Err(ProtocolError::InvalidHost(host.to_string()))
    }
}

/// One dotted-quad group. `first` selects the leading-group grammar, which
/// rejects a bare `0`.
fn is_valid_octet(group: &str, first: bool) -> bool {
    match group.as_bytes() {
        [d] => {
            if first {
                (b'1'..=b'9').contains(d)
            } else {
                d.is_ascii_digit()
            }
        }
        [a, _] => (b'1'..=b'9').contains(a),
        [a, _, _] => *a == b'1' || *a == b'2',
        _ => false,
    }
}

/// One domain label. Labels may not be empty, may not start or end with
/// `_` or `-`, and may not contain `_` anywhere; interior hyphens are fine.
fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.contains('_') {
        return false;
    }
    !label.starts_with('-') && !label.ends_with('-')
}
