//! Message serialization.

use crate::error::{ProtocolError, Result};
use crate::source::host::validate_host;

use super::tags::escape;
use super::types::Message;

impl Message {
    /// Serialize this message to a CRLF-terminated wire line.
    ///
    /// Tags are emitted only when present and non-empty, each entry as
    /// `escape(key)=escape(value)` with the value segment omitted when the
    /// value is empty. A present source host is re-validated before the
    /// line is produced. The last parameter always carries a leading `:`,
    /// whether or not it contains a space; the boundary is decided by
    /// position, so duplicate parameter values cannot confuse it.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::InvalidHost`] if the source host fails the host
    /// grammar, [`ProtocolError::InvalidParam`] if a non-final parameter
    /// contains a space.
    ///
    /// # Example
    ///
    /// ```
    /// use ircwire::Message;
    ///
    /// assert_eq!(Message::new("PING").to_line().unwrap(), "PING\r\n");
    /// ```
    pub fn to_line(&self) -> Result<String> {
        let mut line = String::new();

        if let Some(ref tags) = self.tags {
            if !tags.is_empty() {
                line.push('@');
                for (i, (key, value)) in tags.iter().enumerate() {
                    if i > 0 {
                        line.push(';');
                    }
                    line.push_str(&escape(key));
                    if !value.is_empty() {
                        line.push('=');
                        line.push_str(&escape(value));
                    }
                }
                line.push(' ');
            }
        }

        if let Some(ref source) = self.source {
            if let Some(ref host) = source.host {
                validate_host(host)?;
            }
            line.push(':');
            line.push_str(&source.to_string());
            line.push(' ');
        }

        line.push_str(&self.verb);

        if let Some(ref params) = self.params {
            if !params.is_empty() {
                line.push(' ');
                let last = params.len() - 1;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        line.push(' ');
                    }
                    if i == last {
                        line.push(':');
                    } else if param.contains(' ') {
                        return Err(ProtocolError::InvalidParam(param.clone()));
                    }
                    line.push_str(param);
                }
            }
        }

        line.push_str("\r\n");
        Ok(line)
    }
}
