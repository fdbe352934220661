use std::fmt;

use super::types::Source;

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nick)?;
        if let Some(ref user) = self.user {
            write!(f, "!{}", user)?;
        }
        if let Some(ref host) = self.host {
            write!(f, "@{}", host)?;
        }
        Ok(())
    }
}
