use serde::{Deserialize, Serialize};
use std::fmt;

/// Best-effort identity of a website
///
/// Every field is optional; a field that could not be resolved is the empty
/// string. An `Info` is produced once per successful resolution and handed
/// back by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub owner: String,       // Name of the organization behind the site
    pub homepage: String,    // Canonical absolute URL of the site
    pub description: String, // Short summary of the site or its owner
}

impl Info {
    /// Returns true when no field has been resolved
    pub fn is_empty(&self) -> bool {
        self.owner.is_empty() && self.homepage.is_empty() && self.description.is_empty()
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      Owner: {}", self.owner)?;
        writeln!(f, "   Homepage: {}", self.homepage)?;
        write!(f, "Description: {}", self.description)
    }
}
