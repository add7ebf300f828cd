//! Tag providers targeted by title and description

use std::fmt;
use std::str::FromStr;

/// Namespaces that `set_title` and `set_description` can write into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Generic `<title>` / `<meta name=...>` tags
    Meta,
    /// Open Graph `og:*`
    Og,
    /// Twitter card `twitter:*`
    Twitter,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Meta, Provider::Og, Provider::Twitter];

    /// Expand an empty selection to every provider
    pub fn resolve(selected: &[Provider]) -> &[Provider] {
        if selected.is_empty() {
            &Self::ALL
        } else {
            selected
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Meta => "meta",
            Provider::Og => "og",
            Provider::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meta" => Ok(Provider::Meta),
            "og" | "opengraph" => Ok(Provider::Og),
            "twitter" => Ok(Provider::Twitter),
            _ => Err(s.to_string()),
        }
    }
}
