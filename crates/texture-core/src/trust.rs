//! Allowlist of texture libraries whose results are shown.

/// Domains of known free/CC0 texture libraries, in match priority order.
pub const TRUSTED_SOURCES: &[&str] = &[
    "ambientcg.com",
    "polyhaven.com",
    "textures.com",
    "cc0textures.com",
    "sharetextures.com",
    "cgbookcase.com",
    "3dtextures.me",
    "freepbr.com",
];

/// Substring allowlist over url strings. Case-sensitive, no subdomain logic.
#[derive(Debug, Clone)]
pub struct TrustPolicy {
    domains: Vec<String>,
}

impl Default for TrustPolicy {
    fn default() -> Self {
        Self::with_domains(TRUSTED_SOURCES.iter().copied())
    }
}

impl TrustPolicy {
    pub fn with_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(Into::<String>::into)
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    /// True iff `url` contains one of the allowlisted domains.
    pub fn is_trusted(&self, url: &str) -> bool {
        self.matching_domain(url).is_some()
    }

    /// First allowlisted domain contained in `url`.
    pub fn matching_domain(&self, url: &str) -> Option<&str> {
        self.domains.iter().map(String::as_str).find(|d| url.contains(d))
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}
