//! Government vs. journal classification of source hostnames.
//!
//! Both paper selection and the research narrative label documents through
//! [`SourceKind::of`], so the two can never disagree.

use crate::keywords::AUTHORITY_DOMAIN_TOKENS;
use crate::types::SourceDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Hostname contains an authority-domain token
    Government,
    /// Everything else
    Journal,
}

impl SourceKind {
    pub fn of_hostname(hostname: &str) -> Self {
        let hostname = hostname.to_lowercase();
        if AUTHORITY_DOMAIN_TOKENS
            .iter()
            .any(|token| hostname.contains(token))
        {
            SourceKind::Government
        } else {
            SourceKind::Journal
        }
    }

    pub fn of(document: &SourceDocument) -> Self {
        Self::of_hostname(&document.hostname)
    }

    pub fn is_government(&self) -> bool {
        matches!(self, SourceKind::Government)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Government => "Government Research",
            SourceKind::Journal => "Peer-Reviewed Journal",
        }
    }
}

/// Government share of `documents` as `(count, rounded percentage)`.
///
/// An empty slice yields `(0, 0)`.
pub fn government_share(documents: &[SourceDocument]) -> (usize, u32) {
    if documents.is_empty() {
        return (0, 0);
    }
    let count = documents
        .iter()
        .filter(|doc| SourceKind::of(doc).is_government())
        .count();
    let percentage = (count as f64 / documents.len() as f64 * 100.0).round() as u32;
    (count, percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(host: &str) -> SourceDocument {
        SourceDocument::new("t", format!("https://{}/", host), "s", 1)
    }

    #[test]
    fn test_authority_hosts() {
        for host in ["ams.usda.gov", "fao.org", "ncbi.nlm.nih.gov", "icar.org.in", "ec.europa.eu", "cdc.gov"] {
            assert_eq!(SourceKind::of_hostname(host), SourceKind::Government, "{}", host);
        }
    }

    #[test]
    fn test_journal_hosts() {
        for host in ["nature.com", "tandfonline.com", "sciencedirect.com", "journals.plos.org"] {
            assert_eq!(SourceKind::of_hostname(host), SourceKind::Journal, "{}", host);
        }
    }

    #[test]
    fn test_government_share_rounds() {
        let docs = vec![doc("usda.gov"), doc("cdc.gov"), doc("nature.com")];
        assert_eq!(government_share(&docs), (2, 67));
        assert_eq!(government_share(&[]), (0, 0));
    }
}
