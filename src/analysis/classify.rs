//! Redirect classification and issue detection.
//!
//! Everything here is a pure function of the recorded hops.

use std::collections::HashSet;

use super::types::{DomainChange, RedirectClassification, RedirectType};
use crate::config::{EXCESSIVE_REDIRECTS, MULTIPLE_REDIRECTS};
use crate::models::Hop;

/// Issue and warning findings, kept in separate lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

/// Number of redirects taken: every hop but the last.
pub fn total_redirects(hops: &[Hop]) -> usize {
    hops.len().saturating_sub(1)
}

/// Classifies every hop whose status is in the redirect table.
pub fn classify_hops(hops: &[Hop]) -> Vec<RedirectClassification> {
    hops.iter()
        .enumerate()
        .filter_map(|(index, hop)| {
            let code = hop.status_code?;
            let kind = RedirectType::from_status(code)?;
            Some(RedirectClassification {
                step: index + 1,
                redirect_type: kind.label().to_string(),
                description: kind.description().to_string(),
                permanent: kind.is_permanent(),
                status_code: kind.status_code(),
            })
        })
        .collect()
}

/// Adjacent hop pairs whose hostnames differ. Unparseable URLs are skipped.
pub fn domain_changes(hops: &[Hop]) -> Vec<DomainChange> {
    hops.windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let from = pair[0].hostname()?;
            let to = pair[1].hostname()?;
            (from != to).then(|| DomainChange {
                from,
                to,
                step: index + 2,
            })
        })
        .collect()
}

/// Whether any hop moves from an http:// URL to an https:// URL.
pub fn has_https_upgrade_step(hops: &[Hop]) -> bool {
    hops.windows(2)
        .any(|pair| pair[0].url.starts_with("http://") && pair[1].url.starts_with("https://"))
}

/// Whether the same URL appears more than once in the chain.
pub fn has_duplicate_urls(hops: &[Hop]) -> bool {
    let mut seen = HashSet::new();
    hops.iter()
        .filter(|hop| !hop.url.is_empty())
        .any(|hop| !seen.insert(hop.url.as_str()))
}

pub fn error_hop_count(hops: &[Hop]) -> usize {
    hops.iter().filter(|hop| hop.has_error()).count()
}

/// Detects chain issues (hard failures) and warnings.
///
/// Each check appends independently; the duplicate-URL check is separate from
/// the resolver's own hop limit and both may fire for the same chain.
pub fn detect_issues(hops: &[Hop], classifications: &[RedirectClassification]) -> Findings {
    let mut findings = Findings::default();
    let total = total_redirects(hops);

    if total > EXCESSIVE_REDIRECTS {
        findings.issues.push(format!(
            "Excessive redirects detected ({total}). This can hurt SEO and performance."
        ));
    } else if total > MULTIPLE_REDIRECTS {
        findings.warnings.push(format!(
            "Multiple redirects detected ({total}). Consider reducing redirect chains."
        ));
    }

    let kinds: Vec<RedirectType> = classifications
        .iter()
        .filter_map(|c| RedirectType::from_status(c.status_code))
        .collect();
    let has_temporary = kinds.iter().any(RedirectType::is_temporary);
    let has_permanent = kinds.iter().any(RedirectType::is_permanent);
    if has_temporary && has_permanent {
        findings
            .warnings
            .push("Mixed permanent and temporary redirects detected".to_string());
    }

    if has_https_upgrade_step(hops) {
        findings
            .warnings
            .push("HTTP to HTTPS redirect detected - ensure this is intentional".to_string());
    }

    let changes = domain_changes(hops);
    if !changes.is_empty() {
        let pairs: Vec<String> = changes
            .iter()
            .map(|c| format!("{} \u{2192} {}", c.from, c.to))
            .collect();
        findings
            .warnings
            .push(format!("Domain changes detected: {}", pairs.join(", ")));
    }

    if has_duplicate_urls(hops) {
        findings
            .issues
            .push("Potential redirect loop detected".to_string());
    }

    if error_hop_count(hops) > 0 {
        findings
            .issues
            .push("Errors encountered in redirect chain".to_string());
    }

    findings
}
