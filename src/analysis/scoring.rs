//! Health, security and performance scoring.
//!
//! Scores are clamped subtraction from 100; the inputs are counts, so the
//! result does not depend on the order in which findings were produced.

use std::collections::HashSet;

use super::types::{
    PerformanceSummary, SecurityAssessment, StepTiming, SuspiciousReason, SuspiciousRedirect,
};
use crate::config::{
    HEALTH_PENALTY_PER_ERROR_HOP, HEALTH_PENALTY_PER_ISSUE, HEALTH_PENALTY_PER_REDIRECT,
    HEALTH_PENALTY_PER_WARNING, SECURITY_PENALTY_PER_DOMAIN_CHANGE,
    SECURITY_PENALTY_PER_SUSPICIOUS, SUSPICIOUS_TLDS, URL_SHORTENERS,
};
use crate::models::Hop;

fn clamped_score(penalty: u64) -> u32 {
    100u64.saturating_sub(penalty) as u32
}

/// Redirect health score in `[0, 100]`.
pub fn health_score(
    total_redirects: usize,
    issue_count: usize,
    warning_count: usize,
    error_hop_count: usize,
) -> u32 {
    let penalty = total_redirects as u64 * u64::from(HEALTH_PENALTY_PER_REDIRECT)
        + issue_count as u64 * u64::from(HEALTH_PENALTY_PER_ISSUE)
        + warning_count as u64 * u64::from(HEALTH_PENALTY_PER_WARNING)
        + error_hop_count as u64 * u64::from(HEALTH_PENALTY_PER_ERROR_HOP);
    clamped_score(penalty)
}

/// Security score in `[0, 100]`.
pub fn security_score(domain_changes: usize, suspicious_count: usize) -> u32 {
    let penalty = domain_changes as u64 * u64::from(SECURITY_PENALTY_PER_DOMAIN_CHANGE)
        + suspicious_count as u64 * u64::from(SECURITY_PENALTY_PER_SUSPICIOUS);
    clamped_score(penalty)
}

/// Matches a hostname against the shortener and suspicious-TLD lists.
///
/// Shorteners match the exact host or any subdomain of it. The shortener list
/// is checked first and a host yields at most one reason.
pub fn suspicious_reason(host: &str) -> Option<SuspiciousReason> {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let is_shortener = URL_SHORTENERS
        .iter()
        .any(|&s| host == s || host.ends_with(&format!(".{s}")));
    if is_shortener {
        return Some(SuspiciousReason::UrlShortener);
    }
    if SUSPICIOUS_TLDS.iter().any(|tld| host.ends_with(tld)) {
        return Some(SuspiciousReason::SuspiciousTld);
    }
    None
}

/// Distinct hostnames in the chain minus one.
pub fn unique_domain_changes(hops: &[Hop]) -> usize {
    let hosts: HashSet<String> = hops.iter().filter_map(Hop::hostname).collect();
    hosts.len().saturating_sub(1)
}

/// Security view of the chain: HTTPS upgrade, domain spread and suspicious hops.
pub fn assess_security(hops: &[Hop], start_url: &str) -> SecurityAssessment {
    let https_upgrade = match (url::Url::parse(start_url), hops.last()) {
        (Ok(start), Some(last)) => {
            start.scheme() == "http"
                && url::Url::parse(&last.url)
                    .map(|u| u.scheme() == "https")
                    .unwrap_or(false)
        }
        _ => false,
    };

    let suspicious_redirects: Vec<SuspiciousRedirect> = hops
        .iter()
        .enumerate()
        .filter_map(|(index, hop)| {
            let reason = suspicious_reason(&hop.hostname()?)?;
            Some(SuspiciousRedirect {
                step: index + 1,
                reason,
                url: hop.url.clone(),
            })
        })
        .collect();

    let domain_changes = unique_domain_changes(hops);
    SecurityAssessment {
        https_upgrade,
        domain_changes,
        security_score: security_score(domain_changes, suspicious_redirects.len()),
        suspicious_redirects,
    }
}

/// Summarizes measured hop latencies.
///
/// Only hops with a recorded response time and no transport error count; ties
/// for slowest or fastest go to the earliest hop.
pub fn summarize_performance(hops: &[Hop]) -> PerformanceSummary {
    let timed: Vec<StepTiming> = hops
        .iter()
        .enumerate()
        .filter(|(_, hop)| !hop.is_error)
        .filter_map(|(index, hop)| {
            hop.response_time_ms.map(|time| StepTiming {
                step: index + 1,
                url: hop.url.clone(),
                time,
            })
        })
        .collect();

    if timed.is_empty() {
        return PerformanceSummary::default();
    }

    let total_time: f64 = timed.iter().map(|t| t.time).sum();
    let mut slowest = &timed[0];
    let mut fastest = &timed[0];
    for timing in &timed[1..] {
        if timing.time > slowest.time {
            slowest = timing;
        }
        if timing.time < fastest.time {
            fastest = timing;
        }
    }

    PerformanceSummary {
        total_time,
        average_response_time: total_time / timed.len() as f64,
        slowest_step: Some(slowest.clone()),
        fastest_step: Some(fastest.clone()),
    }
}
