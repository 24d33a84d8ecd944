//! Redirect chain analysis.
//!
//! Turns a recorded `RedirectChain` into a `ChainAnalysis`:
//! - per-hop redirect classification (`classify`)
//! - issue and warning detection (`classify`)
//! - recommendations (`recommendations`)
//! - health, security and performance scoring (`scoring`)
//!
//! Analysis does no I/O and holds no state, so analyzing the same chain twice
//! yields identical results.

mod classify;
mod recommendations;
mod scoring;
mod types;


pub use classify::{
    classify_hops, detect_issues, domain_changes, error_hop_count, has_duplicate_urls,
    has_https_upgrade_step, total_redirects, Findings,
};
pub use recommendations::generate_recommendations;
pub use scoring::{
    assess_security, health_score, security_score, summarize_performance, suspicious_reason,
    unique_domain_changes,
};
pub use types::{
    ChainAnalysis, DomainChange, PerformanceSummary, RedirectClassification, RedirectReport,
    RedirectType, SecurityAssessment, StepTiming, SuspiciousReason, SuspiciousRedirect,
};

use crate::models::{Hop, RedirectChain};

/// Classifies and scores a list of hops.
///
/// `start_url` is the reported final URL when the chain is empty and the
/// reference point for the HTTPS-upgrade check.
pub fn analyze_hops(hops: &[Hop], start_url: &str) -> ChainAnalysis {
    let total = total_redirects(hops);
    let final_url = hops
        .last()
        .map(|hop| hop.url.clone())
        .unwrap_or_else(|| start_url.to_string());

    let redirect_types = classify_hops(hops);
    let Findings { issues, warnings } = detect_issues(hops, &redirect_types);
    let recommendations =
        generate_recommendations(total, &redirect_types, issues.len(), warnings.len());
    let health_score = health_score(total, issues.len(), warnings.len(), error_hop_count(hops));

    ChainAnalysis {
        total_redirects: total,
        final_url,
        redirect_types,
        issues,
        warnings,
        recommendations,
        health_score,
        performance: summarize_performance(hops),
        security: assess_security(hops, start_url),
    }
}

/// Analyzes a resolved chain and wraps it into the response body.
pub fn build_report(start_url: &str, chain: RedirectChain) -> RedirectReport {
    let analysis = analyze_hops(&chain.hops, start_url);
    log::info!(
        "Analyzed {}: {} redirect(s), {} issue(s), {} warning(s), health {}, ended {:?}",
        start_url,
        analysis.total_redirects,
        analysis.issues.len(),
        analysis.warnings.len(),
        analysis.health_score,
        chain.termination
    );
    RedirectReport {
        success: true,
        start_url: start_url.to_string(),
        redirect_chain: chain.hops,
        termination: chain.termination,
        analysis,
    }
}
