//! Recommendation text for a classified chain.

use super::types::RedirectClassification;
use crate::config::MULTIPLE_REDIRECTS;

pub const NO_REDIRECTS: &str = "No redirects detected - direct access is optimal for performance";

/// Builds the recommendation list shown under a report.
///
/// A chain without redirects gets a single line; any other chain gets the
/// general advice plus follow-ups for its issues and warnings.
pub fn generate_recommendations(
    total_redirects: usize,
    classifications: &[RedirectClassification],
    issue_count: usize,
    warning_count: usize,
) -> Vec<String> {
    if total_redirects == 0 {
        return vec![NO_REDIRECTS.to_string()];
    }

    let mut recommendations = Vec::new();

    if total_redirects > MULTIPLE_REDIRECTS {
        recommendations.push("Reduce redirect chains to improve page load speed and SEO");
    }

    if classifications.iter().any(|c| !c.permanent) {
        recommendations.push("Use 301 redirects for permanent moves to preserve SEO value");
    }

    recommendations.push("Monitor redirect chains regularly to prevent performance issues");
    recommendations.push("Implement direct redirects when possible to reduce chain length");

    if issue_count > 0 {
        recommendations.push("Fix critical redirect issues to prevent user experience problems");
    }
    if warning_count > 0 {
        recommendations.push("Address redirect warnings to optimize SEO and performance");
    }

    recommendations.push("Ensure all redirects point to trusted domains");
    recommendations.push("Use HTTPS for all redirect destinations when possible");

    recommendations.into_iter().map(str::to_string).collect()
}
