//! Chain analysis result types.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::models::{Hop, Termination};

/// Redirect status codes with a fixed classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RedirectType {
    MultipleChoices,
    MovedPermanently,
    Found,
    SeeOther,
    NotModified,
    TemporaryRedirect,
    PermanentRedirect,
}

impl RedirectType {
    /// Looks up a status code; codes outside the table have no classification.
    pub fn from_status(code: u16) -> Option<Self> {
        match code {
            300 => Some(RedirectType::MultipleChoices),
            301 => Some(RedirectType::MovedPermanently),
            302 => Some(RedirectType::Found),
            303 => Some(RedirectType::SeeOther),
            304 => Some(RedirectType::NotModified),
            307 => Some(RedirectType::TemporaryRedirect),
            308 => Some(RedirectType::PermanentRedirect),
            _ => None,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            RedirectType::MultipleChoices => 300,
            RedirectType::MovedPermanently => 301,
            RedirectType::Found => 302,
            RedirectType::SeeOther => 303,
            RedirectType::NotModified => 304,
            RedirectType::TemporaryRedirect => 307,
            RedirectType::PermanentRedirect => 308,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RedirectType::MultipleChoices => "Multiple Choices",
            RedirectType::MovedPermanently => "Moved Permanently",
            RedirectType::Found => "Found (Temporary)",
            RedirectType::SeeOther => "See Other",
            RedirectType::NotModified => "Not Modified",
            RedirectType::TemporaryRedirect => "Temporary Redirect",
            RedirectType::PermanentRedirect => "Permanent Redirect",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RedirectType::MultipleChoices => "Multiple options available",
            RedirectType::MovedPermanently => "Resource permanently moved",
            RedirectType::Found => "Resource temporarily moved",
            RedirectType::SeeOther => "See other resource",
            RedirectType::NotModified => "Resource not modified",
            RedirectType::TemporaryRedirect => "Temporary redirect (method preserved)",
            RedirectType::PermanentRedirect => "Permanent redirect (method preserved)",
        }
    }

    /// 301 and 308.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            RedirectType::MovedPermanently | RedirectType::PermanentRedirect
        )
    }

    /// 302 and 307. 300, 303 and 304 are neither permanent nor counted as temporary
    /// when looking for mixed chains.
    pub fn is_temporary(&self) -> bool {
        matches!(self, RedirectType::Found | RedirectType::TemporaryRedirect)
    }
}

/// Per-hop classification of a redirect status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectClassification {
    /// 1-based position of the hop in the chain
    pub step: usize,
    #[serde(rename = "type")]
    pub redirect_type: String,
    pub description: String,
    pub permanent: bool,
    pub status_code: u16,
}

/// Hostname change between two adjacent hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainChange {
    pub from: String,
    pub to: String,
    /// 1-based step of the hop that landed on `to`
    pub step: usize,
}

/// Timing of one hop within the performance summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepTiming {
    pub step: usize,
    pub url: String,
    /// Milliseconds
    pub time: f64,
}

/// Measured latency summary over the hops that received a response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub total_time: f64,
    pub average_response_time: f64,
    pub slowest_step: Option<StepTiming>,
    pub fastest_step: Option<StepTiming>,
}

/// Why a hop was flagged as suspicious.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspiciousReason {
    UrlShortener,
    SuspiciousTld,
}

impl SuspiciousReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuspiciousReason::UrlShortener => "URL shortener detected",
            SuspiciousReason::SuspiciousTld => "Suspicious TLD detected",
        }
    }
}

impl Serialize for SuspiciousReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspiciousRedirect {
    pub step: usize,
    pub reason: SuspiciousReason,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAssessment {
    /// Started on http:// and ended on https://
    pub https_upgrade: bool,
    /// Distinct hostnames in the chain minus one
    pub domain_changes: usize,
    pub suspicious_redirects: Vec<SuspiciousRedirect>,
    pub security_score: u32,
}

/// The classified, scored view of a redirect chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainAnalysis {
    pub total_redirects: usize,
    pub final_url: String,
    pub redirect_types: Vec<RedirectClassification>,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub health_score: u32,
    pub performance: PerformanceSummary,
    pub security: SecurityAssessment,
}

/// Successful response body of the redirect checker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectReport {
    pub success: bool,
    /// The normalized input as given. The first hop URL is its parsed form,
    /// which may differ (for example a trailing `/` on a bare host).
    pub start_url: String,
    pub redirect_chain: Vec<Hop>,
    pub termination: Termination,
    #[serde(flatten)]
    pub analysis: ChainAnalysis,
}
