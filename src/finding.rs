use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single occurrence of a secret pattern located in captured traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Deterministic composite id: `{request_id}-{pattern_id}-{offset}`.
    /// Recomputing the same scan always yields the same id.
    pub id: String,
    /// Id of the pattern that matched (e.g., "stripe_live_key").
    pub pattern_id: String,
    /// Human-readable pattern name.
    pub pattern_name: String,
    /// Severity level, copied from the pattern at scan time.
    pub severity: Severity,
    /// Taxonomy bucket, copied from the pattern at scan time.
    pub category: Category,
    /// The matched substring, truncated to at most 100 chars (97 + "...")
    /// so PEM blocks and other long secrets don't flood the output.
    pub matched_text: String,
    /// Plain-text window around the match (30 chars each side, newlines
    /// collapsed to spaces, trimmed).
    pub context: String,
    /// Which part of the HTTP transaction the blob came from.
    pub location: Location,
    /// Id of the request this finding was extracted from.
    pub request_id: String,
    /// Host the request was sent to.
    pub host: String,
    /// Capture timestamp of the request.
    pub timestamp: DateTime<Utc>,
}

/// Severity level. Declared in ascending order so the derived `Ord`
/// ranks `Critical` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" | "crit" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Taxonomy bucket for grouping findings by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ApiKey,
    Password,
    Token,
    Certificate,
    Credential,
    Config,
    Cloud,
    Database,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey => write!(f, "api_key"),
            Self::Password => write!(f, "password"),
            Self::Token => write!(f, "token"),
            Self::Certificate => write!(f, "certificate"),
            Self::Credential => write!(f, "credential"),
            Self::Config => write!(f, "config"),
            Self::Cloud => write!(f, "cloud"),
            Self::Database => write!(f, "database"),
        }
    }
}

/// Which part of an HTTP transaction a blob came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Headers,
    Body,
    Path,
    ResponseHeaders,
    ResponseBody,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Headers => write!(f, "headers"),
            Self::Body => write!(f, "body"),
            Self::Path => write!(f, "path"),
            Self::ResponseHeaders => write!(f, "response_headers"),
            Self::ResponseBody => write!(f, "response_body"),
        }
    }
}

/// Finding totals per severity level. All four levels are always present
/// (zeros included) so dashboards render stable rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_critical_highest() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::ApiKey).unwrap(),
            "\"api_key\""
        );
    }

    #[test]
    fn location_display_matches_serde() {
        for loc in [
            Location::Headers,
            Location::Body,
            Location::Path,
            Location::ResponseHeaders,
            Location::ResponseBody,
        ] {
            let json = serde_json::to_string(&loc).unwrap();
            assert_eq!(json, format!("\"{}\"", loc));
        }
    }

    #[test]
    fn from_str_lenient_round_trips() {
        assert_eq!(Severity::from_str_lenient("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::from_str_lenient("med"), Some(Severity::Medium));
        assert_eq!(Severity::from_str_lenient("bogus"), None);
    }
}
