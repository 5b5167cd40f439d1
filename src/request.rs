use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A captured HTTP request, supplied by the traffic-capture collaborator.
///
/// The scanner treats every field purely as a text source and never
/// mutates a request. Headers are kept as a vec of pairs so insertion
/// order survives serialization round trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub host: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub response: Option<ResponseData>,
}

/// The response half of a captured transaction, when one was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl NetworkRequest {
    /// Serialize headers to scannable text: `key: value` lines joined by
    /// newline, preserving insertion order.
    pub fn headers_text(&self) -> String {
        join_headers(&self.headers)
    }
}

impl ResponseData {
    pub fn headers_text(&self) -> String {
        join_headers(&self.headers)
    }
}

fn join_headers(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Provenance triple attached to every finding, linking it back to the
/// request it was extracted from.
#[derive(Debug, Clone, Copy)]
pub struct Provenance<'a> {
    pub request_id: &'a str,
    pub host: &'a str,
    pub timestamp: DateTime<Utc>,
}

impl<'a> Provenance<'a> {
    pub fn of(request: &'a NetworkRequest) -> Self {
        Self {
            request_id: &request.id,
            host: &request.host,
            timestamp: request.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn headers_text_preserves_insertion_order() {
        let request = NetworkRequest {
            id: "req-1".into(),
            timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            method: "GET".into(),
            host: "api.example.com".into(),
            path: "/".into(),
            headers: vec![
                ("Host".into(), "api.example.com".into()),
                ("Accept".into(), "*/*".into()),
                ("X-Custom".into(), "1".into()),
            ],
            body: String::new(),
            response: None,
        };
        assert_eq!(
            request.headers_text(),
            "Host: api.example.com\nAccept: */*\nX-Custom: 1"
        );
    }

    #[test]
    fn empty_headers_serialize_to_empty_string() {
        let response = ResponseData {
            status_code: 200,
            headers: vec![],
            body: String::new(),
        };
        assert_eq!(response.headers_text(), "");
    }
}
