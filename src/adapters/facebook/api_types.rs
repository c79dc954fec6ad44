//! Graph API wire types.

use serde::Deserialize;

/// Response of the OAuth token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// `{"error": {...}}` envelope returned by the Graph API.
#[derive(Debug, Default, Deserialize)]
pub struct GraphErrorEnvelope {
    #[serde(default)]
    pub error: Option<GraphError>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GraphError {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl GraphErrorEnvelope {
    /// Parse a failed response body, keeping the raw text when it is not
    /// a Graph error.
    pub fn describe(status: u16, body: &str) -> String {
        let parsed: GraphErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
        match parsed.error {
            Some(GraphError {
                message: Some(message),
                kind,
                ..
            }) => match kind {
                Some(kind) => format!("{} ({}, status {})", message, kind, status),
                None => format!("{} (status {})", message, status),
            },
            _ if body.trim().is_empty() => format!("status {}", status),
            _ => format!("status {}: {}", status, body.trim()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_graph_error() {
        let body = r#"{"error":{"message":"This authorization code has expired.","type":"OAuthException","code":100,"fbtrace_id":"AbC"}}"#;
        assert_eq!(
            GraphErrorEnvelope::describe(400, body),
            "This authorization code has expired. (OAuthException, status 400)"
        );
    }

    #[test]
    fn describes_plain_body() {
        assert_eq!(GraphErrorEnvelope::describe(502, ""), "status 502");
        assert_eq!(
            GraphErrorEnvelope::describe(502, "Bad Gateway\n"),
            "status 502: Bad Gateway"
        );
    }
}
