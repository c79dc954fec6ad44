//! Request and response bodies for the Facebook routes.

use serde::{Deserialize, Serialize};

/// Response of `GET /fb/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub url: String,
    pub state: String,
}

/// `code` and `state` as sent by the provider redirect (query string) or
/// by a front-end (JSON body).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub state: Option<String>,
}

impl CallbackParams {
    /// The code, if present and not blank.
    pub fn code(&self) -> Option<&str> {
        self.code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_code_counts_as_missing() {
        let params = CallbackParams {
            code: Some("  ".to_string()),
            state: None,
        };
        assert_eq!(params.code(), None);
    }

    #[test]
    fn body_fields_are_optional() {
        let params: CallbackParams = serde_json::from_str(r#"{"code":"AQD"}"#).unwrap();
        assert_eq!(params.code(), Some("AQD"));
        assert_eq!(params.state, None);
    }
}
