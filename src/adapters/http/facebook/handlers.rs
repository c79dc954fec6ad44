//! HTTP handlers for Facebook login endpoints.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{BeginLoginHandler, CompleteLoginCommand, CompleteLoginHandler};
use crate::application::CallbackForwarder;
use crate::domain::foundation::DomainError;
use crate::ports::SocialLogin;

use super::super::error::ApiError;
use super::dto::{CallbackParams, LoginResponse};

/// Shared state for the Facebook routes.
///
/// `social_login` is `None` when the OAuth app is not configured.
#[derive(Clone)]
pub struct SocialAppState {
    pub social_login: Option<Arc<dyn SocialLogin>>,
    pub forwarder: Arc<CallbackForwarder>,
    pub callback_url: Option<String>,
}

impl SocialAppState {
    fn social_login(&self) -> Result<Arc<dyn SocialLogin>, ApiError> {
        self.social_login
            .clone()
            .ok_or_else(|| DomainError::missing_dependency("facebook config not found").into())
    }

    pub fn begin_login_handler(&self) -> Result<BeginLoginHandler, ApiError> {
        Ok(BeginLoginHandler::new(self.social_login()?))
    }

    pub fn complete_login_handler(&self) -> Result<CompleteLoginHandler, ApiError> {
        Ok(CompleteLoginHandler::new(
            self.social_login()?,
            self.forwarder.clone(),
            self.callback_url.clone(),
        ))
    }
}

/// GET /fb/login - Authorization URL and the state embedded in it
pub async fn login(State(state): State<SocialAppState>) -> Result<impl IntoResponse, ApiError> {
    let redirect = state.begin_login_handler()?.handle()?;
    Ok(Json(LoginResponse {
        url: redirect.url,
        state: redirect.state.into_inner(),
    }))
}

/// GET|POST /fb/callback - Finish the login
///
/// The query string wins; a JSON body is only read when the query carries
/// no code.
pub async fn callback(
    State(state): State<SocialAppState>,
    query: Option<Query<CallbackParams>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let params = resolve_params(query.map(|Query(q)| q).unwrap_or_default(), &body)?;
    let code = params
        .code()
        .ok_or_else(|| DomainError::validation("code", "code is required"))?
        .to_string();

    let login = state
        .complete_login_handler()?
        .handle(CompleteLoginCommand {
            code,
            state: params.state,
        })
        .await?;
    Ok(Json(login))
}

fn resolve_params(query: CallbackParams, body: &[u8]) -> Result<CallbackParams, ApiError> {
    if query.code().is_some() || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(query);
    }
    serde_json::from_slice(body)
        .map_err(|e| DomainError::validation("body", format!("invalid callback body: {}", e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_code_wins_over_body() {
        let query = CallbackParams {
            code: Some("from-query".to_string()),
            state: Some("s1".to_string()),
        };
        let params = resolve_params(query, br#"{"code":"from-body"}"#).unwrap();
        assert_eq!(params.code(), Some("from-query"));
    }

    #[test]
    fn body_used_without_query_code() {
        let params = resolve_params(
            CallbackParams::default(),
            br#"{"code":"from-body","state":"s2"}"#,
        )
        .unwrap();
        assert_eq!(params.code(), Some("from-body"));
        assert_eq!(params.state.as_deref(), Some("s2"));
    }

    #[test]
    fn garbage_body_is_validation_error() {
        let err = resolve_params(CallbackParams::default(), b"code=abc").unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
