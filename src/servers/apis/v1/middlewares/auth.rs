//! Authentication middleware for the API.
//!
//! It uses the `Authorization` header to authenticate the client. The header
//! contains the token, alone or with the `Bearer` scheme:
//!
//! ```text
//! Authorization: MyAccessToken
//! Authorization: Bearer MyAccessToken
//! ```
//!
//! The token must be one of the `access_tokens` in the
//! [HTTP API configuration](vehicle_control_configuration::HttpApi).
//!
//! The configuration file contains a list of tokens:
//!
//! ```toml
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
//!
//! All the tokens have the same permissions. The label is only used to
//! identify the token.
use std::sync::Arc;

use axum::extract::{Request, State as Extract};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use vehicle_control_configuration::AccessTokens;

use crate::servers::apis::v1::responses::forbidden_response;

/// State of the authentication middleware.
#[derive(Clone, Debug)]
pub struct State {
    pub access_tokens: Arc<AccessTokens>,
}

/// Middleware for authentication using the `Authorization` header.
pub async fn auth(Extract(state): Extract<State>, request: Request, next: Next) -> Response {
    let Some(header) = request.headers().get(AUTHORIZATION) else {
        return AuthError::Unauthorized.into_response();
    };

    let Some(token) = header.to_str().ok().map(strip_scheme) else {
        return AuthError::TokenNotValid.into_response();
    };

    if !authenticate(token, &state.access_tokens) {
        return AuthError::TokenNotValid.into_response();
    }

    next.run(request).await
}

enum AuthError {
    /// Missing token for authentication.
    Unauthorized,
    /// Token was provided but it is not valid.
    TokenNotValid,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthorized => unauthorized_response(),
            AuthError::TokenNotValid => token_not_valid_response(),
        }
    }
}

fn strip_scheme(value: &str) -> &str {
    let value = value.trim();

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        _ => value,
    }
}

fn authenticate(token: &str, access_tokens: &AccessTokens) -> bool {
    !token.is_empty() && access_tokens.values().any(|configured| configured == token)
}

/// `403` error response returned when the token is missing.
#[must_use]
pub fn unauthorized_response() -> Response {
    forbidden_response("unauthorized")
}

/// `403` error response when the provided token is not valid.
#[must_use]
pub fn token_not_valid_response() -> Response {
    forbidden_response("token not valid")
}

#[cfg(test)]
mod tests {
    use vehicle_control_configuration::AccessTokens;

    use super::{authenticate, strip_scheme};

    fn tokens() -> AccessTokens {
        [("admin".to_string(), "MyAccessToken".to_string())].into_iter().collect()
    }

    #[test]
    fn it_should_accept_the_token_with_or_without_the_bearer_scheme() {
        assert_eq!(strip_scheme("MyAccessToken"), "MyAccessToken");
        assert_eq!(strip_scheme("Bearer MyAccessToken"), "MyAccessToken");
        assert_eq!(strip_scheme("bearer  MyAccessToken "), "MyAccessToken");
    }

    #[test]
    fn it_should_only_authenticate_configured_tokens() {
        assert!(authenticate("MyAccessToken", &tokens()));
        assert!(!authenticate("OtherToken", &tokens()));
    }

    #[test]
    fn it_should_never_authenticate_an_empty_token() {
        let tokens: AccessTokens = [("empty".to_string(), String::new())].into_iter().collect();

        assert!(!authenticate("", &tokens));
    }
}
