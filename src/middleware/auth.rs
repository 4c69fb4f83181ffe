use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{validate_jwt, Claims};

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { user_id: claims.sub }
    }
}

/// "Current user id or absent", injected into every request.
///
/// Handlers decide what an anonymous caller gets; the middleware never rejects.
#[derive(Clone, Debug, Default)]
pub struct CurrentUser(pub Option<AuthUser>);

impl CurrentUser {
    pub fn user(&self) -> Option<&AuthUser> {
        self.0.as_ref()
    }
}

/// Resolves the bearer token (if any) into a [`CurrentUser`] extension
pub async fn identify_caller_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    let caller = match extract_jwt_from_headers(&headers) {
        Ok(Some(token)) => match validate_jwt(&token) {
            Ok(claims) => Some(AuthUser::from(claims)),
            Err(e) => {
                tracing::debug!("Ignoring bearer token: {}", e);
                None
            }
        },
        Ok(None) => None,
        Err(msg) => {
            tracing::debug!("Ignoring Authorization header: {}", msg);
            None
        }
    };

    request.extensions_mut().insert(CurrentUser(caller));

    next.run(request).await
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<Option<String>, String> {
    let Some(auth_header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(Some(token.trim().to_string()))
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_missing_header_is_anonymous() {
        assert_eq!(extract_jwt_from_headers(&HeaderMap::new()), Ok(None));
    }

    #[test]
    fn test_bearer_token_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_jwt_from_headers(&headers), Ok(Some("abc.def.ghi".to_string())));
    }

    #[test]
    fn test_non_bearer_scheme_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        assert!(extract_jwt_from_headers(&headers).is_err());
    }
}
