use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

/// Header carrying the session token
pub const API_TOKEN_HEADER: &str = "X-API-TOKEN";

/// Extension type holding the user resolved from the request token
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves the `X-API-TOKEN` header to a user and adds it to
/// request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Owned copy: the request body is not Sync, so no borrow may cross an await.
    let token = req
        .headers()
        .get(API_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let user = match state.auth_service.authenticate(token.as_deref()).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(
                method = %req.method(),
                uri = %req.uri(),
                error = %e,
                "Token rejected"
            );
            return Err(ApiError::from(e).into_response());
        }
    };

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
