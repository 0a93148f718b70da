//! Identity middleware: resolves the caller's bearer token to an identity.
//!
//! This layer never rejects a request. A missing header or a token the
//! provider refuses both attach [`Identity::Anonymous`]; handlers decide
//! what anonymity means for the route.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::domain::identity::Identity;
use crate::state::AppState;

/// Attaches an [`Identity`] to the request extensions.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <id token>
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::put, middleware};
/// use crate::api::middleware::identity;
///
/// let admin = Router::new()
///     .route("/users/admin", put(grant_admin_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), identity::layer));
/// ```
pub async fn layer(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let identity = match bearer_token(req.headers()) {
        Some(token) => match state.identity_verifier.verify(token).await {
            Ok(verified) => Identity::Verified {
                email: verified.email,
            },
            Err(e) => {
                tracing::debug!(error = %e, "token verification failed, continuing as anonymous");
                Identity::Anonymous
            }
        },
        None => Identity::Anonymous,
    };

    req.extensions_mut().insert(identity);

    next.run(req).await
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
