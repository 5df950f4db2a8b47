use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use chrono::Duration;
use shared::{
    abstract_trait::{DynSessionStore, DynUserQueryRepository},
    domain::responses::Session,
    errors::ErrorResponse,
};

const SESSION_TTL_MINUTES: i64 = 30;

/// Hydrates the role-bearing session for the authenticated user: redis
/// first, the users table on a miss. Downstream handlers read the
/// `Session` extension for role checks.
pub async fn session_middleware(
    Extension(user_query): Extension<DynUserQueryRepository>,
    Extension(session_store): Extension<DynSessionStore>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let user_id = match req.extensions().get::<i32>() {
        Some(id) => *id,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    status: "fail".to_string(),
                    message: "Missing user_id in request context".to_string(),
                }),
            ));
        }
    };

    let key = format!("session:{user_id}");

    let session = match session_store.get_session(&key).await {
        Some(session) => session,
        None => {
            let user = match user_query.find_by_id(user_id).await {
                Ok(Some(user)) => user,
                Ok(None) => {
                    return Err((
                        StatusCode::UNAUTHORIZED,
                        Json(ErrorResponse {
                            status: "fail".to_string(),
                            message: "Account no longer exists".to_string(),
                        }),
                    ));
                }
                Err(_) => {
                    return Err((
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ErrorResponse {
                            status: "fail".to_string(),
                            message: "Failed to load user session".to_string(),
                        }),
                    ));
                }
            };

            let session = Session {
                user_id: user.user_id.to_string(),
                email: user.email,
                roles: vec![user.role],
            };

            session_store
                .create_session(&key, &session, Duration::minutes(SESSION_TTL_MINUTES))
                .await;

            session
        }
    };

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
