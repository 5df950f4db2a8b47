use crate::middleware::{
    jwt::auth_middleware, session::session_middleware, validate::SimpleValidatedJson,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    domain::requests::{AddProductKeysRequest, FindAllKeys},
    domain::responses::{ApiResponse, ApiResponsePagination, KeyResponse, Session},
    errors::HttpError,
    service::KeyService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

fn require_admin(session: &Session) -> Result<(), HttpError> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(HttpError::Forbidden(
            "Access denied. Required role: admin".to_string(),
        ))
    }
}

#[utoipa::path(
    get,
    path = "/api/keys",
    tag = "Key",
    security(("bearer_auth" = [])),
    params(FindAllKeys),
    responses(
        (status = 200, description = "Key inventory filtered by product, assignment and search text", body = ApiResponsePagination<Vec<KeyResponse>>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_keys(
    Extension(service): Extension<KeyService>,
    Extension(session): Extension<Session>,
    Query(params): Query<FindAllKeys>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.query.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/keys",
    tag = "Key",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    request_body = AddProductKeysRequest,
    responses(
        (status = 200, description = "Keys added to the product pool", body = ApiResponse<Vec<KeyResponse>>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Duplicate key value")
    )
)]
pub async fn add_product_keys_handler(
    Extension(service): Extension<KeyService>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddProductKeysRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.add_keys(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/keys/{id}/revoke",
    tag = "Key",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Key id")),
    responses(
        (status = 200, description = "Key revoked", body = ApiResponse<KeyResponse>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Key not found or already revoked")
    )
)]
pub async fn revoke_key_handler(
    Extension(service): Extension<KeyService>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.revoke_key(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn key_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/keys", get(get_keys))
        .route("/api/products/{id}/keys", post(add_product_keys_handler))
        .route("/api/keys/{id}/revoke", put(revoke_key_handler))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.key_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
