use crate::middleware::{
    jwt::auth_middleware, session::session_middleware, validate::SimpleValidatedJson,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    domain::responses::{
        ApiResponse, ApiResponsePagination, ProductResponse, ProductResponseDeleteAt, Session,
    },
    errors::HttpError,
    service::ProductService,
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
    path = "/api/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "List of products", body = ApiResponsePagination<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(service): Extension<ProductService>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_active(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/trashed",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(FindAllProducts),
    responses(
        (status = 200, description = "List of soft-deleted products", body = ApiResponsePagination<Vec<ProductResponseDeleteAt>>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_trashed_products(
    Extension(service): Extension<ProductService>,
    Extension(session): Extension<Session>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.query.find_trashed(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn create_product(
    Extension(service): Extension<ProductService>,
    Extension(session): Extension<Session>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.create_product(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(service): Extension<ProductService>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.update_product(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product moved to trash", body = ApiResponse<ProductResponseDeleteAt>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn trash_product_handler(
    Extension(service): Extension<ProductService>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.trash_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/restore/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product restored", body = ApiResponse<ProductResponse>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Product not trashed")
    )
)]
pub async fn restore_product_handler(
    Extension(service): Extension<ProductService>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.restore_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/delete/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product permanently deleted", body = ApiResponse<bool>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Product not trashed")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<ProductService>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.delete_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    // Public and admin method routers share paths (GET vs PUT/DELETE on
    // /api/products/{id}), so every layer here must be a route_layer:
    // Router::layer would erase the method routers and break the merge.
    let public_routes = OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .route_layer(Extension(app_state.di_container.product_service.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/products/trashed", get(get_trashed_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(trash_product_handler))
        .route("/api/products/restore/{id}", put(restore_product_handler))
        .route("/api/products/delete/{id}", delete(delete_product))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .route_layer(Extension(app_state.di_container.product_service.clone()))
        .route_layer(Extension(app_state.di_container.user_query.clone()))
        .route_layer(Extension(app_state.session.clone()))
        .route_layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(admin_routes)
}
