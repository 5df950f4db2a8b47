use crate::middleware::{
    jwt::auth_middleware, session::session_middleware, validate::SimpleValidatedJson,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use shared::{
    domain::requests::{
        AssignKeysRequest, CreateOrderRequest, FindAllOrders, SubmitPaymentRequest,
    },
    domain::responses::{ApiResponse, ApiResponsePagination, OrderResponse, Session},
    errors::HttpError,
    service::OrderService,
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
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(FindAllOrders),
    responses(
        (status = 200, description = "Admins get the paginated full listing, customers their own orders", body = ApiResponsePagination<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<OrderService>,
    Extension(user_id): Extension<i32>,
    Extension(session): Extension<Session>,
    Query(params): Query<FindAllOrders>,
) -> Result<Response, HttpError> {
    if session.is_admin() {
        let response = service.query.find_all(&params).await?;
        return Ok((StatusCode::OK, Json(response)).into_response());
    }

    let response = service.query.find_for_user(user_id).await?;
    Ok((StatusCode::OK, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order detail", body = ApiResponse<OrderResponse>),
        (status = 403, description = "Not the order owner"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Extension(service): Extension<OrderService>,
    Extension(user_id): Extension<i32>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .query
        .find_by_id(id, user_id, session.is_admin())
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Insufficient stock")
    )
)]
pub async fn create_order(
    Extension(service): Extension<OrderService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_order(user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/payment",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order id")),
    request_body = SubmitPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded, order awaiting confirmation", body = ApiResponse<OrderResponse>),
        (status = 403, description = "Not the order owner"),
        (status = 409, description = "Order is not pending")
    )
)]
pub async fn submit_payment_handler(
    Extension(service): Extension<OrderService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<SubmitPaymentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.submit_payment(id, user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/confirm-payment",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Payment confirmed, keys auto-assigned when available", body = ApiResponse<OrderResponse>),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Order is not awaiting confirmation")
    )
)]
pub async fn confirm_payment_handler(
    Extension(service): Extension<OrderService>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.confirm_payment(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/mark-paid",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order marked as paid", body = ApiResponse<OrderResponse>),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Order is already paid")
    )
)]
pub async fn mark_paid_handler(
    Extension(service): Extension<OrderService>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.mark_paid(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/assign-keys",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order id")),
    request_body = AssignKeysRequest,
    responses(
        (status = 200, description = "Keys assigned to the order", body = ApiResponse<OrderResponse>),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Order is not paid or the key pool is short")
    )
)]
pub async fn assign_keys_handler(
    Extension(service): Extension<OrderService>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<AssignKeysRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_admin(&session)?;

    let response = service.command.assign_keys(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}/payment", post(submit_payment_handler))
        .route(
            "/api/orders/{id}/confirm-payment",
            post(confirm_payment_handler),
        )
        .route("/api/orders/{id}/mark-paid", post(mark_paid_handler))
        .route("/api/orders/{id}/assign-keys", post(assign_keys_handler))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
