use super::validate::SimpleValidatedJson;
use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::{Request, StatusCode, header};
use shared::domain::requests::LoginRequest;

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn valid_body_is_extracted() {
    let req = json_request(r#"{"email": "ada@example.com", "password": "correct-horse"}"#);

    let extracted = SimpleValidatedJson::<LoginRequest>::from_request(req, &())
        .await
        .expect("extraction");

    assert_eq!(extracted.0.email, "ada@example.com");
}

#[tokio::test]
async fn validation_failure_is_bad_request() {
    let req = json_request(r#"{"email": "not-an-email", "password": "correct-horse"}"#);

    let err = SimpleValidatedJson::<LoginRequest>::from_request(req, &())
        .await
        .expect_err("should fail validation");

    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    let details = err.1.0;
    assert_eq!(details["error"], "Validation failed");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let req = json_request(r#"{"email": "#);

    let err = SimpleValidatedJson::<LoginRequest>::from_request(req, &())
        .await
        .expect_err("should fail parsing");

    assert_ne!(err.0, StatusCode::OK);
    let details = err.1.0;
    assert_eq!(details["error"], "Invalid JSON");
}
