use super::*;
use axum::http::StatusCode;
use axum::response::IntoResponse;

fn status_of(err: HttpError) -> StatusCode {
    err.into_response().status()
}

#[test]
fn invalid_credentials_maps_to_unauthorized() {
    let err = HttpError::from(ServiceError::InvalidCredentials);
    assert_eq!(status_of(err), StatusCode::UNAUTHORIZED);
}

#[test]
fn validation_maps_to_bad_request() {
    let err = HttpError::from(ServiceError::Validation(vec!["name required".into()]));
    assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
}

#[test]
fn repo_not_found_maps_to_not_found() {
    let err = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);
}

#[test]
fn repo_conflict_maps_to_conflict() {
    let err = HttpError::from(ServiceError::Repo(RepositoryError::Conflict(
        "order is paid".into(),
    )));
    assert_eq!(status_of(err), StatusCode::CONFLICT);
}

#[test]
fn already_exists_maps_to_conflict() {
    let err = HttpError::from(ServiceError::Repo(RepositoryError::AlreadyExists(
        "email taken".into(),
    )));
    assert_eq!(status_of(err), StatusCode::CONFLICT);
}

#[test]
fn forbidden_maps_to_forbidden() {
    let err = HttpError::from(ServiceError::Forbidden("admin only".into()));
    assert_eq!(status_of(err), StatusCode::FORBIDDEN);
}

#[test]
fn token_expired_maps_to_unauthorized() {
    let err = HttpError::from(ServiceError::TokenExpired);
    assert_eq!(status_of(err), StatusCode::UNAUTHORIZED);
}

#[test]
fn email_failure_maps_to_service_unavailable() {
    let err = HttpError::from(ServiceError::Email("smtp down".into()));
    assert_eq!(status_of(err), StatusCode::SERVICE_UNAVAILABLE);
}
