use crate::abstract_trait::JwtServiceTrait;
use crate::config::JwtConfig;
use crate::errors::ServiceError;

#[test]
fn access_token_round_trips() {
    let jwt = JwtConfig::new("test-secret");

    let token = jwt.generate_token(42, "access").expect("token generation");
    let user_id = jwt.verify_token(&token, "access").expect("verification");

    assert_eq!(user_id, 42);
}

#[test]
fn refresh_token_round_trips() {
    let jwt = JwtConfig::new("test-secret");

    let token = jwt.generate_token(7, "refresh").expect("token generation");
    let user_id = jwt.verify_token(&token, "refresh").expect("verification");

    assert_eq!(user_id, 7);
}

#[test]
fn token_type_mismatch_is_rejected() {
    let jwt = JwtConfig::new("test-secret");

    let token = jwt.generate_token(42, "refresh").expect("token generation");
    let result = jwt.verify_token(&token, "access");

    assert!(matches!(result, Err(ServiceError::InvalidTokenType)));
}

#[test]
fn unknown_token_type_is_rejected_at_generation() {
    let jwt = JwtConfig::new("test-secret");

    let result = jwt.generate_token(42, "session");

    assert!(matches!(result, Err(ServiceError::InvalidTokenType)));
}

#[test]
fn garbage_token_fails_verification() {
    let jwt = JwtConfig::new("test-secret");

    assert!(jwt.verify_token("not-a-jwt", "access").is_err());
}

#[test]
fn wrong_secret_fails_verification() {
    let signer = JwtConfig::new("secret-a");
    let verifier = JwtConfig::new("secret-b");

    let token = signer.generate_token(42, "access").expect("token generation");

    assert!(verifier.verify_token(&token, "access").is_err());
}
