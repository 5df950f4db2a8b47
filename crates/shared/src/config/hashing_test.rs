use crate::abstract_trait::HashingTrait;
use crate::config::Hashing;
use crate::errors::ServiceError;

#[tokio::test]
async fn hash_and_compare_round_trips() {
    let hashing = Hashing::new();

    let hashed = hashing
        .hash_password("correct-horse")
        .await
        .expect("hashing");

    assert_ne!(hashed, "correct-horse");
    assert!(
        hashing
            .compare_password(&hashed, "correct-horse")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let hashing = Hashing::new();

    let hashed = hashing
        .hash_password("correct-horse")
        .await
        .expect("hashing");

    let result = hashing.compare_password(&hashed, "battery-staple").await;

    assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
}
