use super::*;
use validator::Validate;

#[test]
fn create_product_rejects_empty_name() {
    let req = CreateProductRequest {
        name: "".to_string(),
        description: None,
        price: 1599,
        stock: 10,
        logo: Some("💻".to_string()),
        instructions: None,
    };
    assert!(req.validate().is_err());
}

#[test]
fn create_product_rejects_zero_price() {
    let req = CreateProductRequest {
        name: "Windows 11 Pro Key".to_string(),
        description: None,
        price: 0,
        stock: 10,
        logo: None,
        instructions: None,
    };
    assert!(req.validate().is_err());
}

#[test]
fn create_product_accepts_valid_input() {
    let req = CreateProductRequest {
        name: "Windows 11 Pro Key".to_string(),
        description: Some("Lifetime license".to_string()),
        price: 1599,
        stock: 10,
        logo: Some("💻".to_string()),
        instructions: Some("Redeem at microsoft.com".to_string()),
    };
    assert!(req.validate().is_ok());
}

#[test]
fn register_rejects_password_mismatch() {
    let req = RegisterRequest {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "correct-horse".to_string(),
        confirm_password: "battery-staple".to_string(),
    };
    assert!(req.validate().is_err());
}

#[test]
fn register_rejects_invalid_email() {
    let req = RegisterRequest {
        name: "Ada".to_string(),
        email: "not-an-email".to_string(),
        password: "correct-horse".to_string(),
        confirm_password: "correct-horse".to_string(),
    };
    assert!(req.validate().is_err());
}

#[test]
fn login_rejects_short_password() {
    let req = LoginRequest {
        email: "ada@example.com".to_string(),
        password: "abc".to_string(),
    };
    assert!(req.validate().is_err());
}

#[test]
fn payment_rejects_missing_fields() {
    let req = SubmitPaymentRequest {
        method: "Bkash".to_string(),
        trx_id: "".to_string(),
        sender: "017XXXXXXXX".to_string(),
    };
    assert!(req.validate().is_err());
}

#[test]
fn create_order_defaults_quantity_to_one() {
    let req: CreateOrderRequest = serde_json::from_str(r#"{"product_id": 7}"#).unwrap();
    assert_eq!(req.quantity, 1);
    assert!(req.validate().is_ok());
}

#[test]
fn create_order_rejects_zero_quantity() {
    let req: CreateOrderRequest =
        serde_json::from_str(r#"{"product_id": 7, "quantity": 0}"#).unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn add_keys_requires_values_or_generate_count() {
    let empty = AddProductKeysRequest {
        keys: vec![],
        generate: None,
    };
    assert!(empty.is_empty());

    let with_values = AddProductKeysRequest {
        keys: vec!["ABCDE-ABCDE-ABCDE-ABCDE-ABCDE".to_string()],
        generate: None,
    };
    assert!(!with_values.is_empty());

    let with_generate = AddProductKeysRequest {
        keys: vec![],
        generate: Some(5),
    };
    assert!(!with_generate.is_empty());
}

#[test]
fn add_keys_rejects_oversized_generate_count() {
    let req = AddProductKeysRequest {
        keys: vec![],
        generate: Some(5000),
    };
    assert!(req.validate().is_err());
}

#[test]
fn find_all_keys_defaults_pagination() {
    let req: FindAllKeys = serde_json::from_str(r#"{}"#).unwrap();
    assert_eq!(req.page, 1);
    assert_eq!(req.page_size, 10);
    assert!(req.search.is_empty());
    assert!(req.product_id.is_none());
    assert!(req.assigned.is_none());
}
