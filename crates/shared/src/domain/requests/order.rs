use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllOrders {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1, message = "Product id is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = 100, message = "Quantity must be between 1 and 100"))]
    #[schema(example = 1)]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

/// Manual payment details submitted by the customer after sending money
/// out of band (mobile money transfer, crypto).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitPaymentRequest {
    #[validate(length(min = 1, message = "Payment method is required"))]
    #[schema(example = "Bkash")]
    pub method: String,

    #[validate(length(min = 1, message = "Transaction id is required"))]
    #[schema(example = "TRX123456789")]
    pub trx_id: String,

    #[validate(length(min = 1, message = "Sender is required"))]
    #[schema(example = "017XXXXXXXX")]
    pub sender: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignKeysRequest {
    #[validate(range(min = 1, max = 100, message = "Count must be between 1 and 100"))]
    #[schema(example = 1)]
    pub count: i32,
}
