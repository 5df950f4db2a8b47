use crate::model::Order;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PaymentInfoResponse {
    pub method: String,
    pub trx_id: String,
    pub sender: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub price: i64,
    pub quantity: i32,
    pub status: String,
    pub payment_info: Option<PaymentInfoResponse>,
    /// Key values assigned to this order; populated once the order is paid.
    pub keys: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        let payment_info = match (
            value.payment_method,
            value.payment_trx_id,
            value.payment_sender,
        ) {
            (Some(method), Some(trx_id), Some(sender)) => Some(PaymentInfoResponse {
                method,
                trx_id,
                sender,
            }),
            _ => None,
        };

        OrderResponse {
            id: value.order_id,
            user_id: value.user_id,
            product_id: value.product_id,
            product_name: value.product_name,
            price: value.price,
            quantity: value.quantity,
            status: value.status,
            payment_info,
            keys: Vec::new(),
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

impl OrderResponse {
    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        self.keys = keys;
        self
    }
}
