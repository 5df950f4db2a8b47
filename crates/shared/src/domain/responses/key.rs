use crate::model::ProductKey;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct KeyResponse {
    pub id: i32,
    pub product_id: i32,
    pub key_value: String,
    pub is_assigned: bool,
    pub assigned_order_id: Option<i32>,
    pub revoked_at: Option<String>,
    pub created_at: Option<String>,
}

impl From<ProductKey> for KeyResponse {
    fn from(value: ProductKey) -> Self {
        KeyResponse {
            id: value.key_id,
            product_id: value.product_id,
            key_value: value.key_value,
            is_assigned: value.is_assigned,
            assigned_order_id: value.assigned_order_id,
            revoked_at: value.revoked_at.map(|dt| dt.to_string()),
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
