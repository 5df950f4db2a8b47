use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A redeemable digital product code. Assigned to at most one paid order;
/// once revoked it never returns to the assignable pool.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductKey {
    pub key_id: i32,
    pub product_id: i32,
    pub key_value: String,
    pub is_assigned: bool,
    pub assigned_order_id: Option<i32>,
    pub revoked_at: Option<NaiveDateTime>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
