use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub price: i64,
    pub quantity: i32,
    pub status: String,
    pub payment_method: Option<String>,
    pub payment_trx_id: Option<String>,
    pub payment_sender: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Lifecycle of a storefront order. Stored as text in the `orders.status`
/// column; every transition goes through [`OrderStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    AwaitingConfirmation,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::AwaitingConfirmation => "awaiting_confirmation",
            OrderStatus::Paid => "paid",
        }
    }

    /// Legal moves: pending -> awaiting_confirmation -> paid, plus the
    /// admin shortcut pending -> paid (mark-paid). Everything else is
    /// rejected so the server stays the single source of truth.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::AwaitingConfirmation)
                | (OrderStatus::Pending, OrderStatus::Paid)
                | (OrderStatus::AwaitingConfirmation, OrderStatus::Paid)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "awaiting_confirmation" => Ok(OrderStatus::AwaitingConfirmation),
            "paid" => Ok(OrderStatus::Paid),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

impl Order {
    pub fn parsed_status(&self) -> Result<OrderStatus, String> {
        self.status.parse()
    }
}
