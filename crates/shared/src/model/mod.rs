mod key;
mod order;
mod product;
mod refresh_token;
mod reset_token;
mod user;

pub use self::key::ProductKey;
pub use self::order::{Order, OrderStatus};
pub use self::product::Product;
pub use self::refresh_token::RefreshToken;
pub use self::reset_token::ResetToken;
pub use self::user::{ROLE_ADMIN, ROLE_CUSTOMER, User};

#[cfg(test)]
mod order_test;
