mod api;
mod key;
mod order;
mod pagination;
mod product;
mod session;
mod token;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::key::KeyResponse;
pub use self::order::{OrderResponse, PaymentInfoResponse};
pub use self::pagination::Pagination;
pub use self::product::{ProductResponse, ProductResponseDeleteAt};
pub use self::session::Session;
pub use self::token::{LoginResponse, TokenResponse};
pub use self::user::UserResponse;

#[cfg(test)]
mod pagination_test;
