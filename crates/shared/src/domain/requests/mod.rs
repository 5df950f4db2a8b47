mod auth;
mod email;
mod key;
mod order;
mod product;

pub use self::auth::{
    ForgotPasswordRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
    ResetPasswordRequest,
};
pub use self::email::EmailRequest;
pub use self::key::FindAllKeys;
pub use self::order::{
    AssignKeysRequest, CreateOrderRequest, FindAllOrders, SubmitPaymentRequest,
};
pub use self::product::{
    AddProductKeysRequest, CreateProductRequest, FindAllProducts, UpdateProductRequest,
};

#[cfg(test)]
mod requests_test;
