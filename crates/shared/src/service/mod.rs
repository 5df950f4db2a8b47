mod auth;
mod email;
mod key;
mod order;
mod product;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::email::EmailService;
pub use self::key::KeyService;
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::product::ProductService;
