mod key;
mod order;
mod product;
mod refresh_token;
mod reset_token;
mod user;

pub use self::key::KeyRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::refresh_token::RefreshTokenRepository;
pub use self::reset_token::ResetTokenRepository;
pub use self::user::UserRepository;
