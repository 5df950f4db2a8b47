mod auth;
mod email;
mod hashing;
mod jwt;
mod key;
mod order;
mod product;
mod refresh_token;
mod reset_token;
mod session;
mod user;

pub use self::auth::{
    DynIdentityService, DynLoginService, DynPasswordResetService, DynRegisterService,
    IdentityServiceTrait, LoginServiceTrait, PasswordResetServiceTrait, RegisterServiceTrait,
};
pub use self::email::{DynEmailService, EmailServiceTrait};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::key::{
    DynKeyCommandRepository, DynKeyCommandService, DynKeyQueryRepository, DynKeyQueryService,
    KeyCommandRepositoryTrait, KeyCommandServiceTrait, KeyQueryRepositoryTrait,
    KeyQueryServiceTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::refresh_token::{DynRefreshTokenRepository, RefreshTokenRepositoryTrait};
pub use self::reset_token::{DynResetTokenRepository, ResetTokenRepositoryTrait};
pub use self::session::{DynSessionStore, SessionStoreTrait};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};
