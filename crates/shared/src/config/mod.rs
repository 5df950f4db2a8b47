mod database;
mod hashing;
mod jwt;
mod myconfig;
mod redis;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::hashing::Hashing;
pub use self::jwt::JwtConfig;
pub use self::myconfig::{Config, EmailConfig, RedisConfig};
pub use self::redis::RedisClient;

#[cfg(test)]
mod jwt_test;
#[cfg(test)]
mod hashing_test;
