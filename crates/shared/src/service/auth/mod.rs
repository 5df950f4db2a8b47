mod identity;
mod login;
mod password_reset;
mod register;

use crate::abstract_trait::{
    DynEmailService, DynHashing, DynIdentityService, DynJwtService, DynLoginService,
    DynPasswordResetService, DynRefreshTokenRepository, DynRegisterService,
    DynResetTokenRepository, DynSessionStore, DynUserCommandRepository, DynUserQueryRepository,
};
use std::sync::Arc;

use self::identity::IdentityService;
use self::login::{LoginService, LoginServiceDeps};
use self::password_reset::{PasswordResetService, PasswordResetServiceDeps};
use self::register::RegisterService;

#[derive(Clone)]
pub struct AuthService {
    pub register: DynRegisterService,
    pub login: DynLoginService,
    pub identity: DynIdentityService,
    pub password_reset: DynPasswordResetService,
}

pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub refresh_tokens: DynRefreshTokenRepository,
    pub reset_tokens: DynResetTokenRepository,
    pub sessions: DynSessionStore,
    pub email: DynEmailService,
    pub app_base_url: String,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            hash,
            jwt,
            user_query,
            user_command,
            refresh_tokens,
            reset_tokens,
            sessions,
            email,
            app_base_url,
        } = deps;

        let register = Arc::new(RegisterService::new(
            hash.clone(),
            user_query.clone(),
            user_command.clone(),
        )) as DynRegisterService;

        let login = Arc::new(LoginService::new(LoginServiceDeps {
            hash: hash.clone(),
            jwt: jwt.clone(),
            user_query: user_query.clone(),
            refresh_tokens: refresh_tokens.clone(),
            sessions,
        })) as DynLoginService;

        let identity = Arc::new(IdentityService::new(
            jwt,
            user_query.clone(),
            refresh_tokens.clone(),
        )) as DynIdentityService;

        let password_reset = Arc::new(PasswordResetService::new(PasswordResetServiceDeps {
            hash,
            user_query,
            user_command,
            reset_tokens,
            refresh_tokens,
            email,
            app_base_url,
        })) as DynPasswordResetService;

        Self {
            register,
            login,
            identity,
            password_reset,
        }
    }
}
