use serde::{Deserialize, Serialize};

/// Server-side session record cached in redis, keyed by `session:{user_id}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == crate::model::ROLE_ADMIN)
    }
}
