use crate::{abstract_trait::SessionStoreTrait, domain::responses::Session};
use async_trait::async_trait;
use chrono::Duration;
use deadpool_redis::{Connection, Pool, redis::AsyncCommands};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct SessionStore {
    pub pool: Arc<Pool>,
}

impl SessionStore {
    pub fn new(pool: Pool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    async fn get_conn(&self) -> Option<Connection> {
        match self.pool.get().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection from pool: {:?}", e);
                None
            }
        }
    }
}

#[async_trait]
impl SessionStoreTrait for SessionStore {
    async fn create_session(&self, session_id: &str, session: &Session, ttl: Duration) -> bool {
        let json_data = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize session: {:?}", e);
                return false;
            }
        };

        if let Some(mut conn) = self.get_conn().await {
            let result: Result<(), _> = conn
                .set_ex(session_id, &json_data, ttl.num_seconds() as u64)
                .await;

            match result {
                Ok(_) => {
                    debug!("Session created for session_id: {}", session_id);
                    true
                }
                Err(e) => {
                    error!("Failed to create session: {:?}", e);
                    false
                }
            }
        } else {
            false
        }
    }

    async fn get_session(&self, session_id: &str) -> Option<Session> {
        let mut conn = self.get_conn().await?;

        let result: Result<Option<String>, _> = conn.get(session_id).await;

        match result {
            Ok(Some(json)) => match serde_json::from_str::<Session>(&json) {
                Ok(session) => Some(session),
                Err(e) => {
                    error!("Failed to deserialize session '{}': {:?}", session_id, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!("Failed to fetch session '{}': {:?}", session_id, e);
                None
            }
        }
    }

    async fn delete_session(&self, session_id: &str) -> bool {
        if let Some(mut conn) = self.get_conn().await {
            let result: Result<(), _> = conn.del(session_id).await;

            match result {
                Ok(_) => true,
                Err(e) => {
                    error!("Failed to delete session '{}': {:?}", session_id, e);
                    false
                }
            }
        } else {
            false
        }
    }
}
