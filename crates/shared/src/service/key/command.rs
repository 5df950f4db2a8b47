use crate::{
    abstract_trait::{
        DynKeyCommandRepository, DynProductQueryRepository, KeyCommandServiceTrait,
    },
    domain::requests::AddProductKeysRequest,
    domain::responses::{ApiResponse, KeyResponse},
    errors::{RepositoryError, ServiceError},
    utils::generate_key_code,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct KeyCommandService {
    command: DynKeyCommandRepository,
    product_query: DynProductQueryRepository,
}

impl KeyCommandService {
    pub fn new(
        command: DynKeyCommandRepository,
        product_query: DynProductQueryRepository,
    ) -> Self {
        Self {
            command,
            product_query,
        }
    }
}

#[async_trait]
impl KeyCommandServiceTrait for KeyCommandService {
    async fn add_keys(
        &self,
        product_id: i32,
        req: &AddProductKeysRequest,
    ) -> Result<ApiResponse<Vec<KeyResponse>>, ServiceError> {
        if req.is_empty() {
            return Err(ServiceError::Validation(vec![
                "Provide key values or a generate count".to_string(),
            ]));
        }

        self.product_query
            .find_by_id(product_id)
            .await?
            .ok_or(RepositoryError::NotFound)
            .map_err(ServiceError::from)?;

        let mut values: Vec<String> = req
            .keys
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if let Some(count) = req.generate {
            for _ in 0..count {
                let code = generate_key_code()
                    .map_err(|e| ServiceError::Internal(format!("Key generation failed: {e}")))?;
                values.push(code);
            }
        }

        if values.is_empty() {
            return Err(ServiceError::Validation(vec![
                "No usable key values supplied".to_string(),
            ]));
        }

        let keys = self.command.insert_keys(product_id, &values).await?;

        info!("🔑 Added {} keys to product {}", keys.len(), product_id);

        let data: Vec<KeyResponse> = keys.into_iter().map(KeyResponse::from).collect();

        Ok(ApiResponse::success("Keys added successfully", data))
    }

    async fn revoke_key(&self, key_id: i32) -> Result<ApiResponse<KeyResponse>, ServiceError> {
        let key = self.command.revoke_key(key_id).await?;

        Ok(ApiResponse::success(
            "Key revoked successfully",
            KeyResponse::from(key),
        ))
    }
}
