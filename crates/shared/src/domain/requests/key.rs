use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Admin key-inventory listing filter: by product, by assignment status,
/// and by free-text search over the key value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllKeys {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,

    pub product_id: Option<i32>,

    pub assigned: Option<bool>,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}
