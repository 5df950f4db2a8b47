use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Windows 11 Pro Key")]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 1, message = "Price must be greater than zero"))]
    #[schema(example = 1599)]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 10)]
    pub stock: i32,

    #[schema(example = "💻")]
    pub logo: Option<String>,

    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 1, message = "Price must be greater than zero"))]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,

    pub logo: Option<String>,

    pub instructions: Option<String>,
}

/// Bulk key intake for a product: explicit key values, generated ones, or
/// both in a single call.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddProductKeysRequest {
    #[serde(default)]
    pub keys: Vec<String>,

    #[validate(range(min = 1, max = 1000, message = "Generate count must be between 1 and 1000"))]
    pub generate: Option<i32>,
}

impl AddProductKeysRequest {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.generate.is_none()
    }
}
