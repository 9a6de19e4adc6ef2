mod lambda;

pub use lambda::LambdaCatalog;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct CatalogError(pub String);

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "catalog: {}", self.0)
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagFilter {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    pub arn: String,
    pub runtime: Option<String>,
    pub memory_mb: Option<i32>,
    pub timeout_seconds: Option<i32>,
}

#[async_trait::async_trait]
pub trait FunctionCatalog: Send + Sync {
    async fn applicable_functions(
        &self,
        filter: Option<&TagFilter>,
    ) -> Result<Vec<FunctionInfo>, CatalogError>;
}

pub fn tag_matches(tags: &HashMap<String, String>, filter: &TagFilter) -> bool {
    tags.get(&filter.key).is_some_and(|v| v == &filter.value)
}
