use aws_sdk_lambda::Client;

use super::{tag_matches, CatalogError, FunctionCatalog, FunctionInfo, TagFilter};

pub struct LambdaCatalog {
    client: Client,
}

impl LambdaCatalog {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn carries_tag(&self, arn: &str, filter: &TagFilter) -> Result<bool, CatalogError> {
        let out = self
            .client
            .list_tags()
            .resource(arn)
            .send()
            .await
            .map_err(|e| CatalogError(e.to_string()))?;
        let tags = out.tags.unwrap_or_default();
        Ok(tag_matches(&tags, filter))
    }
}

#[async_trait::async_trait]
impl FunctionCatalog for LambdaCatalog {
    async fn applicable_functions(
        &self,
        filter: Option<&TagFilter>,
    ) -> Result<Vec<FunctionInfo>, CatalogError> {
        let mut functions = Vec::new();
        let mut pages = self.client.list_functions().into_paginator().send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| CatalogError(e.to_string()))?;
            for cfg in page.functions.unwrap_or_default() {
                let (Some(name), Some(arn)) = (cfg.function_name, cfg.function_arn) else {
                    continue;
                };
                if let Some(filter) = filter {
                    if !self.carries_tag(&arn, filter).await? {
                        tracing::debug!(function = %name, "skipped by tag filter");
                        continue;
                    }
                }
                functions.push(FunctionInfo {
                    name,
                    arn,
                    runtime: cfg.runtime.map(|r| r.as_str().to_string()),
                    memory_mb: cfg.memory_size,
                    timeout_seconds: cfg.timeout,
                });
            }
        }

        tracing::info!(functions = functions.len(), "catalog listed");
        Ok(functions)
    }
}
