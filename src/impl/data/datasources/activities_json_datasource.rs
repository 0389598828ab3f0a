use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::models::activity_tree_model::ActivityTreeModel,
    entities::ActivityTree,
    errors::{InvalidJson, ReadError},
};

#[async_trait]
pub(crate) trait ActivitiesJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<ActivityTree, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<ActivityTree, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ActivitiesJsonDatasourceImpl;

impl ActivitiesJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ActivitiesJsonDatasource for ActivitiesJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<ActivityTree, ServerError> {
        // Blank input is the same as `null`: nothing to map.
        if s.trim().is_empty() {
            return Ok(ActivityTree::new());
        }
        let value: Value =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("activity tree", &e))?;
        Ok(ActivityTreeModel::from(value).into())
    }

    async fn from_file<P>(&self, path: P) -> Result<ActivityTree, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}
