use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::ActivityTree;

#[async_trait]
pub trait ActivitiesRepository: Send + Sync {
    fn from_string(&self, activities_json: &str) -> Result<ActivityTree, ServerError>;

    async fn from_file<P>(&self, activities_json: P) -> Result<ActivityTree, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
