use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::datasources::activities_json_datasource::{
        ActivitiesJsonDatasource, ActivitiesJsonDatasourceImpl,
    },
    domain::repositories::activities_repository::ActivitiesRepository,
    entities::ActivityTree,
};

pub(crate) struct ActivitiesRepositoryImpl<
    DS = ActivitiesJsonDatasourceImpl, // Default.
> where
    DS: ActivitiesJsonDatasource,
{
    datasource: DS,
}

fn log_loaded(tree: &ActivityTree) {
    debug!(
        sections = tree.sections.len(),
        expenses = tree.expense_line_items().count(),
        "loaded activity tree"
    );
}

#[async_trait]
impl<DS: ActivitiesJsonDatasource> ActivitiesRepository for ActivitiesRepositoryImpl<DS> {
    fn from_string(&self, activities_json: &str) -> Result<ActivityTree, ServerError> {
        let tree = self.datasource.from_string(activities_json)?;
        log_loaded(&tree);
        Ok(tree)
    }

    async fn from_file<P>(&self, activities_json: P) -> Result<ActivityTree, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let tree = self.datasource.from_file(activities_json).await?;
        log_loaded(&tree);
        Ok(tree)
    }
}

impl ActivitiesRepositoryImpl {
    pub(crate) fn new() -> Self {
        ActivitiesRepositoryImpl {
            datasource: ActivitiesJsonDatasourceImpl::new(),
        }
    }
}
