use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::models::financial_report_model::{
        projects_from_value, FinancialReportsPageModel, ProjectModel,
    },
    entities::{FinancialReport, FinancialReportsApi, FinancialReportsQuery},
    errors::InvalidJson,
};

#[async_trait]
pub(crate) trait FinancialReportsDatasource: Send + Sync {
    async fn projects(&self) -> Result<Vec<ProjectModel>, ServerError>;

    async fn reports(
        &self,
        query: &FinancialReportsQuery,
    ) -> Result<Vec<FinancialReport>, ServerError>;
}

pub(crate) struct FinancialReportsDatasourceImpl<A: FinancialReportsApi> {
    api: Arc<A>,
}

impl<A: FinancialReportsApi> FinancialReportsDatasourceImpl<A> {
    pub(crate) fn new(api: Arc<A>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: FinancialReportsApi> FinancialReportsDatasource for FinancialReportsDatasourceImpl<A> {
    async fn projects(&self) -> Result<Vec<ProjectModel>, ServerError> {
        let body = self.api.list_projects().await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| InvalidJson::with_debug("projects", &e))?;
        Ok(projects_from_value(value))
    }

    async fn reports(
        &self,
        query: &FinancialReportsQuery,
    ) -> Result<Vec<FinancialReport>, ServerError> {
        let body = self.api.list_financial_reports(query).await?;
        let page: FinancialReportsPageModel = serde_json::from_str(&body)
            .map_err(|e| InvalidJson::with_debug("financial reports", &e))?;
        Ok(page.into_reports())
    }
}
