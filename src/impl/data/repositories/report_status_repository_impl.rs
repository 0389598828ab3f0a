use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::{debug, warn};

use crate::{
    data::datasources::financial_reports_datasource::{
        FinancialReportsDatasource, FinancialReportsDatasourceImpl,
    },
    domain::repositories::report_status_repository::ReportStatusRepository,
    entities::{
        FinancialReport, FinancialReportsApi, FinancialReportsQuery, ProjectType, StatementType,
    },
    errors::{ProjectLookupFailed, ReportLookupFailed},
};

pub(crate) struct ReportStatusRepositoryImpl<
    A,
    DS = FinancialReportsDatasourceImpl<A>, // Default.
> where
    A: FinancialReportsApi,
    DS: FinancialReportsDatasource,
{
    datasource: DS,
    page_limit: u32,
    _phantom: std::marker::PhantomData<A>,
}

#[async_trait]
impl<A, DS> ReportStatusRepository for ReportStatusRepositoryImpl<A, DS>
where
    A: FinancialReportsApi,
    DS: FinancialReportsDatasource,
{
    async fn find_project_id(&self, project: ProjectType) -> Result<Option<i64>, ServerError> {
        let projects = self
            .datasource
            .projects()
            .await
            .map_err(|e| ProjectLookupFailed::with_debug(project.api_name(), &e))?;
        Ok(projects.iter().find(|p| p.is_type(project)).map(|p| p.id))
    }

    async fn find_latest_report(
        &self,
        project_id: i64,
        statement: StatementType,
        reporting_period_id: i64,
    ) -> Result<Option<FinancialReport>, ServerError> {
        let query = FinancialReportsQuery {
            project_id,
            report_type: statement.report_type().to_string(),
            limit: self.page_limit,
            page: 1,
        };
        let reports = self
            .datasource
            .reports(&query)
            .await
            .map_err(|e| {
                ReportLookupFailed::with_debug(project_id, statement.report_type(), &e)
            })?;
        debug!(
            project_id,
            report_type = statement.report_type(),
            count = reports.len(),
            "fetched financial reports"
        );
        // The API filters by project and type only. Newer reports carry
        // higher ids.
        let latest = reports
            .into_iter()
            .filter(|r| r.reporting_period_id == reporting_period_id)
            .max_by_key(|r| r.id);
        if let Some(report) = latest.as_ref().filter(|r| r.status.is_none()) {
            warn!(
                report_id = report.id,
                reporting_period_id, "report has an unrecognized status"
            );
        }
        Ok(latest)
    }
}

impl<A: FinancialReportsApi> ReportStatusRepositoryImpl<A> {
    pub(crate) fn new(api: Arc<A>, page_limit: u32) -> Self {
        ReportStatusRepositoryImpl {
            datasource: FinancialReportsDatasourceImpl::new(api),
            page_limit,
            _phantom: std::marker::PhantomData,
        }
    }
}
