use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use fractic_server_error::ServerError;
use futures::{stream, StreamExt as _};
use tracing::{debug, warn};

use crate::{
    data::repositories::report_status_repository_impl::ReportStatusRepositoryImpl,
    domain::repositories::report_status_repository::ReportStatusRepository,
    entities::{FinancialReportsApi, ProjectType, RegenerationDecision, StatementType},
};

#[async_trait]
pub trait ReportStatusUsecase: Send + Sync {
    /// Never fails: lookup errors yield a permissive decision, so that a flaky
    /// reporting API cannot lock users out of regeneration.
    async fn report_status(
        &self,
        reporting_period_id: i64,
        project: ProjectType,
        statement: StatementType,
    ) -> RegenerationDecision;

    async fn report_statuses(
        &self,
        reporting_period_id: i64,
        project: ProjectType,
        statements: &[StatementType],
    ) -> Vec<(StatementType, RegenerationDecision)>;
}

pub(crate) struct ReportStatusUsecaseImpl<
    A,
    R = ReportStatusRepositoryImpl<A>, // Default.
> where
    A: FinancialReportsApi,
    R: ReportStatusRepository,
{
    repository: R,
    _phantom: std::marker::PhantomData<A>,
}

impl<A, R> ReportStatusUsecaseImpl<A, R>
where
    A: FinancialReportsApi,
    R: ReportStatusRepository,
{
    async fn lookup(
        &self,
        reporting_period_id: i64,
        project: ProjectType,
        statement: StatementType,
    ) -> Result<RegenerationDecision, ServerError> {
        let checked_at = Utc::now();
        let Some(project_id) = self.repository.find_project_id(project).await? else {
            debug!(project = project.api_name(), "no project found");
            return Ok(RegenerationDecision::permissive(checked_at));
        };
        let report = self
            .repository
            .find_latest_report(project_id, statement, reporting_period_id)
            .await?;
        Ok(RegenerationDecision::for_report(report.as_ref(), checked_at))
    }
}

#[async_trait]
impl<A, R> ReportStatusUsecase for ReportStatusUsecaseImpl<A, R>
where
    A: FinancialReportsApi,
    R: ReportStatusRepository,
{
    async fn report_status(
        &self,
        reporting_period_id: i64,
        project: ProjectType,
        statement: StatementType,
    ) -> RegenerationDecision {
        match self.lookup(reporting_period_id, project, statement).await {
            Ok(decision) => {
                debug!(
                    statement = statement.statement_code(),
                    status = decision.status.map(|s| s.as_str()),
                    can_regenerate = decision.can_regenerate,
                    "checked report status"
                );
                decision
            }
            Err(e) => {
                warn!(
                    statement = statement.statement_code(),
                    reporting_period_id,
                    error = %e,
                    "report status lookup failed, allowing regeneration"
                );
                RegenerationDecision::permissive(Utc::now())
            }
        }
    }

    async fn report_statuses(
        &self,
        reporting_period_id: i64,
        project: ProjectType,
        statements: &[StatementType],
    ) -> Vec<(StatementType, RegenerationDecision)> {
        stream::iter(statements.iter().copied())
            .then(|statement| async move {
                let decision = self
                    .report_status(reporting_period_id, project, statement)
                    .await;
                (statement, decision)
            })
            .collect()
            .await
    }
}

impl<A: FinancialReportsApi> ReportStatusUsecaseImpl<A> {
    pub(crate) fn new(api: Arc<A>, reports_page_limit: u32) -> Self {
        ReportStatusUsecaseImpl {
            repository: ReportStatusRepositoryImpl::new(api, reports_page_limit),
            _phantom: std::marker::PhantomData,
        }
    }
}
