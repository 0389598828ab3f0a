use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{FinancialReport, ProjectType, StatementType};

#[async_trait]
pub trait ReportStatusRepository: Send + Sync {
    /// Id of the project running the given program, if any.
    async fn find_project_id(&self, project: ProjectType) -> Result<Option<i64>, ServerError>;

    /// Most recent report of the statement for the project and period, if one
    /// was generated.
    async fn find_latest_report(
        &self,
        project_id: i64,
        statement: StatementType,
        reporting_period_id: i64,
    ) -> Result<Option<FinancialReport>, ServerError>;
}
