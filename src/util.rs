use std::sync::Arc;

use chrono::Utc;
use fractic_server_error::ServerError;

use crate::{
    domain::usecases::{
        mapping_usecase::{MappingUsecase as _, MappingUsecaseImpl},
        regenerate_usecase::{RegenerateUsecase as _, RegenerateUsecaseImpl},
        report_status_usecase::{ReportStatusUsecase as _, ReportStatusUsecaseImpl},
    },
    entities::{
        ActivityTree, FinancialReportsApi, MappingReport, ProjectType, RegenerateStatementRequest,
        RegenerationDecision, RegenerationGuardConfig, StatementType,
    },
    presentation::mapping_report_printer::MappingReportPrinter,
};

pub type MappingPrintout = String;

pub struct ExecutionRulesUtil<A>
where
    A: FinancialReportsApi,
{
    mapping_usecase: MappingUsecaseImpl,
    report_status_usecase: Arc<ReportStatusUsecaseImpl<A>>,
    regenerate_usecase: RegenerateUsecaseImpl<ReportStatusUsecaseImpl<A>>,
    printer: MappingReportPrinter,
}

impl<A> ExecutionRulesUtil<A>
where
    A: FinancialReportsApi,
{
    pub fn new(api: A) -> Self {
        Self::with_config(api, RegenerationGuardConfig::default())
    }

    pub fn with_config(api: A, config: RegenerationGuardConfig) -> Self {
        let report_status_usecase = Arc::new(ReportStatusUsecaseImpl::new(
            Arc::new(api),
            config.reports_page_limit,
        ));
        Self {
            mapping_usecase: MappingUsecaseImpl::new(),
            regenerate_usecase: RegenerateUsecaseImpl::new(report_status_usecase.clone(), &config),
            report_status_usecase,
            printer: MappingReportPrinter::new(),
        }
    }

    // Expense classification.
    // ---

    pub fn map_tree(&self, tree: &ActivityTree) -> (MappingReport, MappingPrintout) {
        let report = self.mapping_usecase.map_tree(tree);
        let printout = self.printer.print_report(&report);
        (report, printout)
    }

    pub fn from_string(
        &self,
        activities_json: &str,
    ) -> Result<(MappingReport, MappingPrintout), ServerError> {
        let report = self.mapping_usecase.from_string(activities_json)?;
        let printout = self.printer.print_report(&report);
        Ok((report, printout))
    }

    pub async fn from_file<T>(
        &self,
        activities_json: T,
    ) -> Result<(MappingReport, MappingPrintout), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let report = self.mapping_usecase.from_file(activities_json).await?;
        let printout = self.printer.print_report(&report);
        Ok((report, printout))
    }

    // Regeneration guard.
    // ---

    pub async fn report_status(
        &self,
        reporting_period_id: i64,
        project: ProjectType,
        statement: StatementType,
    ) -> RegenerationDecision {
        self.report_status_usecase
            .report_status(reporting_period_id, project, statement)
            .await
    }

    /// Decisions for every statement type, in `StatementType::ALL` order.
    pub async fn report_statuses(
        &self,
        reporting_period_id: i64,
        project: ProjectType,
    ) -> Vec<(StatementType, RegenerationDecision)> {
        self.report_status_usecase
            .report_statuses(reporting_period_id, project, &StatementType::ALL)
            .await
    }

    /// Checks a decision the caller already holds, ex. the one behind an
    /// enabled regenerate button.
    pub fn authorize_regeneration(
        &self,
        request: &RegenerateStatementRequest,
        decision: &RegenerationDecision,
    ) -> Result<(), ServerError> {
        self.regenerate_usecase
            .authorize(request, decision, Utc::now())
    }

    /// Re-fetches the report status and authorizes against it. Call right
    /// before the destructive regenerate request.
    pub async fn recheck_regeneration(
        &self,
        request: &RegenerateStatementRequest,
    ) -> Result<RegenerationDecision, ServerError> {
        self.regenerate_usecase.recheck(request).await
    }
}
