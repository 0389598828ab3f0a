use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use fractic_server_error::ServerError;

use crate::{entities::ProjectType, errors::InvalidStatementType};

/// Lifecycle stage of a generated statement. Transitions are owned by the
/// approval workflow; this crate only reads the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportStatus {
    Draft,
    Submitted,
    PendingDafApproval,
    ApprovedByDaf,
    Approved,
    FullyApproved,
    RejectedByDaf,
    RejectedByDg,
    /// Legacy status, predates the DAF/DG split.
    Rejected,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Submitted => "submitted",
            ReportStatus::PendingDafApproval => "pending_daf_approval",
            ReportStatus::ApprovedByDaf => "approved_by_daf",
            ReportStatus::Approved => "approved",
            ReportStatus::FullyApproved => "fully_approved",
            ReportStatus::RejectedByDaf => "rejected_by_daf",
            ReportStatus::RejectedByDg => "rejected_by_dg",
            ReportStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementType {
    RevenueExpenditure,
    AssetsLiabilities,
    CashFlow,
    NetAssetsChanges,
    BudgetVsActual,
}

impl StatementType {
    pub const ALL: [StatementType; 5] = [
        StatementType::RevenueExpenditure,
        StatementType::AssetsLiabilities,
        StatementType::CashFlow,
        StatementType::NetAssetsChanges,
        StatementType::BudgetVsActual,
    ];

    /// Slug used by the reports UI routes.
    pub fn slug(&self) -> &'static str {
        match self {
            StatementType::RevenueExpenditure => "revenue-expenditure",
            StatementType::AssetsLiabilities => "assets-liabilities",
            StatementType::CashFlow => "cash-flow",
            StatementType::NetAssetsChanges => "net-assets-changes",
            StatementType::BudgetVsActual => "budget-vs-actual",
        }
    }

    /// Code sent with statement generation requests.
    pub fn statement_code(&self) -> &'static str {
        match self {
            StatementType::RevenueExpenditure => "REV_EXP",
            StatementType::AssetsLiabilities => "ASSETS_LIAB",
            StatementType::CashFlow => "CASH_FLOW",
            StatementType::NetAssetsChanges => "NET_ASSETS_CHANGES",
            StatementType::BudgetVsActual => "BUDGET_VS_ACTUAL",
        }
    }

    /// Report type under which the generated statement is persisted. Note
    /// that the assets/liabilities statement is stored as a balance sheet.
    pub fn report_type(&self) -> &'static str {
        match self {
            StatementType::RevenueExpenditure => "revenue_expenditure",
            StatementType::AssetsLiabilities => "balance_sheet",
            StatementType::CashFlow => "cash_flow",
            StatementType::NetAssetsChanges => "net_assets_changes",
            StatementType::BudgetVsActual => "budget_vs_actual",
        }
    }
}

impl FromStr for StatementType {
    type Err = ServerError;

    /// Accepts the UI slug, the statement code or the report type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        StatementType::ALL
            .into_iter()
            .find(|t| t.slug() == s || t.statement_code() == s || t.report_type() == s)
            .ok_or_else(|| InvalidStatementType::new(s))
    }
}

/// The persisted report record the guard cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialReport {
    pub id: i64,
    pub reporting_period_id: i64,
    /// `None` when the API reported a status this crate does not recognize.
    pub status: Option<ReportStatus>,
}

/// Query sent to the reporting API when listing a project's reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialReportsQuery {
    pub project_id: i64,
    pub report_type: String,
    pub limit: u32,
    pub page: u32,
}

/// Whether a statement may currently be discarded and rebuilt from execution
/// data. Only valid for a short time after `checked_at`, since the approval
/// workflow can move the report concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerationDecision {
    pub report_id: Option<i64>,
    pub status: Option<ReportStatus>,
    pub can_regenerate: bool,
    pub checked_at: DateTime<Utc>,
}

impl RegenerationDecision {
    pub fn is_stale(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now - self.checked_at > window
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerateStatementRequest {
    pub statement: StatementType,
    pub reporting_period_id: i64,
    pub project_type: ProjectType,
    pub facility_id: Option<i64>,
    pub delete_existing: bool,
}
