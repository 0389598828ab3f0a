use chrono::{DateTime, Duration, Utc};
use fractic_server_error::ServerError;
use tracing::{info, warn};

use crate::{
    entities::{FinancialReport, RegenerateStatementRequest, RegenerationDecision, ReportStatus},
    errors::{RegenerationBlocked, StaleRegenerationDecision},
};

/// Statuses whose generated rows can be discarded without losing an approval
/// trail. A missing report is always safe.
const SAFE_TO_REGENERATE: [ReportStatus; 4] = [
    ReportStatus::Draft,
    ReportStatus::RejectedByDaf,
    ReportStatus::RejectedByDg,
    ReportStatus::Rejected,
];

/// `None` stands for "no report generated yet".
pub fn can_regenerate(status: Option<ReportStatus>) -> bool {
    match status {
        None => true,
        Some(status) => SAFE_TO_REGENERATE.contains(&status),
    }
}

impl RegenerationDecision {
    /// Decision used when no report exists, and whenever the status lookup
    /// fails.
    pub fn permissive(checked_at: DateTime<Utc>) -> Self {
        Self {
            report_id: None,
            status: None,
            can_regenerate: true,
            checked_at,
        }
    }

    /// An existing report with an unrecognized status blocks regeneration.
    pub fn for_report(report: Option<&FinancialReport>, checked_at: DateTime<Utc>) -> Self {
        match report {
            None => Self::permissive(checked_at),
            Some(report) => Self {
                report_id: Some(report.id),
                status: report.status,
                can_regenerate: report.status.is_some_and(|s| can_regenerate(Some(s))),
                checked_at,
            },
        }
    }
}

/// Final gate before the destructive regeneration call. The decision must be
/// permissive and fresh; callers re-fetch it when this returns a staleness
/// error.
pub fn authorize_regeneration(
    request: &RegenerateStatementRequest,
    decision: &RegenerationDecision,
    now: DateTime<Utc>,
    staleness_window: Duration,
) -> Result<(), ServerError> {
    let statement = request.statement.statement_code();
    if decision.is_stale(now, staleness_window) {
        return Err(StaleRegenerationDecision::new(
            statement,
            (now - decision.checked_at).num_seconds(),
            staleness_window.num_seconds(),
        ));
    }
    if !decision.can_regenerate {
        let status = decision.status.map(|s| s.as_str()).unwrap_or("unknown");
        warn!(statement, status, "regeneration blocked");
        return Err(RegenerationBlocked::new(statement, status));
    }
    info!(
        statement,
        reporting_period_id = request.reporting_period_id,
        project = request.project_type.api_name(),
        "regeneration authorized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ProjectType, StatementType};

    fn report(status: ReportStatus) -> FinancialReport {
        FinancialReport {
            id: 7,
            reporting_period_id: 3,
            status: Some(status),
        }
    }

    fn request() -> RegenerateStatementRequest {
        RegenerateStatementRequest {
            statement: StatementType::RevenueExpenditure,
            reporting_period_id: 3,
            project_type: ProjectType::Hiv,
            facility_id: Some(338),
            delete_existing: true,
        }
    }

    #[test]
    fn safe_statuses_allow_regeneration() {
        assert!(can_regenerate(None));
        for status in [
            ReportStatus::Draft,
            ReportStatus::RejectedByDaf,
            ReportStatus::RejectedByDg,
            ReportStatus::Rejected,
        ] {
            assert!(can_regenerate(Some(status)), "{status:?}");
        }
    }

    #[test]
    fn submitted_and_approved_statuses_block_regeneration() {
        for status in [
            ReportStatus::Submitted,
            ReportStatus::PendingDafApproval,
            ReportStatus::ApprovedByDaf,
            ReportStatus::Approved,
            ReportStatus::FullyApproved,
        ] {
            assert!(!can_regenerate(Some(status)), "{status:?}");
        }
    }

    #[test]
    fn decision_carries_report_details() {
        let now = Utc::now();
        let decision =
            RegenerationDecision::for_report(Some(&report(ReportStatus::ApprovedByDaf)), now);
        assert_eq!(decision.report_id, Some(7));
        assert_eq!(decision.status, Some(ReportStatus::ApprovedByDaf));
        assert!(!decision.can_regenerate);

        let none = RegenerationDecision::for_report(None, now);
        assert_eq!(none, RegenerationDecision::permissive(now));
        assert!(none.can_regenerate);
    }

    #[test]
    fn unrecognized_status_blocks_regeneration() {
        let now = Utc::now();
        let report = FinancialReport {
            id: 9,
            reporting_period_id: 3,
            status: None,
        };
        let decision = RegenerationDecision::for_report(Some(&report), now);
        assert_eq!(decision.report_id, Some(9));
        assert_eq!(decision.status, None);
        assert!(!decision.can_regenerate);
        assert!(authorize_regeneration(&request(), &decision, now, Duration::minutes(2)).is_err());
    }

    #[test]
    fn authorizes_fresh_permissive_decision() {
        let now = Utc::now();
        let decision = RegenerationDecision::for_report(Some(&report(ReportStatus::Draft)), now);
        assert!(authorize_regeneration(&request(), &decision, now, Duration::minutes(2)).is_ok());
    }

    #[test]
    fn blocks_approved_report() {
        let now = Utc::now();
        let decision =
            RegenerationDecision::for_report(Some(&report(ReportStatus::Approved)), now);
        assert!(authorize_regeneration(&request(), &decision, now, Duration::minutes(2)).is_err());
    }

    #[test]
    fn rejects_stale_decision() {
        let checked_at = Utc::now();
        let decision = RegenerationDecision::permissive(checked_at);
        let window = Duration::minutes(2);
        let later = checked_at + Duration::minutes(3);
        assert!(decision.is_stale(later, window));
        assert!(authorize_regeneration(&request(), &decision, later, window).is_err());

        let soon = checked_at + Duration::seconds(90);
        assert!(authorize_regeneration(&request(), &decision, soon, window).is_ok());
    }
}
